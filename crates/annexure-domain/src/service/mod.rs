//! Domain services

pub mod vehicle_number;
pub mod weight_checker;

pub use vehicle_number::is_valid_indian_vehicle_number;
pub use weight_checker::{check_weights, ensure_net_within_gross, generate_weight_report, WeightCheckResult};
