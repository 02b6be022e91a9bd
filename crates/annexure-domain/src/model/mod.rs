//! Domain model types

pub mod container;
pub mod shipment_form;

pub use container::{ContainerRecord, ContainerSize};
pub use shipment_form::ShipmentForm;
