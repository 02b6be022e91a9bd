//! Domain models and services for Annexure-C shipment declarations

pub mod model;
pub mod service;
