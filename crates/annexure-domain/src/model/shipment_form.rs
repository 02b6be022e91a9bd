use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ContainerRecord;

/// Snapshot of the intake form taken at the moment of a generate action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentForm {
    pub shipping_bill_no: String,
    pub shipping_bill_date: NaiveDate,
    pub gross_weight_kg: f64,
    pub net_weight_kg: f64,
    pub package_type: String,
    pub containers: Vec<ContainerRecord>,
}

impl ShipmentForm {
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }
}
