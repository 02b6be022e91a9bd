//! Gross/net weight check run before a document is generated

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use annexure_types::{Error, Result};

use crate::model::ShipmentForm;

/// Outcome of comparing the declared weights of a form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightCheckResult {
    pub shipping_bill_no: String,
    pub gross_weight_kg: f64,
    pub net_weight_kg: f64,
    pub is_valid: bool,
    /// Packing weight (gross - net), only when the check passes
    pub tare_kg: Option<f64>,
    /// How far net exceeds gross, only when the check fails
    pub excess_kg: Option<f64>,
    pub container_count: usize,
}

pub fn check_weights(form: &ShipmentForm) -> WeightCheckResult {
    let gross = form.gross_weight_kg;
    let net = form.net_weight_kg;
    let is_valid = ensure_net_within_gross(form).is_ok();
    WeightCheckResult {
        shipping_bill_no: form.shipping_bill_no.clone(),
        gross_weight_kg: gross,
        net_weight_kg: net,
        is_valid,
        tare_kg: if is_valid { Some(gross - net) } else { None },
        excess_kg: if is_valid { None } else { Some(net - gross) },
        container_count: form.container_count(),
    }
}

/// Guard for the submission path: net weight must not exceed gross weight.
///
/// Weights that cannot be compared (NaN) or are not finite are rejected too.
pub fn ensure_net_within_gross(form: &ShipmentForm) -> Result<()> {
    let gross = form.gross_weight_kg;
    let net = form.net_weight_kg;
    let within = gross.is_finite()
        && net.is_finite()
        && matches!(net.partial_cmp(&gross), Some(Ordering::Less | Ordering::Equal));
    if !within {
        return Err(Error::WeightConstraintViolation {
            gross_kg: gross,
            net_kg: net,
        });
    }
    Ok(())
}

pub fn generate_weight_report(result: &WeightCheckResult) -> String {
    let bill = if result.shipping_bill_no.trim().is_empty() {
        "(not entered)"
    } else {
        result.shipping_bill_no.as_str()
    };

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("              Annexure-C Weight Check              \n");
    report.push_str("==================================================\n\n");
    report.push_str(&format!("  Shipping Bill No.:  {}\n", bill));
    report.push_str(&format!("  Containers:         {}\n", result.container_count));
    report.push_str(&format!("  Gross weight:       {:.2} Kg\n", result.gross_weight_kg));
    report.push_str(&format!("  Net weight:         {:.2} Kg\n", result.net_weight_kg));
    if let Some(tare) = result.tare_kg {
        report.push_str(&format!("  Packing weight:     {:.2} Kg\n", tare));
    }
    report.push('\n');
    if result.is_valid {
        report.push_str("  Result: OK, ready to generate\n");
    } else {
        report.push_str("  Result: NG, net weight cannot be more than gross weight\n");
        if let Some(excess) = result.excess_kg {
            report.push_str(&format!("  Net exceeds gross by {:.2} Kg\n", excess));
        }
    }
    report
}
