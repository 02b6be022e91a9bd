//! Output formatting module

use annexure_domain::service::{generate_weight_report, WeightCheckResult};
use annexure_types::{OutputFormat, Result};
use serde_json::json;

pub fn output_weight_check(output_format: OutputFormat, result: &WeightCheckResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
    } else {
        print!("{}", generate_weight_report(result));
    }
    Ok(())
}

pub fn output_vehicle_checks(output_format: OutputFormat, checks: &[(String, bool)]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let entries: Vec<_> = checks
            .iter()
            .map(|(number, valid)| json!({ "number": number, "valid": valid }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        let width = checks.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(0);
        for (number, valid) in checks {
            let status = if *valid { "valid" } else { "invalid" };
            println!("{:<width$}  {}", number, status, width = width);
        }
    }
    Ok(())
}
