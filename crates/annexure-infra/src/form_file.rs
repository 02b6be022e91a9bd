//! Form files: the on-disk shape of one Annexure-C submission (TOML or JSON)

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use annexure_domain::model::ContainerSize;
use annexure_types::{Error, Result};

/// Form values as written by hand. Every field is optional; gaps take the
/// intake defaults when the form is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_bill_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_bill_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    /// Number of container rows to print. Defaults to the number of entries
    /// in `containers`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_count: Option<usize>,
    pub containers: Vec<ContainerInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ContainerSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seal_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sealing_date: Option<NaiveDate>,
}

impl FormInput {
    /// A filled-in sample form
    pub fn template() -> Self {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5);
        Self {
            shipping_bill_no: Some("SB123456".to_string()),
            shipping_bill_date: date,
            gross_weight_kg: Some(1500.0),
            net_weight_kg: Some(1350.0),
            package_type: Some("Cartons".to_string()),
            container_count: Some(2),
            containers: vec![
                ContainerInput {
                    number: Some("MSKU1234567".to_string()),
                    size: Some(ContainerSize::TwentyFt),
                    seal_number: Some("SL-0001".to_string()),
                    sealing_date: date,
                },
                ContainerInput {
                    number: Some("TGHU7654321".to_string()),
                    size: Some(ContainerSize::FortyFt),
                    seal_number: Some("SL-0002".to_string()),
                    sealing_date: date,
                },
            ],
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Load a form file, choosing the parser by extension (`.toml` or `.json`)
pub fn load_form_file(path: &Path) -> Result<FormInput> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let content = std::fs::read_to_string(path)?;
    let input: FormInput = match extension.as_deref() {
        Some("toml") => toml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        _ => {
            return Err(Error::FormFile(format!(
                "unsupported form file (expected .toml or .json): {}",
                path.display()
            )))
        }
    };

    debug!(
        path = %path.display(),
        containers = input.containers.len(),
        "loaded form file"
    );
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_toml_form() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("form.toml");
        std::fs::write(
            &path,
            r#"
shipping_bill_no = "SB123456"
shipping_bill_date = "2024-03-05"
gross_weight_kg = 100.0
net_weight_kg = 90.0

[[containers]]
number = "MSKU1234567"
size = "40 ft"

[[containers]]
seal_number = "S2"
"#,
        )
        .unwrap();

        let input = load_form_file(&path).unwrap();
        assert_eq!(input.shipping_bill_no.as_deref(), Some("SB123456"));
        assert_eq!(input.shipping_bill_date, NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(input.gross_weight_kg, Some(100.0));
        assert!(input.package_type.is_none());
        assert!(input.container_count.is_none());
        assert_eq!(input.containers.len(), 2);
        assert_eq!(input.containers[0].size, Some(ContainerSize::FortyFt));
        assert_eq!(input.containers[1].seal_number.as_deref(), Some("S2"));
        assert!(input.containers[1].number.is_none());
    }

    #[test]
    fn test_load_json_form() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("form.JSON");
        std::fs::write(
            &path,
            r#"{"package_type": "Bags", "container_count": 3, "containers": [{"size": "20ft"}]}"#,
        )
        .unwrap();

        let input = load_form_file(&path).unwrap();
        assert_eq!(input.package_type.as_deref(), Some("Bags"));
        assert_eq!(input.container_count, Some(3));
        assert_eq!(input.containers[0].size, Some(ContainerSize::TwentyFt));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("form.yaml");
        std::fs::write(&path, "shipping_bill_no: x").unwrap();
        assert!(matches!(load_form_file(&path), Err(Error::FormFile(_))));
    }

    #[test]
    fn test_template_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("template.toml");
        let template = FormInput::template();
        std::fs::write(&path, template.to_toml_string().unwrap()).unwrap();

        let reloaded = load_form_file(&path).unwrap();
        assert_eq!(reloaded, template);
    }
}
