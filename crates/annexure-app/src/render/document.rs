use std::fmt;
use std::path::Path;

use annexure_domain::model::ShipmentForm;
use annexure_types::Result;

/// A finished, self-contained printable Annexure-C (HTML with embedded
/// style and print script)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnexureDocument {
    html: String,
}

impl AnnexureDocument {
    pub(crate) fn new(html: String) -> Self {
        Self { html }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// Write the document to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &self.html)?;
        Ok(())
    }
}

impl fmt::Display for AnnexureDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

/// File name for a form's document: `annexure-c-<bill no>.html`
pub fn default_file_name(form: &ShipmentForm) -> String {
    let bill = form.shipping_bill_no.trim();
    if bill.is_empty() {
        return "annexure-c.html".to_string();
    }
    let safe: String = bill
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("annexure-c-{}.html", safe)
}
