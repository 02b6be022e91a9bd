//! Document rendering: validated form in, printable Annexure-C out

mod document;

pub use document::{default_file_name, AnnexureDocument};

use chrono::NaiveDate;
use handlebars::Handlebars;
use serde::Serialize;
use tracing::{info, warn};

use annexure_domain::model::ShipmentForm;
use annexure_domain::service::ensure_net_within_gross;
use annexure_types::{Error, Result};

use crate::config::Config;

const TEMPLATE_NAME: &str = "annexure_c";
const ANNEXURE_C_TEMPLATE: &str = include_str!("annexure_c.hbs");

/// How entered values are inserted into the markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escaping {
    /// Escape markup-significant characters
    #[default]
    Html,
    /// Insert values exactly as entered
    Verbatim,
}

/// `DD-MM-YYYY`, zero padded
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Two decimal places with unit, e.g. `1500.00 Kg`
pub fn format_weight(kg: f64) -> String {
    format!("{:.2} Kg", kg)
}

#[derive(Serialize)]
struct DocumentContext<'a> {
    shipping_bill_no: &'a str,
    shipping_bill_date: String,
    package_type: &'a str,
    gross_weight: String,
    net_weight: String,
    exporter_name: &'a str,
    containers: Vec<ContainerRow<'a>>,
}

#[derive(Serialize)]
struct ContainerRow<'a> {
    number: &'a str,
    size: &'static str,
    seal_number: &'a str,
    sealing_date: String,
}

impl<'a> DocumentContext<'a> {
    fn new(form: &'a ShipmentForm, exporter_name: &'a str) -> Self {
        Self {
            shipping_bill_no: &form.shipping_bill_no,
            shipping_bill_date: format_date(form.shipping_bill_date),
            package_type: &form.package_type,
            gross_weight: format_weight(form.gross_weight_kg),
            net_weight: format_weight(form.net_weight_kg),
            exporter_name,
            containers: form
                .containers
                .iter()
                .map(|c| ContainerRow {
                    number: &c.number,
                    size: c.size.label(),
                    seal_number: &c.seal_number,
                    sealing_date: format_date(c.sealing_date),
                })
                .collect(),
        }
    }
}

/// Renders shipment forms into the fixed Annexure-C layout.
///
/// Rendering is pure: the same form always gives byte-identical output.
pub struct Renderer {
    registry: Handlebars<'static>,
    exporter_name: String,
}

impl Renderer {
    pub fn new(exporter_name: impl Into<String>, escaping: Escaping) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        if escaping == Escaping::Verbatim {
            registry.register_escape_fn(handlebars::no_escape);
        }
        registry
            .register_template_string(TEMPLATE_NAME, ANNEXURE_C_TEMPLATE)
            .map_err(|e| Error::Template(e.to_string()))?;

        Ok(Self {
            registry,
            exporter_name: exporter_name.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.exporter_name.clone(), config.escaping())
    }

    pub fn exporter_name(&self) -> &str {
        &self.exporter_name
    }

    /// Render without validating; callers go through [`generate`].
    pub fn render(&self, form: &ShipmentForm) -> Result<AnnexureDocument> {
        let context = DocumentContext::new(form, &self.exporter_name);
        let html = self
            .registry
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| Error::Template(e.to_string()))?;
        Ok(AnnexureDocument::new(html))
    }
}

/// Submission path: weight check, then render.
///
/// Returns [`Error::WeightConstraintViolation`] and produces no markup when
/// net weight exceeds gross weight.
pub fn generate(form: &ShipmentForm, renderer: &Renderer) -> Result<AnnexureDocument> {
    if let Err(e) = ensure_net_within_gross(form) {
        warn!(
            shipping_bill_no = %form.shipping_bill_no,
            gross_kg = form.gross_weight_kg,
            net_kg = form.net_weight_kg,
            "rejected: net weight exceeds gross weight"
        );
        return Err(e);
    }

    let document = renderer.render(form)?;
    info!(
        shipping_bill_no = %form.shipping_bill_no,
        containers = form.containers.len(),
        bytes = document.as_str().len(),
        "generated Annexure-C"
    );
    Ok(document)
}
