//! Form intake: session state behind the form surface
//!
//! The container count and each row's in-progress values live here, apart
//! from rendering, so they survive re-renders of the form.

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use annexure_domain::model::{ContainerRecord, ShipmentForm};
use annexure_infra::FormInput;

pub use annexure_domain::service::is_valid_indian_vehicle_number;

/// In-progress values of one container row group
pub type ContainerDraft = ContainerRecord;

/// Most container rows a session will hold. Larger requests are capped.
pub const MAX_CONTAINER_COUNT: usize = 10_000;

/// Where default dates come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefaultDate {
    /// Local current date, read each time a default is needed
    Local,
    Fixed(NaiveDate),
}

impl DefaultDate {
    fn get(self) -> NaiveDate {
        match self {
            DefaultDate::Local => Local::now().date_naive(),
            DefaultDate::Fixed(date) => date,
        }
    }
}

/// Editable state of the form for one interactive session
#[derive(Debug, Clone)]
pub struct FormSession {
    pub shipping_bill_no: String,
    pub shipping_bill_date: NaiveDate,
    pub gross_weight_kg: f64,
    pub net_weight_kg: f64,
    pub package_type: String,
    container_count: usize,
    /// May hold more rows than `container_count`; hidden rows keep their
    /// values until the count grows again.
    drafts: Vec<ContainerDraft>,
    default_date: DefaultDate,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// New session with dates defaulting to the local current date, read
    /// again whenever a new row or a reset needs it
    pub fn new() -> Self {
        Self::with_default_date(DefaultDate::Local)
    }

    /// New session with dates defaulting to `today`
    pub fn with_today(today: NaiveDate) -> Self {
        Self::with_default_date(DefaultDate::Fixed(today))
    }

    fn with_default_date(default_date: DefaultDate) -> Self {
        let today = default_date.get();
        Self {
            shipping_bill_no: String::new(),
            shipping_bill_date: today,
            gross_weight_kg: 0.0,
            net_weight_kg: 0.0,
            package_type: String::new(),
            container_count: 1,
            drafts: vec![ContainerDraft::blank(today)],
            default_date,
        }
    }

    /// Build a session from a form file; missing values take the defaults.
    pub fn from_input(input: FormInput, today: NaiveDate) -> Self {
        let mut session = Self::with_today(today);
        session.apply_input(input);
        session
    }

    /// Like [`FormSession::from_input`], with dates defaulting to the local
    /// current date
    pub fn from_input_local(input: FormInput) -> Self {
        let mut session = Self::new();
        session.apply_input(input);
        session
    }

    fn apply_input(&mut self, input: FormInput) {
        let today = self.today();
        if let Some(no) = input.shipping_bill_no {
            self.shipping_bill_no = no;
        }
        if let Some(date) = input.shipping_bill_date {
            self.shipping_bill_date = date;
        }
        self.gross_weight_kg = non_negative("gross_weight_kg", input.gross_weight_kg);
        self.net_weight_kg = non_negative("net_weight_kg", input.net_weight_kg);
        if let Some(package_type) = input.package_type {
            self.package_type = package_type;
        }

        let listed = input.containers.len();
        self.drafts = input
            .containers
            .into_iter()
            .map(|c| ContainerDraft {
                number: c.number.unwrap_or_default(),
                size: c.size.unwrap_or_default(),
                seal_number: c.seal_number.unwrap_or_default(),
                sealing_date: c.sealing_date.unwrap_or(today),
            })
            .collect();
        self.drafts.truncate(MAX_CONTAINER_COUNT);
        self.container_count = 0;
        self.set_container_count(input.container_count.unwrap_or(listed));
    }

    /// Date used for fields left at their default
    pub fn today(&self) -> NaiveDate {
        self.default_date.get()
    }

    pub fn container_count(&self) -> usize {
        self.container_count
    }

    /// Show exactly `count` container row groups.
    ///
    /// The count widget has a minimum of 1; smaller requests are raised to 1
    /// and requests above [`MAX_CONTAINER_COUNT`] are capped.
    pub fn set_container_count(&mut self, count: usize) {
        let count = if count < 1 {
            warn!(requested = count, "container count below 1, using 1");
            1
        } else if count > MAX_CONTAINER_COUNT {
            warn!(
                requested = count,
                max = MAX_CONTAINER_COUNT,
                "container count above limit, capping"
            );
            MAX_CONTAINER_COUNT
        } else {
            count
        };
        if self.drafts.len() < count {
            let today = self.today();
            self.drafts.resize_with(count, || ContainerDraft::blank(today));
        }
        if count != self.container_count {
            debug!(from = self.container_count, to = count, "container count changed");
        }
        self.container_count = count;
    }

    /// Visible container rows
    pub fn containers(&self) -> &[ContainerDraft] {
        &self.drafts[..self.container_count]
    }

    pub fn containers_mut(&mut self) -> &mut [ContainerDraft] {
        &mut self.drafts[..self.container_count]
    }

    /// Replace all container rows, e.g. from a spreadsheet import.
    /// The count follows the number of rows.
    pub fn replace_containers(&mut self, mut rows: Vec<ContainerRecord>) {
        let count = rows.len();
        rows.truncate(MAX_CONTAINER_COUNT);
        self.drafts = rows;
        self.container_count = 0;
        self.set_container_count(count);
    }

    /// Snapshot every field into a [`ShipmentForm`]. No validation.
    pub fn read_form(&self) -> ShipmentForm {
        ShipmentForm {
            shipping_bill_no: self.shipping_bill_no.clone(),
            shipping_bill_date: self.shipping_bill_date,
            gross_weight_kg: self.gross_weight_kg,
            net_weight_kg: self.net_weight_kg,
            package_type: self.package_type.clone(),
            containers: self.containers().to_vec(),
        }
    }

    /// Clear all values, keeping the container count
    pub fn reset(&mut self) {
        let count = self.container_count;
        *self = Self::with_default_date(self.default_date);
        self.set_container_count(count);
    }
}

/// Weights are finite and non-negative, as the number widgets enforce
fn non_negative(field: &str, value: Option<f64>) -> f64 {
    match value {
        Some(v) if !v.is_finite() => {
            warn!(field, value = v, "non-finite weight, using 0");
            0.0
        }
        Some(v) if v < 0.0 => {
            warn!(field, value = v, "negative weight, using 0");
            0.0
        }
        Some(v) => v,
        None => 0.0,
    }
}
