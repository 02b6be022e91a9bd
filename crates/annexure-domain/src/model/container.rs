//! Container particulars (section 11 of the form)

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Container size as offered by the size selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerSize {
    #[default]
    #[serde(rename = "20 ft", alias = "20ft", alias = "20")]
    TwentyFt,
    #[serde(rename = "40 ft", alias = "40ft", alias = "40")]
    FortyFt,
    #[serde(rename = "Other", alias = "other")]
    Other,
}

impl ContainerSize {
    /// All sizes, in selector order
    pub const ALL: [ContainerSize; 3] = [
        ContainerSize::TwentyFt,
        ContainerSize::FortyFt,
        ContainerSize::Other,
    ];

    /// Label shown in the selector and printed in the document
    pub fn label(&self) -> &'static str {
        match self {
            ContainerSize::TwentyFt => "20 ft",
            ContainerSize::FortyFt => "40 ft",
            ContainerSize::Other => "Other",
        }
    }
}

impl fmt::Display for ContainerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContainerSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '\'')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "20" | "20ft" => Ok(ContainerSize::TwentyFt),
            "40" | "40ft" => Ok(ContainerSize::FortyFt),
            "other" => Ok(ContainerSize::Other),
            _ => Err(format!("unknown container size: {}", s)),
        }
    }
}

/// One row of container particulars.
///
/// Every field may be left empty; incomplete rows are printed as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerRecord {
    pub number: String,
    pub size: ContainerSize,
    pub seal_number: String,
    pub sealing_date: NaiveDate,
}

impl ContainerRecord {
    /// Empty row sealed on `date`
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            number: String::new(),
            size: ContainerSize::default(),
            seal_number: String::new(),
            sealing_date: date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_labels() {
        assert_eq!(ContainerSize::TwentyFt.to_string(), "20 ft");
        assert_eq!(ContainerSize::FortyFt.to_string(), "40 ft");
        assert_eq!(ContainerSize::Other.to_string(), "Other");
    }

    #[test]
    fn test_size_from_str_variants() {
        assert_eq!("20 ft".parse::<ContainerSize>(), Ok(ContainerSize::TwentyFt));
        assert_eq!("40FT".parse::<ContainerSize>(), Ok(ContainerSize::FortyFt));
        assert_eq!("40'".parse::<ContainerSize>(), Ok(ContainerSize::FortyFt));
        assert_eq!(" other ".parse::<ContainerSize>(), Ok(ContainerSize::Other));
        assert!("45 ft".parse::<ContainerSize>().is_err());
    }

    #[test]
    fn test_size_serde_uses_labels() {
        let json = serde_json::to_string(&ContainerSize::FortyFt).unwrap();
        assert_eq!(json, "\"40 ft\"");
        let parsed: ContainerSize = serde_json::from_str("\"20ft\"").unwrap();
        assert_eq!(parsed, ContainerSize::TwentyFt);
    }

    #[test]
    fn test_blank_record() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let record = ContainerRecord::blank(date);
        assert!(record.number.is_empty());
        assert!(record.seal_number.is_empty());
        assert_eq!(record.size, ContainerSize::TwentyFt);
        assert_eq!(record.sealing_date, date);
    }
}
