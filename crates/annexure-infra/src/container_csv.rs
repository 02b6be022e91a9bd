//! Container particulars imported from a spreadsheet export
//!
//! Files saved by spreadsheet tools are not always UTF-8; undecodable input
//! is read as Windows-1252 instead.

use std::borrow::Cow;
use std::path::Path;

use chrono::NaiveDate;
use encoding_rs::WINDOWS_1252;
use tracing::{debug, warn};

use annexure_domain::model::{ContainerRecord, ContainerSize};
use annexure_types::ContainerCsvError;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Column positions resolved from the header row
struct Columns {
    number: usize,
    size: usize,
    seal_number: usize,
    sealing_date: usize,
}

/// Load container rows from a CSV file with a header row.
///
/// Expected columns (any order, extra columns ignored):
/// container_no, size, seal_no, sealing_date
///
/// Empty sealing dates take `today`.
pub fn load_containers_csv(
    path: &Path,
    today: NaiveDate,
) -> Result<Vec<ContainerRecord>, ContainerCsvError> {
    let bytes = std::fs::read(path)?;
    let records = parse_containers_csv(&bytes, today)?;
    debug!(path = %path.display(), rows = records.len(), "loaded container CSV");
    Ok(records)
}

pub fn parse_containers_csv(
    bytes: &[u8],
    today: NaiveDate,
) -> Result<Vec<ContainerRecord>, ContainerCsvError> {
    let decoded = decode(bytes);
    let text = decoded.trim_start_matches('\u{feff}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut containers = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        // +2: 0-based index, header is row 1
        let row_num = row_idx + 2;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        containers.push(parse_record(&record, &columns, row_num, today)?);
    }

    Ok(containers)
}

fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            warn!("container CSV is not UTF-8, decoding as Windows-1252");
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            decoded
        }
    }
}

fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn resolve_columns(headers: &csv::StringRecord) -> Result<Columns, ContainerCsvError> {
    let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
    let find = |name: &str, aliases: &[&str]| {
        normalized
            .iter()
            .position(|h| aliases.contains(&h.as_str()))
            .ok_or_else(|| ContainerCsvError::MissingColumn(name.to_string()))
    };

    Ok(Columns {
        number: find("container_no", &["containerno", "containernumber", "container", "number"])?,
        size: find("size", &["size", "containersize"])?,
        seal_number: find("seal_no", &["sealno", "sealnumber", "seal"])?,
        sealing_date: find("sealing_date", &["sealingdate", "dateofsealing", "date"])?,
    })
}

fn parse_record(
    record: &csv::StringRecord,
    columns: &Columns,
    row_num: usize,
    today: NaiveDate,
) -> Result<ContainerRecord, ContainerCsvError> {
    let field = |idx: usize| record.get(idx).unwrap_or("");

    let size_str = field(columns.size);
    let size = if size_str.is_empty() {
        ContainerSize::default()
    } else {
        size_str
            .parse::<ContainerSize>()
            .map_err(|_| ContainerCsvError::InvalidSize {
                row: row_num,
                value: size_str.to_string(),
            })?
    };

    let date_str = field(columns.sealing_date);
    let sealing_date = if date_str.is_empty() {
        today
    } else {
        parse_date(date_str).ok_or_else(|| ContainerCsvError::InvalidDate {
            row: row_num,
            value: date_str.to_string(),
        })?
    };

    Ok(ContainerRecord {
        number: field(columns.number).to_string(),
        size,
        seal_number: field(columns.seal_number).to_string(),
        sealing_date,
    })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
