//! Normalizes the dataset catalog payload (`data.json` and its vintage- or
//! program-scoped variants) into a flat table of dataset descriptors.

use crate::error::PayloadError;
use crate::table::Table;
use serde_json::{Map, Value};

/// Preferred column order for the catalog table. Columns absent from the
/// payload are omitted, not null-filled.
const DATASET_COLUMNS: [&str; 10] = [
    "dataset",
    "title",
    "description",
    "vintage",
    "type",
    "variablesLink",
    "geographyLink",
    "api_url",
    "contact",
    "modified",
];

/// Convert a dataset-catalog payload into a table of dataset descriptors.
///
/// Expects a `dataset` key holding an array of catalog records. An empty
/// array yields an empty table; only a missing key is an error.
pub fn extract_datasets(resp: &Value) -> Result<Table, PayloadError> {
    let datasets = resp.get("dataset").ok_or_else(|| PayloadError::MissingKey {
        key: "dataset".to_string(),
    })?;
    let datasets = datasets
        .as_array()
        .ok_or_else(|| PayloadError::UnexpectedShape {
            key: "dataset".to_string(),
            expected: "an array of dataset records".to_string(),
        })?;

    let mut records = Vec::with_capacity(datasets.len());
    for entry in datasets {
        let raw = entry
            .as_object()
            .ok_or_else(|| PayloadError::UnexpectedShape {
                key: "dataset".to_string(),
                expected: "an array of dataset records".to_string(),
            })?;
        records.push(normalize_record(raw));
    }

    let mut table = Table::from_records(records).select(&DATASET_COLUMNS);
    table.sort_by(&["vintage", "dataset"]);
    Ok(table)
}

fn normalize_record(raw: &Map<String, Value>) -> Map<String, Value> {
    // Vendor-namespacing artifacts: field names carry a `c_` or `@` prefix.
    let mut record = Map::new();
    for (key, value) in raw {
        let stripped = key
            .strip_prefix("c_")
            .or_else(|| key.strip_prefix('@'))
            .unwrap_or(key);
        record.insert(stripped.to_string(), value.clone());
    }

    let segments: Vec<String> = record
        .get("dataset")
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    // `isTimeseries` only ever acts as the fallback, so the precedence
    // chain never needs its value.
    let is_microdata = classify_flag(&record, &segments, "isMicrodata");
    let is_aggregate = classify_flag(&record, &segments, "isAggregate");
    let dataset_type = if is_microdata {
        "Microdata"
    } else if is_aggregate {
        "Aggregate"
    } else {
        "Timeseries"
    };
    record.insert(
        "type".to_string(),
        Value::String(dataset_type.to_string()),
    );

    // First access URL of the distribution list, when a list exists.
    let api_url = record
        .get("distribution")
        .and_then(Value::as_array)
        .map(|distribution| {
            distribution
                .first()
                .and_then(|entry| entry.get("accessURL"))
                .cloned()
                .unwrap_or(Value::Null)
        });
    if let Some(api_url) = api_url {
        record.insert("api_url".to_string(), api_url);
    }

    let contact = record.get("contactPoint").map(|contact_point| {
        contact_point
            .get("hasEmail")
            .and_then(Value::as_str)
            .map(|email| {
                Value::String(email.strip_prefix("mailto:").unwrap_or(email).to_string())
            })
            .unwrap_or(Value::Null)
    });
    if let Some(contact) = contact {
        record.insert("contact".to_string(), contact);
    }

    if record.get("dataset").is_some_and(Value::is_array) {
        record.insert("dataset".to_string(), Value::String(segments.join("/")));
    }

    record
}

/// Three-way classifier fallback: a present flag is coerced to a strict
/// boolean; an absent flag is derived from whether the identifier segments
/// contain the flag's lowercase token (`isAggregate` -> `aggregate`).
fn classify_flag(record: &Map<String, Value>, segments: &[String], flag: &str) -> bool {
    match record.get(flag) {
        Some(value) => truthy(value),
        None => {
            let token = flag.strip_prefix("is").unwrap_or(flag).to_ascii_lowercase();
            segments.iter().any(|segment| *segment == token)
        }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
