//! Normalizes geography-hierarchy (`fips`) and group-listing (`groups`)
//! payloads. These arrive nearly flat; the only reshaping is collapsing
//! list-valued cells into comma-space-joined strings.

use crate::error::PayloadError;
use crate::table::Table;
use serde_json::{Map, Value};

/// Tabularize a geography or groups payload.
///
/// `meta_type` names the top-level payload key (`"fips"` or `"groups"`),
/// which holds an array of records. Rows keep their payload order.
pub fn extract_geo_or_group(resp: &Value, meta_type: &str) -> Result<Table, PayloadError> {
    let entries = resp.get(meta_type).ok_or_else(|| PayloadError::MissingKey {
        key: meta_type.to_string(),
    })?;
    let entries = entries
        .as_array()
        .ok_or_else(|| PayloadError::UnexpectedShape {
            key: meta_type.to_string(),
            expected: "an array of records".to_string(),
        })?;

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let record = entry
            .as_object()
            .ok_or_else(|| PayloadError::UnexpectedShape {
                key: meta_type.to_string(),
                expected: "an array of records".to_string(),
            })?;

        let mut flat = Map::new();
        for (key, value) in record {
            let cell = match value {
                Value::Array(items) => Value::String(join_list(items)),
                other => other.clone(),
            };
            flat.insert(key.clone(), cell);
        }
        records.push(flat);
    }

    Ok(Table::from_records(records))
}

fn join_list(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<String>>()
        .join(", ")
}
