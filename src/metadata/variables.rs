//! Normalizes a dataset's variable dictionary into a flat table, optionally
//! expanding each variable's value codes and labels into one row per code.

use crate::error::PayloadError;
use crate::table::Table;
use serde_json::{Map, Value};

/// Preferred column order for the variables table. `code` and `code_label`
/// only materialize under label expansion.
const VARIABLE_COLUMNS: [&str; 8] = [
    "name",
    "label",
    "concept",
    "required",
    "predicateType",
    "group",
    "code",
    "code_label",
];

/// Convert a variables payload into a table of variable descriptors.
///
/// `meta_type` names the top-level payload key (conventionally
/// `"variables"`), which maps each variable name to its attribute record.
/// When `variables` is given, the table is restricted to those names; a
/// name the payload does not carry is an error. With `include_labels`, a
/// variable whose record nests `values.item` code/label pairs produces one
/// row per pair, each repeating the variable's scalar attributes.
pub fn extract_variables(
    resp: &Value,
    variables: Option<&[String]>,
    include_labels: bool,
    meta_type: &str,
) -> Result<Table, PayloadError> {
    let entries = resp.get(meta_type).ok_or_else(|| PayloadError::MissingKey {
        key: meta_type.to_string(),
    })?;
    let entries = entries
        .as_object()
        .ok_or_else(|| PayloadError::UnexpectedShape {
            key: meta_type.to_string(),
            expected: "a mapping of variable records".to_string(),
        })?;

    let names: Vec<String> = match variables {
        Some(requested) => requested.to_vec(),
        None => entries.keys().cloned().collect(),
    };

    let mut records = Vec::new();
    for name in &names {
        let attrs = entries
            .get(name)
            .ok_or_else(|| PayloadError::UnknownVariable { name: name.clone() })?;
        let attrs = attrs
            .as_object()
            .ok_or_else(|| PayloadError::UnexpectedShape {
                key: name.clone(),
                expected: "a variable record".to_string(),
            })?;

        let mut base = Map::new();
        base.insert("name".to_string(), Value::String(name.clone()));
        for (key, value) in attrs {
            base.insert(key.clone(), value.clone());
        }

        let codes = if include_labels {
            base.get("values")
                .and_then(|values| values.get("item"))
                .and_then(Value::as_object)
                .cloned()
        } else {
            None
        };

        match codes {
            // zero codes still contributes exactly one row
            Some(items) if !items.is_empty() => {
                for (code, label) in items {
                    let mut row = base.clone();
                    row.insert("code".to_string(), Value::String(code));
                    row.insert("code_label".to_string(), label);
                    records.push(row);
                }
            }
            _ => records.push(base),
        }
    }

    Ok(Table::from_records(records).select(&VARIABLE_COLUMNS))
}
