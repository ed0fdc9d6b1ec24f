//! Generic tabular value with a runtime-discovered schema.
//!
//! Census metadata payloads do not share a schema: which fields appear
//! depends on the dataset and the metadata kind requested. A `Table` holds
//! whatever columns the payload actually produced, in a stable order, and
//! distinguishes "column omitted" (not in `columns`) from "value missing in
//! this row" (`Value::Null`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table from a sequence of JSON records.
    ///
    /// Columns are the union of all record keys, in first-seen order. A
    /// record that lacks a column contributes `Value::Null` in that cell
    /// (the relaxed union used when concatenating heterogeneous records);
    /// a key that no record carries produces no column at all.
    pub fn from_records(records: Vec<Map<String, Value>>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .into_iter()
            .map(|mut record| {
                columns
                    .iter()
                    .map(|col| record.remove(col).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Table { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// True when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// All cell values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// Project onto `preferred`, keeping only columns present in the table
    /// and adopting the preferred order.
    pub fn select(&self, preferred: &[&str]) -> Table {
        let keep: Vec<usize> = preferred
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();

        Table {
            columns: keep.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        }
    }

    /// Stable ascending sort by the named columns, in order of significance.
    /// Key names that are not columns of the table are ignored.
    pub fn sort_by(&mut self, keys: &[&str]) {
        let key_idx: Vec<usize> = keys
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();
        if key_idx.is_empty() {
            return;
        }

        self.rows.sort_by(|a, b| {
            for &i in &key_idx {
                match compare_values(&a[i], &b[i]) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            Ordering::Equal
        });
    }
}

/// Total ordering over JSON values: null, then booleans, numbers, strings,
/// then anything else by its serialized form. Mixed-type columns stay
/// deterministic; homogeneous columns (vintage, dataset) sort naturally.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            _ => 4,
        }
    }

    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ if rank(a) != rank(b) => rank(a).cmp(&rank(b)),
        _ => a.to_string().cmp(&b.to_string()),
    }
}
