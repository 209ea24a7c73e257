use std::collections::BTreeSet;
use std::path::Path;

use serde_json::Value;

use super::OutputError;

const DEVICE_ID_COLUMN: &str = "device_id";

/// Tabular accumulator for the CSV output variant.
///
/// One row per device whose `current` fetch succeeded, in fetch order. The
/// columns are the union of the payloads' top-level keys, sorted, with the
/// device identifier prepended; the header row is always written.
#[derive(Debug, Default)]
pub struct CurrentTable {
    rows: Vec<(String, Value)>,
}

impl CurrentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, device_id: &str, payload: Value) {
        self.rows.push((device_id.to_string(), payload));
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn write_csv(&self, path: &Path) -> Result<(), OutputError> {
        let mut writer = csv::Writer::from_path(path)?;
        let columns = self.columns();

        let mut header = Vec::with_capacity(columns.len() + 1);
        header.push(DEVICE_ID_COLUMN.to_string());
        header.extend(columns.iter().cloned());
        writer.write_record(&header)?;

        for (device_id, payload) in &self.rows {
            let mut record = Vec::with_capacity(columns.len() + 1);
            record.push(device_id.clone());
            for column in &columns {
                record.push(cell_value(payload.get(column)));
            }
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn columns(&self) -> Vec<String> {
        let mut keys = BTreeSet::new();
        for (_, payload) in &self.rows {
            if let Some(object) = payload.as_object() {
                keys.extend(object.keys().cloned());
            }
        }
        keys.into_iter().collect()
    }
}

/// Scalars are rendered bare; nested structures as compact JSON.
fn cell_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
