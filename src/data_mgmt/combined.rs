use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use super::models::ReadingKind;
use super::OutputError;

/// Accumulates raw API payloads, grouped by reading kind.
///
/// Serializes to the historical output shape: a single-element array
/// wrapping one object with the three kind keys.
#[derive(Debug, Default, Serialize)]
pub struct CombinedData {
    current: Vec<Value>,
    daily: Vec<Value>,
    hourly: Vec<Value>,
}

impl CombinedData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, kind: ReadingKind, payload: Value) {
        match kind {
            ReadingKind::Current => self.current.push(payload),
            ReadingKind::Daily => self.daily.push(payload),
            ReadingKind::Hourly => self.hourly.push(payload),
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<(), OutputError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &[self])?;
        writer.flush()?;
        Ok(())
    }
}
