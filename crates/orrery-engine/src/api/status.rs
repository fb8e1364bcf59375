//! Named text fields written by the game for the host's status panel.

use std::collections::BTreeMap;

/// One-way sink for status text. Writes are fire-and-forget.
pub trait StatusSink {
    /// Set `field` to `value`.
    fn set(&mut self, field: &str, value: String);
    /// Remove `field` so the host shows nothing for it.
    fn clear(&mut self, field: &str);
}

/// Status fields collected for the host, serialized as a flat JSON object.
///
/// `version` bumps whenever a field actually changes, so the host can skip
/// re-reading an unchanged panel.
#[derive(Debug, Default, Clone)]
pub struct StatusBoard {
    fields: BTreeMap<String, String>,
    version: u32,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.fields)
    }
}

impl StatusSink for StatusBoard {
    fn set(&mut self, field: &str, value: String) {
        if self.fields.get(field) == Some(&value) {
            return;
        }
        self.fields.insert(field.to_string(), value);
        self.version = self.version.wrapping_add(1);
    }

    fn clear(&mut self, field: &str) {
        if self.fields.remove(field).is_some() {
            self.version = self.version.wrapping_add(1);
        }
    }
}
