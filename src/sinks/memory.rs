//! In-memory sink
//!
//! Clones share one buffer, so a clone can be handed to
//! [`Logger::pipe`](crate::Logger::pipe) while the original is inspected.

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written, concatenated.
    pub fn contents(&self) -> String {
        self.records.lock().iter().map(|(_, m)| m.as_str()).collect()
    }

    /// Each message without its line ending.
    pub fn lines(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|(_, m)| m.trim_end_matches(['\r', '\n']).to_string())
            .collect()
    }

    /// `(log type, message)` pairs in write order.
    pub fn records(&self) -> Vec<(String, String)> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&mut self, log_type: &str, message: &str) -> Result<()> {
        self.records
            .lock()
            .push((log_type.to_string(), message.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
