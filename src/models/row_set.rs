use super::log_row::{FERRY_LABEL, LogRow};
use serde::{Deserialize, Serialize};

/// The sheet's rows: an optional ferry row, always shown first, followed by
/// the numbered load rows in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSet {
    #[serde(default)]
    pub ferry: Option<LogRow>,
    #[serde(default)]
    pub loads: Vec<LogRow>,
}

impl RowSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows in display order, ferry first.
    pub fn iter(&self) -> impl Iterator<Item = &LogRow> {
        self.ferry.iter().chain(self.loads.iter())
    }

    pub fn len(&self) -> usize {
        self.loads.len() + usize::from(self.ferry.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.ferry.is_none() && self.loads.is_empty()
    }

    pub fn has_ferry(&self) -> bool {
        self.ferry.is_some()
    }

    /// Find a row by its load label (`FERRY` selects the ferry row).
    pub fn find(&self, label: &str) -> Option<&LogRow> {
        if label.eq_ignore_ascii_case(FERRY_LABEL) {
            return self.ferry.as_ref();
        }
        self.loads.iter().find(|r| r.load == label.trim())
    }

    pub fn find_mut(&mut self, label: &str) -> Option<&mut LogRow> {
        if label.eq_ignore_ascii_case(FERRY_LABEL) {
            return self.ferry.as_mut();
        }
        self.loads.iter_mut().find(|r| r.load == label.trim())
    }

    /// Remove a row by load label, returning it.
    pub fn remove(&mut self, label: &str) -> Option<LogRow> {
        if label.eq_ignore_ascii_case(FERRY_LABEL) {
            return self.ferry.take();
        }
        let idx = self.loads.iter().position(|r| r.load == label.trim())?;
        Some(self.loads.remove(idx))
    }

    pub fn clear(&mut self) {
        self.ferry = None;
        self.loads.clear();
    }
}
