use crate::utils::time::elapsed;
use serde::{Deserialize, Serialize};

/// Pilot's on-duty window. Independent of the rows and of the closed flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DutyWindow {
    pub duty_start: String,
    pub duty_end: String,
}

impl DutyWindow {
    /// Duty duration as `HH:MM`, empty while either end is missing.
    pub fn duration(&self) -> String {
        elapsed(&self.duty_start, &self.duty_end)
    }
}
