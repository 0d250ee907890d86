use super::field::{ALL_FIELDS, RowField};
use chrono::Local;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Reserved identifier of the ferry row.
pub const FERRY_ID: &str = "ferry";

/// Load label of the ferry row.
pub const FERRY_LABEL: &str = "FERRY";

static ROW_SEQ: AtomicU64 = AtomicU64::new(0);

/// Fresh opaque row identifier, unique within the sheet.
pub fn new_row_id() -> String {
    let seq = ROW_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("r{:x}-{:x}", Local::now().timestamp_micros(), seq)
}

/// One flight-log entry.
///
/// Stored with camelCase keys. `passengers` / `landings` are `None` when
/// nothing was entered, which is distinct from an explicit `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogRow {
    pub id: String,
    pub load: String,
    pub takeoff: String,
    pub landing: String,
    pub flight_time: String,
    pub block_time: String,
    pub fuel_on_board: String,
    pub fuel_burned: String,
    #[serde(deserialize_with = "count_or_blank")]
    pub passengers: Option<u32>,
    #[serde(deserialize_with = "count_or_blank")]
    pub landings: Option<u32>,
    pub follow_up: String,
    pub remarks: String,
}

impl LogRow {
    /// Empty row with a fresh identifier and the given load label.
    pub fn with_load(load: impl Into<String>) -> Self {
        Self {
            id: new_row_id(),
            load: load.into(),
            ..Self::default()
        }
    }

    pub fn is_ferry(&self) -> bool {
        self.id == FERRY_ID
    }

    /// Numeric load label, if the label is a number.
    pub fn load_number(&self) -> Option<i64> {
        self.load.trim().parse().ok()
    }

    /// Display text of one column.
    pub fn cell(&self, field: RowField) -> String {
        match field {
            RowField::Load => self.load.clone(),
            RowField::Takeoff => self.takeoff.clone(),
            RowField::Landing => self.landing.clone(),
            RowField::FlightTime => self.flight_time.clone(),
            RowField::BlockTime => self.block_time.clone(),
            RowField::FuelOnBoard => self.fuel_on_board.clone(),
            RowField::FuelBurned => self.fuel_burned.clone(),
            RowField::Passengers => count_text(self.passengers),
            RowField::Landings => count_text(self.landings),
            RowField::FollowUp => self.follow_up.clone(),
            RowField::Remarks => self.remarks.clone(),
        }
    }

    /// All eleven columns in sheet order.
    pub fn cells(&self) -> Vec<String> {
        ALL_FIELDS.iter().map(|f| self.cell(*f)).collect()
    }

    /// True when every field but `id` and `load` is blank.
    pub fn is_blank(&self) -> bool {
        ALL_FIELDS
            .iter()
            .filter(|f| **f != RowField::Load)
            .all(|f| self.cell(*f).trim().is_empty())
    }
}

pub fn count_text(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Stored counts may be `null`, a number, `""` or a numeric string.
fn count_or_blank<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u32),
        Text(String),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        Some(Raw::Float(f)) if f.is_finite() && f >= 0.0 => Some(f as u32),
        Some(Raw::Float(_)) => None,
    })
}
