use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// The eleven sheet columns, in CSV / print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowField {
    Load,
    Takeoff,
    Landing,
    FlightTime,
    BlockTime,
    FuelOnBoard,
    FuelBurned,
    Passengers,
    Landings,
    FollowUp,
    Remarks,
}

pub const ALL_FIELDS: [RowField; 11] = [
    RowField::Load,
    RowField::Takeoff,
    RowField::Landing,
    RowField::FlightTime,
    RowField::BlockTime,
    RowField::FuelOnBoard,
    RowField::FuelBurned,
    RowField::Passengers,
    RowField::Landings,
    RowField::FollowUp,
    RowField::Remarks,
];

impl RowField {
    /// Column header as written in CSV and on the printed sheet.
    pub fn header(&self) -> &'static str {
        match self {
            RowField::Load => "Load",
            RowField::Takeoff => "T/O",
            RowField::Landing => "L/D",
            RowField::FlightTime => "FLT/T",
            RowField::BlockTime => "BLK/T",
            RowField::FuelOnBoard => "FOB",
            RowField::FuelBurned => "F/B",
            RowField::Passengers => "PAX",
            RowField::Landings => "LDG",
            RowField::FollowUp => "F/UP",
            RowField::Remarks => "REMARKS",
        }
    }

    /// Long name accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            RowField::Load => "load",
            RowField::Takeoff => "takeoff",
            RowField::Landing => "landing",
            RowField::FlightTime => "flight-time",
            RowField::BlockTime => "block",
            RowField::FuelOnBoard => "fob",
            RowField::FuelBurned => "fuel-burned",
            RowField::Passengers => "pax",
            RowField::Landings => "ldg",
            RowField::FollowUp => "follow-up",
            RowField::Remarks => "remarks",
        }
    }

    /// Resolve a CLI field name: either the long name or the column header,
    /// case-insensitive.
    pub fn from_name(s: &str) -> AppResult<Self> {
        let wanted = s.trim().to_lowercase();
        ALL_FIELDS
            .iter()
            .copied()
            .find(|f| f.name() == wanted || f.header().to_lowercase() == wanted)
            .ok_or_else(|| AppError::UnknownField(s.to_string()))
    }

    /// Load is assigned by sequencing and flight time is derived.
    pub fn is_editable(&self) -> bool {
        !matches!(self, RowField::Load | RowField::FlightTime)
    }
}

/// Header line of the CSV format.
pub fn csv_headers() -> Vec<&'static str> {
    ALL_FIELDS.iter().map(RowField::header).collect()
}
