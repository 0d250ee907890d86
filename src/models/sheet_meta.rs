use serde::{Deserialize, Serialize};

/// Header of the sheet plus its open/closed flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetMeta {
    pub pilot: String,
    pub dz: String,
    pub registration: String,
    pub date: String,
    pub start_fuel: String,
    pub closed: bool,
}

/// Header fields that can be edited on an open sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderUpdate {
    pub pilot: Option<String>,
    pub dz: Option<String>,
    pub registration: Option<String>,
    pub date: Option<String>,
    pub start_fuel: Option<String>,
}

impl HeaderUpdate {
    pub fn is_empty(&self) -> bool {
        self.pilot.is_none()
            && self.dz.is_none()
            && self.registration.is_none()
            && self.date.is_none()
            && self.start_fuel.is_none()
    }
}
