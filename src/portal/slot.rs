use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::consts::SLOT_TIME_FORMAT;
use crate::error::SlotParseError;

/// Slot entry as served by the portal; unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSlot {
    pub(crate) id: u64,
    pub(crate) start: String,
    pub(crate) end: String,
}

/// A time range during which the team's work can be corrected.
#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub(crate) id: u64,
    pub(crate) start: NaiveDateTime,
    pub(crate) end: NaiveDateTime,
}

impl Slot {
    pub(crate) fn from_raw(raw: &RawSlot) -> Result<Self, SlotParseError> {
        Ok(Slot {
            id: raw.id,
            start: parse_slot_time(&raw.start)?,
            end: parse_slot_time(&raw.end)?,
        })
    }

    /// Render the slot relative to `today`: slots running entirely today
    /// show times only, anything else shows full dates.
    pub(crate) fn format_on(&self, today: NaiveDate) -> String {
        if self.start.date() == today && self.end.date() == today {
            format!(
                "{} - {}",
                self.start.format("%H:%M"),
                self.end.format("%H:%M")
            )
        } else {
            format!(
                "{} - {}",
                self.start.format("%d/%m/%Y %H:%M"),
                self.end.format("%d/%m/%Y %H:%M")
            )
        }
    }
}

/// The portal occasionally reshuffles times under the same id; identity
/// is the id alone.
impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Slot {}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_on(Local::now().date_naive()))
    }
}

/// Decode a portal response body into slots.
pub(crate) fn parse_slots(reader: impl std::io::Read) -> Result<Vec<Slot>, SlotParseError> {
    let raw: Vec<RawSlot> = serde_json::from_reader(reader)?;
    raw.iter().map(Slot::from_raw).collect()
}

/// Portal timestamps carry fractional seconds and a UTC offset; only the
/// first 19 characters ("%Y-%m-%dT%H:%M:%S") matter here.
fn parse_slot_time(value: &str) -> Result<NaiveDateTime, SlotParseError> {
    let head = value.get(..19).unwrap_or(value);
    NaiveDateTime::parse_from_str(head, SLOT_TIME_FORMAT).map_err(|_| {
        SlotParseError::Timestamp {
            input: value.to_string(),
        }
    })
}
