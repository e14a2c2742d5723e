use crate::api::{TimeSlot, TimeSlotParseError};
use std::{fmt, str::FromStr};

pub const ALL_SLOTS: &str = "all";

/// Time-slot filter applied to both dashboard requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TimeSlotFilter {
    #[default]
    All,
    Slot(TimeSlot),
}

impl TimeSlotFilter {
    pub fn slot(&self) -> Option<&TimeSlot> {
        match self {
            TimeSlotFilter::All => None,
            TimeSlotFilter::Slot(slot) => Some(slot),
        }
    }
}

impl fmt::Display for TimeSlotFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSlotFilter::All => f.write_str(ALL_SLOTS),
            TimeSlotFilter::Slot(slot) => slot.fmt(f),
        }
    }
}

impl FromStr for TimeSlotFilter {
    type Err = TimeSlotParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim() == ALL_SLOTS {
            return Ok(TimeSlotFilter::All);
        }
        raw.parse().map(TimeSlotFilter::Slot)
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn format_slot(start: Option<&str>, end: Option<&str>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("{}-{}", start, end),
        _ => "-".into(),
    }
}

/// Select options for the slot picker; the active slot is listed even when
/// the latest stats no longer carry it.
pub fn slot_choices(options: &[TimeSlot], active: &TimeSlotFilter) -> Vec<TimeSlot> {
    let mut choices = options.to_vec();
    if let TimeSlotFilter::Slot(slot) = active {
        if !choices.contains(slot) {
            choices.insert(0, slot.clone());
        }
    }
    choices
}
