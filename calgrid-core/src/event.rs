//! Calendar event types.
//!
//! An [`Event`] is a single entry on the month grid. Events only carry
//! calendar-day resolution in `date`; the optional time of day lives in
//! `time` and is never derived from the date.

use std::fmt;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Stable identity of an event. The only key used for update, removal
/// and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        EventId(id.into())
    }

    /// A fresh, creation-time ordered id.
    pub fn generate() -> Self {
        EventId(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        EventId::new(id)
    }
}

impl Serialize for EventId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Older payloads carry numeric ids (e.g. millisecond timestamps)
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Integer(i64),
            Float(f64),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(s) if s.is_empty() => Err(serde::de::Error::custom("empty event id")),
            RawId::Text(s) => Ok(EventId(s)),
            RawId::Integer(n) => Ok(EventId(n.to_string())),
            RawId::Float(n) => Ok(EventId(n.to_string())),
        }
    }
}

/// How pressing an event is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Low, Urgency::Medium, Urgency::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar event as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Time of day, serialized as "HH:MM" or "" when unset
    #[serde(default, with = "time_of_day")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
}

impl Event {
    /// Whether this event falls on the given calendar day.
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// "HH:MM", or an empty string for events without a time.
    pub fn display_time(&self) -> String {
        format_time(self.time)
    }
}

/// The create/edit result handed to the store: an event that may not have
/// an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub id: Option<EventId>,
    pub title: String,
    pub description: String,
    pub time: Option<NaiveTime>,
    pub urgency: Urgency,
    pub date: NaiveDate,
}

impl NewEvent {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        NewEvent {
            id: None,
            title: title.into(),
            description: String::new(),
            time: None,
            urgency: Urgency::default(),
            date,
        }
    }

    pub fn with_id(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            time: self.time,
            urgency: self.urgency,
            date: self.date,
        }
    }
}

impl From<Event> for NewEvent {
    fn from(event: Event) -> Self {
        NewEvent {
            id: Some(event.id),
            title: event.title,
            description: event.description,
            time: event.time,
            urgency: event.urgency,
            date: event.date,
        }
    }
}

/// Parse a 24h "H:MM" / "HH:MM" time of day.
///
/// Accepts exactly what `^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$` accepts.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let (hours, minutes) = s.split_once(':')?;

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !(1..=2).contains(&hours.len()) || minutes.len() != 2 {
        return None;
    }
    if !all_digits(hours) || !all_digits(minutes) {
        return None;
    }

    let hour: u32 = hours.parse().ok()?;
    let minute: u32 = minutes.parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

pub fn format_time(time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => format!("{:02}:{:02}", t.hour(), t.minute()),
        None => String::new(),
    }
}

mod time_of_day {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(d)?.unwrap_or_default();
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        super::parse_time(raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid time '{raw}'")))
    }
}

mod calendar_date {
    use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_calendar_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'")))
    }

    pub(super) fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        // UTC timestamps are local midnights written by older clients, so
        // the day is read back in local time. Other offsets keep the day
        // as written.
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            if dt.offset().local_minus_utc() == 0 {
                return Some(dt.with_timezone(&Local).date_naive());
            }
            return Some(dt.date_naive());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|dt| dt.date())
    }
}

/// Parse an ISO-8601 calendar date or timestamp down to its calendar day.
///
/// `Z` timestamps are taken as a local midnight serialized in UTC and are
/// converted to local time before the day is taken.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    calendar_date::parse(raw)
}
