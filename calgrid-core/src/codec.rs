//! Persisted event format.
//!
//! Events are stored as one JSON array. Dates are written as ISO-8601
//! calendar days ("2025-03-20"); full ISO-8601 timestamps are accepted on
//! read and reduced to a calendar day. UTC (`Z`) timestamps are read in
//! local time, since older clients wrote local midnight that way.

use crate::error::{CalGridError, CalGridResult};
use crate::event::Event;

pub fn encode(events: &[Event]) -> CalGridResult<String> {
    serde_json::to_string(events).map_err(|e| CalGridError::Serialization(e.to_string()))
}

/// Decode a stored blob. `null` decodes to no events.
pub fn decode(raw: &str) -> CalGridResult<Vec<Event>> {
    let events: Option<Vec<Event>> =
        serde_json::from_str(raw).map_err(|e| CalGridError::Deserialization(e.to_string()))?;
    Ok(events.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventId, NewEvent, Urgency};
    use chrono::{Local, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};

    fn sample() -> Vec<Event> {
        let mut meeting = NewEvent::new("Team Meeting", NaiveDate::from_ymd_opt(2025, 3, 20).unwrap())
            .with_id(EventId::new("1"));
        meeting.description = "Discuss project updates".to_string();
        meeting.time = NaiveTime::from_hms_opt(14, 0, 0);

        let mut review = NewEvent::new("Review", NaiveDate::from_ymd_opt(2025, 3, 24).unwrap())
            .with_id(EventId::new("2"));
        review.urgency = Urgency::High;

        vec![meeting, review]
    }

    #[test]
    fn test_roundtrip_preserves_every_field() {
        let events = sample();
        let decoded = decode(&encode(&events).unwrap()).unwrap();
        assert_eq!(decoded, events);
    }

    #[test]
    fn test_encode_writes_plain_iso_days() {
        let raw = encode(&sample()).unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains(r#""date":"2025-03-20""#));
        assert!(raw.contains(r#""time":"""#));
    }

    #[test]
    fn test_decode_legacy_timestamp_payload() {
        // Older clients stored local midnight as a UTC timestamp
        let day = NaiveDate::from_ymd_opt(2025, 3, 24).unwrap();
        let written = Local
            .from_local_datetime(&day.and_hms_opt(0, 0, 0).unwrap())
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        let raw = format!(
            r#"[{{"id":"1","title":"Event 1","date":"{written}","description":"","time":"15:30","urgency":"Medium"}}]"#
        );

        let events = decode(&raw).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, day);
    }

    #[test]
    fn test_decode_malformed_is_deserialization_error() {
        for raw in ["", "{", "{\"id\":1}", "[{\"title\":\"no id\"}]", "42"] {
            let err = decode(raw).unwrap_err();
            assert!(matches!(err, CalGridError::Deserialization(_)), "{raw}: {err:?}");
        }
    }

    #[test]
    fn test_decode_null_and_empty_array() {
        assert!(decode("null").unwrap().is_empty());
        assert!(decode("[]").unwrap().is_empty());
    }
}
