use chrono::NaiveDate;
use crate::core::library::{CirculationError, CirculationResult};

// calendar dates on the wire, ISO and lexicographically sortable
pub const DATE_FMT: &str = "%Y-%m-%d";
// event timestamps
pub const DATETIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn parse_date(value: &str) -> CirculationResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FMT).map_err(|err| {
        CirculationError::validation(
            format!("invalid date {} {:?}", value, err).as_str(), None)
    })
}

pub mod serializer {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATETIME_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATETIME_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }

    fn time_to_json(t: NaiveDateTime) -> String {
        DateTime::<Utc>::from_naive_utc_and_offset(t, Utc).to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::date::parse_date;

    #[tokio::test]
    async fn test_should_parse_iso_date() {
        let date = parse_date("2024-01-08").expect("should parse");
        assert_eq!("2024-01-08", date.to_string());
    }

    #[tokio::test]
    async fn test_should_reject_bad_date() {
        assert!(parse_date("08/01/2024").is_err());
        assert!(parse_date("").is_err());
    }
}
