//! Timezone directory: zone names, host guess and UTC offsets.

use std::fmt;

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// Error returned for zone names the directory does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    Unknown(String),
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneError::Unknown(name) => write!(f, "unknown timezone: {name}"),
        }
    }
}

impl std::error::Error for ZoneError {}

/// Timezone data collaborator.
pub trait ZoneDirectory {
    /// Best guess of the host's zone name, if the platform reports one.
    fn guess_local(&self) -> Option<String>;

    /// Every known zone name, in directory order.
    fn zone_names(&self) -> Vec<String>;

    /// Minutes east of UTC for `name` at `at`.
    fn utc_offset_minutes(&self, name: &str, at: DateTime<Utc>) -> Result<i32, ZoneError>;

    /// Offset in (possibly fractional) hours east of UTC.
    fn offset_hours(&self, name: &str, at: DateTime<Utc>) -> Result<f32, ZoneError> {
        Ok(self.utc_offset_minutes(name, at)? as f32 / 60.0)
    }
}

/// One entry of the zone selection list.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneOption {
    pub name: String,
    pub offset_hours: f32,
}

impl ZoneOption {
    pub fn new(name: impl Into<String>, offset_hours: f32) -> Self {
        Self { name: name.into(), offset_hours }
    }

    /// `UTC+05:30` style label.
    pub fn offset_label(&self) -> String {
        offset_label(self.offset_hours)
    }
}

/// Formats an offset in hours as `UTC±HH:MM`.
pub fn offset_label(offset_hours: f32) -> String {
    let total = (offset_hours * 60.0).round() as i32;
    let sign = if total < 0 { '-' } else { '+' };
    let total = total.abs();
    format!("UTC{sign}{:02}:{:02}", total / 60, total % 60)
}

/// Builds the selection list with offsets evaluated once at `at`.
pub fn zone_options<D: ZoneDirectory + ?Sized>(directory: &D, at: DateTime<Utc>) -> Vec<ZoneOption> {
    directory
        .zone_names()
        .into_iter()
        .filter_map(|name| match directory.offset_hours(&name, at) {
            Ok(offset) => Some(ZoneOption { name, offset_hours: offset }),
            Err(e) => {
                log::warn!("skipping zone: {e}");
                None
            }
        })
        .collect()
}

// ── chrono-tz ─────────────────────────────────────────────────────────────

/// IANA database compiled into `chrono-tz`, with the host guess from
/// `iana-time-zone`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzDatabase;

impl TzDatabase {
    pub fn new() -> Self {
        Self
    }

    fn parse(name: &str) -> Result<Tz, ZoneError> {
        name.parse::<Tz>().map_err(|_| ZoneError::Unknown(name.to_string()))
    }
}

impl ZoneDirectory for TzDatabase {
    fn guess_local(&self) -> Option<String> {
        match iana_time_zone::get_timezone() {
            Ok(name) => Some(name),
            Err(e) => {
                log::warn!("could not determine host timezone: {e}");
                None
            }
        }
    }

    fn zone_names(&self) -> Vec<String> {
        chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name().to_string()).collect()
    }

    fn utc_offset_minutes(&self, name: &str, at: DateTime<Utc>) -> Result<i32, ZoneError> {
        let tz = Self::parse(name)?;
        let offset = tz.offset_from_utc_datetime(&at.naive_utc());
        Ok(offset.fix().local_minus_utc() / 60)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// In-memory directory with fixed offsets.
    pub(crate) struct StaticZones {
        pub guess: Option<String>,
        pub zones: Vec<(String, i32)>,
    }

    impl StaticZones {
        pub(crate) fn new(guess: Option<&str>, zones: &[(&str, i32)]) -> Self {
            Self {
                guess: guess.map(str::to_string),
                zones: zones.iter().map(|(n, m)| (n.to_string(), *m)).collect(),
            }
        }
    }

    impl ZoneDirectory for StaticZones {
        fn guess_local(&self) -> Option<String> {
            self.guess.clone()
        }

        fn zone_names(&self) -> Vec<String> {
            self.zones.iter().map(|(n, _)| n.clone()).collect()
        }

        fn utc_offset_minutes(&self, name: &str, _at: DateTime<Utc>) -> Result<i32, ZoneError> {
            self.zones
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, m)| *m)
                .ok_or_else(|| ZoneError::Unknown(name.to_string()))
        }
    }

    fn at(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).single().expect("valid time")
    }

    // ── chrono-tz ─────────────────────────────────────────────────────────

    #[test]
    fn fixed_zones_have_expected_offsets() {
        let db = TzDatabase::new();
        assert_eq!(db.utc_offset_minutes("UTC", at(2024, 1, 1)), Ok(0));
        assert_eq!(db.utc_offset_minutes("Asia/Kolkata", at(2024, 1, 1)), Ok(330));
        assert_eq!(db.offset_hours("Asia/Kolkata", at(2024, 1, 1)), Ok(5.5));
    }

    #[test]
    fn daylight_saving_changes_the_offset() {
        let db = TzDatabase::new();
        assert_eq!(db.utc_offset_minutes("America/New_York", at(2024, 1, 15)), Ok(-300));
        assert_eq!(db.utc_offset_minutes("America/New_York", at(2024, 7, 15)), Ok(-240));
    }

    #[test]
    fn unknown_zone_is_an_error() {
        let db = TzDatabase::new();
        assert_eq!(
            db.utc_offset_minutes("Mars/Olympus_Mons", at(2024, 1, 1)),
            Err(ZoneError::Unknown("Mars/Olympus_Mons".to_string()))
        );
        assert_eq!(
            db.offset_hours("Mars/Olympus_Mons", at(2024, 1, 1)),
            Err(ZoneError::Unknown("Mars/Olympus_Mons".to_string()))
        );
    }

    #[test]
    fn database_lists_many_zones() {
        let names = TzDatabase::new().zone_names();
        assert!(names.len() > 300);
        assert!(names.iter().any(|n| n == "Europe/London"));
    }

    // ── options ───────────────────────────────────────────────────────────

    #[test]
    fn options_keep_directory_order_and_offsets() {
        let dir = StaticZones::new(None, &[("B/Zone", 60), ("A/Zone", -570)]);
        let opts = zone_options(&dir, at(2024, 1, 1));
        assert_eq!(opts, vec![ZoneOption::new("B/Zone", 1.0), ZoneOption::new("A/Zone", -9.5)]);
    }

    #[test]
    fn offset_label_formats_sign_and_minutes() {
        assert_eq!(ZoneOption::new("x", 5.5).offset_label(), "UTC+05:30");
        assert_eq!(ZoneOption::new("x", -9.5).offset_label(), "UTC-09:30");
        assert_eq!(ZoneOption::new("x", 0.0).offset_label(), "UTC+00:00");
    }
}
