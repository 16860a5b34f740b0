//! Recurring payment frequency and due-date rollover

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a recurring payment comes due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// All recognized frequencies, in display order
    pub fn all() -> &'static [Self] {
        &[Self::Weekly, Self::Monthly, Self::Yearly]
    }

    /// The canonical stored spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Parse a stored frequency value.
    ///
    /// Unrecognized strings fall back to Monthly, so rows written by
    /// earlier versions of the tracker keep rolling over on the monthly
    /// cadence instead of stalling.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(Self::Monthly)
    }

    /// The due date one period after `from`.
    ///
    /// - Weekly: seven days later.
    /// - Monthly: the next calendar month, day-of-month clamped to 28 so
    ///   the result exists in every month; December wraps into January of
    ///   the following year.
    /// - Yearly: same month and day, one year later. A date anchored on
    ///   Feb 29 has no counterpart in the following year; the month and
    ///   day carry over unchanged, so the result is `None` and the caller
    ///   decides what to surface.
    pub fn next_due_date(&self, from: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Weekly => Some(from + Duration::days(7)),
            Self::Monthly => {
                let year = from.year() + (from.month() / 12) as i32;
                let month = from.month() % 12 + 1;
                let day = from.day().min(28);
                NaiveDate::from_ymd_opt(year, month, day)
            }
            Self::Yearly => NaiveDate::from_ymd_opt(from.year() + 1, from.month(), from.day()),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = FrequencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(FrequencyParseError::Unrecognized(s.to_string())),
        }
    }
}

/// Error type for strict frequency parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyParseError {
    Unrecognized(String),
}

impl fmt::Display for FrequencyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrequencyParseError::Unrecognized(s) => {
                write!(f, "Unrecognized frequency (expected Weekly, Monthly, or Yearly): {}", s)
            }
        }
    }
}

impl std::error::Error for FrequencyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekly_rollover() {
        assert_eq!(
            Frequency::Weekly.next_due_date(date(2024, 1, 1)),
            Some(date(2024, 1, 8))
        );
    }

    #[test]
    fn test_monthly_rollover_clamps_to_28() {
        assert_eq!(
            Frequency::Monthly.next_due_date(date(2024, 1, 31)),
            Some(date(2024, 2, 28))
        );
        assert_eq!(
            Frequency::Monthly.next_due_date(date(2024, 1, 30)),
            Some(date(2024, 2, 28))
        );
    }

    #[test]
    fn test_monthly_rollover_keeps_early_days() {
        assert_eq!(
            Frequency::Monthly.next_due_date(date(2024, 3, 15)),
            Some(date(2024, 4, 15))
        );
    }

    #[test]
    fn test_monthly_rollover_december_wraps_year() {
        assert_eq!(
            Frequency::Monthly.next_due_date(date(2024, 12, 10)),
            Some(date(2025, 1, 10))
        );
    }

    #[test]
    fn test_yearly_rollover() {
        assert_eq!(
            Frequency::Yearly.next_due_date(date(2024, 3, 10)),
            Some(date(2025, 3, 10))
        );
    }

    #[test]
    fn test_yearly_rollover_from_leap_day_has_no_valid_date() {
        // Feb 29, 2025 does not exist; the rule carries month/day over
        // unchanged rather than clamping.
        assert_eq!(Frequency::Yearly.next_due_date(date(2024, 2, 29)), None);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("Weekly".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert_eq!("monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert!("Biweekly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_lenient_parse_defaults_to_monthly() {
        assert_eq!(Frequency::parse_lenient("Yearly"), Frequency::Yearly);
        assert_eq!(Frequency::parse_lenient("Biweekly"), Frequency::Monthly);
        assert_eq!(Frequency::parse_lenient(""), Frequency::Monthly);
    }

    #[test]
    fn test_display_roundtrip() {
        for freq in Frequency::all() {
            assert_eq!(freq.as_str().parse::<Frequency>().unwrap(), *freq);
        }
    }
}
