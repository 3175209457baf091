//! Calendar month a payment is attributed to

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A `YYYY-MM` calendar month, independent of the day a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BillingMonth {
    year: i32,
    month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid billing month {0:?}, expected YYYY-MM")]
pub struct ParseBillingMonthError(String);

impl BillingMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        ((1..=12).contains(&month) && (0..=9999).contains(&year)).then_some(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month by the UTC wall clock.
    pub fn current() -> Self {
        Self::of(Utc::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for BillingMonth {
    type Err = ParseBillingMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseBillingMonthError(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(err)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(err());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        Self::new(year, month).ok_or_else(err)
    }
}

impl TryFrom<String> for BillingMonth {
    type Error = ParseBillingMonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BillingMonth> for String {
    fn from(value: BillingMonth) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_year_month() {
        let m: BillingMonth = "2024-03".parse().unwrap();
        assert_eq!((m.year(), m.month()), (2024, 3));
        assert_eq!(m.to_string(), "2024-03");
    }

    #[test]
    fn rejects_malformed_months() {
        for bad in ["2024-3", "2024-13", "2024-00", "24-03", "2024/03", "2024-03-01", "", "abcd-ef"] {
            assert!(bad.parse::<BillingMonth>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn month_of_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(BillingMonth::of(date).to_string(), "2025-12");
    }

    #[test]
    fn serde_uses_plain_string() {
        let m: BillingMonth = serde_json::from_str("\"2026-10\"").unwrap();
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"2026-10\"");
        assert!(serde_json::from_str::<BillingMonth>("\"October\"").is_err());
    }
}
