//! Value helpers for the numeric, date and id-list parameters.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::Error;

/// A brew date in the `mm-yyyy` form the service expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BrewDate {
    year: i32,
    month: u32,
}

impl BrewDate {
    pub fn new(month: u32, year: i32) -> Result<Self, Error> {
        if !(1..=12).contains(&month) || !(0..=9999).contains(&year) {
            return Err(Error::InvalidBrewDate(format!("{}-{}", month, year)));
        }
        Ok(Self { year, month })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for BrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:04}", self.month, self.year)
    }
}

impl FromStr for BrewDate {
    type Err = Error;

    /// Accepts `mm-yyyy` and `m-yyyy`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidBrewDate(s.to_string());
        let (month, year) = s.trim().split_once('-').ok_or_else(invalid)?;
        if month.is_empty()
            || month.len() > 2
            || year.len() != 4
            || !month.bytes().all(|b| b.is_ascii_digit())
            || !year.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        BrewDate::new(month, year).map_err(|_| invalid())
    }
}

impl From<NaiveDate> for BrewDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

/// A number for the ABV, IBU and EBC filters, rendered as the caller wrote it.
///
/// `f32` values are formatted with their own precision rather than widened to
/// `f64`, so `0.1f32` is sent as `0.1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Metric(String);

impl Metric {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! metric_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Metric {
                fn from(value: $t) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

metric_from!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Beer ids for the `ids` parameter, joined with `|`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdList(String);

impl IdList {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<T: ToString> FromIterator<T> for IdList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join("|"),
        )
    }
}

impl<T: ToString> From<Vec<T>> for IdList {
    fn from(ids: Vec<T>) -> Self {
        ids.into_iter().collect()
    }
}

impl<T: ToString> From<&[T]> for IdList {
    fn from(ids: &[T]) -> Self {
        ids.iter().map(ToString::to_string).collect()
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for IdList {
    fn from(ids: [T; N]) -> Self {
        ids.into_iter().collect()
    }
}

/// An already pipe-joined list, kept as given.
impl From<&str> for IdList {
    fn from(ids: &str) -> Self {
        Self(ids.to_string())
    }
}

impl From<String> for IdList {
    fn from(ids: String) -> Self {
        Self(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brew_date_display_is_zero_padded() {
        assert_eq!(BrewDate::new(3, 2011).unwrap().to_string(), "03-2011");
        assert_eq!(BrewDate::new(10, 2011).unwrap().to_string(), "10-2011");
    }

    #[test]
    fn brew_date_parses_short_and_long_months() {
        assert_eq!("10-2011".parse::<BrewDate>().unwrap(), BrewDate::new(10, 2011).unwrap());
        assert_eq!("4-2008".parse::<BrewDate>().unwrap().to_string(), "04-2008");
    }

    #[test]
    fn brew_date_rejects_malformed_input() {
        for bad in ["2011", "13-2011", "0-2011", "10-11", "10/2011", "aa-2011", "-2011", "10-2011-1"] {
            assert!(bad.parse::<BrewDate>().is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn brew_date_from_naive_date() {
        let date = NaiveDate::from_ymd_opt(2007, 6, 15).unwrap();
        assert_eq!(BrewDate::from(date).to_string(), "06-2007");
    }

    #[test]
    fn metric_keeps_the_callers_precision() {
        assert_eq!(Metric::from(0.1f32).as_str(), "0.1");
        assert_eq!(Metric::from(4.5f64).as_str(), "4.5");
        assert_eq!(Metric::from(10.0f64).as_str(), "10");
        assert_eq!(Metric::from(-3).as_str(), "-3");
    }

    #[test]
    fn id_list_from_sequence_and_string_agree() {
        assert_eq!(IdList::from(vec![192, 224]), IdList::from("192|224"));
        assert_eq!(IdList::from([1u64, 2, 3]).as_str(), "1|2|3");
        assert_eq!(IdList::from(&[7u32][..]).as_str(), "7");
    }

    #[test]
    fn empty_sequence_gives_empty_list() {
        assert_eq!(IdList::from(Vec::<u32>::new()).as_str(), "");
    }
}
