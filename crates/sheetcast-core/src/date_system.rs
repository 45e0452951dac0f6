//! Workbook date systems
//!
//! Spreadsheets store dates as serial day numbers counted from an epoch. Two
//! epochs exist: the default 1900 system and the 1904 system written by older
//! Mac versions of Excel.
//!
//! The 1900 system treats 1900 as a leap year and numbers a non-existent
//! 1900-02-29 as serial 60. Anchoring the epoch at 1899-12-30 instead of
//! 1900-01-01 absorbs both that phantom day and the one-based numbering, so
//! every serial from 61 (1900-03-01) onwards decodes to the real date.

use std::fmt;

use chrono::{Duration, NaiveDate};

use crate::error::{Error, Result};

/// Serial-date epoch of a workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateSystem {
    /// 1900 date system (Windows default)
    #[default]
    Excel1900,
    /// 1904 date system (`workbookPr/@date1904`)
    Excel1904,
}

impl DateSystem {
    /// Calendar date that serial 0 maps to
    pub fn base_date(self) -> NaiveDate {
        match self {
            DateSystem::Excel1900 => NaiveDate::from_ymd_opt(1899, 12, 30).unwrap(),
            DateSystem::Excel1904 => NaiveDate::from_ymd_opt(1904, 1, 1).unwrap(),
        }
    }

    /// Nominal year of the system (1900 or 1904)
    pub fn year(self) -> i32 {
        match self {
            DateSystem::Excel1900 => 1900,
            DateSystem::Excel1904 => 1904,
        }
    }

    /// Add whole days to the base date, rolling over months and years.
    ///
    /// Negative offsets count backwards from the epoch.
    pub fn add_days(self, days: i64) -> Result<NaiveDate> {
        Duration::try_days(days)
            .and_then(|delta| self.base_date().checked_add_signed(delta))
            .ok_or(Error::DateOutOfRange(days))
    }
}

impl fmt::Display for DateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}
