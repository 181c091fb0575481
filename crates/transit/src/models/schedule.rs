//! Departure schedules with separate weekday and weekend timetables.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::models::types::{Result, TrackerError};

/// Planned departure times for a route.
///
/// Saturday and Sunday use the weekend list, every other day the weekday
/// list. Either list may be empty (no service that day).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    weekday: Vec<NaiveTime>,
    weekend: Vec<NaiveTime>,
}

impl Schedule {
    pub fn new(mut weekday: Vec<NaiveTime>, mut weekend: Vec<NaiveTime>) -> Self {
        weekday.sort();
        weekend.sort();
        Self { weekday, weekend }
    }

    /// Parse `"HH:MM"` departure strings, the format used by timetable feeds.
    pub fn parse(weekday: &[&str], weekend: &[&str]) -> Result<Self> {
        let parse_all = |entries: &[&str]| -> Result<Vec<NaiveTime>> {
            entries
                .iter()
                .map(|s| {
                    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| {
                        TrackerError::InvalidData(format!("bad departure time {s:?}: {e}"))
                    })
                })
                .collect()
        };
        Ok(Self::new(parse_all(weekday)?, parse_all(weekend)?))
    }

    /// Departure times applying on the given date, ascending.
    pub fn departures_on(&self, date: NaiveDate) -> &[NaiveTime] {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            &self.weekend
        } else {
            &self.weekday
        }
    }

    /// First departure strictly after the given instant, scanning at most
    /// a week ahead. `None` when both timetables are empty.
    pub fn next_departure(&self, after: NaiveDateTime) -> Option<NaiveDateTime> {
        for offset in 0..=7 {
            let date = after.date() + Duration::days(offset);
            for &time in self.departures_on(date) {
                let departure = date.and_time(time);
                if departure > after {
                    return Some(departure);
                }
            }
        }
        None
    }
}
