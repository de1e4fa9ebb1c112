//! # Daily Temperature Logger
//!
//! Temperature samples taken over a single day, each a Fahrenheit reading
//! at a 24-hour clock time, plus the day's aggregates:
//!
//! - average reading (0 when there are no samples)
//! - coldest reading (0 when there are no samples)
//! - time of the last sample, chosen by a [`LatestRule`]
//!
//! ## The "last sample" rule
//!
//! [`LatestRule::Literal`] is the historical rule: starting from 00:00, a
//! sample replaces the current latest time only when its hour is `>=` the
//! current hour AND its minute is strictly `>` the current minute. It misses
//! hour changes where the minute does not grow (09:10 then 10:05 keeps
//! 09:10) and never selects a sample taken on the hour. Log files produced
//! by earlier versions use it, so it stays the default.
//!
//! [`LatestRule::Chronological`] compares full `HH:MM` values.
//!
//! ## Example
//!
//! ```rust
//! use primer_core::programs::temperature::{Clock, DailyLog, LatestRule, TemperatureSample};
//!
//! let mut log = DailyLog::default();
//! log.push(TemperatureSample::new(70.0, Clock::new(8, 0)));
//! log.push(TemperatureSample::new(60.0, Clock::new(9, 0)));
//! log.push(TemperatureSample::new(80.0, Clock::new(10, 30)));
//!
//! let summary = log.summary(LatestRule::Literal);
//! assert_eq!(summary.average.0, 70.0);
//! assert_eq!(summary.coldest.0, 60.0);
//! assert_eq!(summary.last_time, Clock::new(10, 30));
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{PrimerError, PrimerResult};
use crate::format;
use crate::units::{Celsius, Fahrenheit};

/// Delimiter line written around the sample list
pub const DELIMITER: &str =
    "-------------------------------------------------------------------------------------------------";

/// A 24-hour clock time.
///
/// Fields are not range-checked on construction; see [`Clock::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Clock {
    hour: i32,
    minute: i32,
}

impl Clock {
    pub fn new(hour: i32, minute: i32) -> Self {
        Clock { hour, minute }
    }

    pub fn hour(&self) -> i32 {
        self.hour
    }

    pub fn minute(&self) -> i32 {
        self.minute
    }

    pub fn set_hour(&mut self, hour: i32) {
        self.hour = hour;
    }

    pub fn set_minute(&mut self, minute: i32) {
        self.minute = minute;
    }

    /// The same time as a `chrono` value, or `None` when out of range.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let hour = u32::try_from(self.hour).ok()?;
        let minute = u32::try_from(self.minute).ok()?;
        NaiveTime::from_hms_opt(hour, minute, 0)
    }

    /// Check hour is 0-23 and minute is 0-59.
    pub fn validate(&self) -> PrimerResult<()> {
        if !(0..24).contains(&self.hour) {
            return Err(PrimerError::invalid_input("hour", self.hour.to_string(), "Hour must be between 0 and 23"));
        }
        if self.to_naive_time().is_none() {
            return Err(PrimerError::invalid_input(
                "minute",
                self.minute.to_string(),
                "Minute must be between 0 and 59",
            ));
        }
        Ok(())
    }
}

impl From<NaiveTime> for Clock {
    fn from(time: NaiveTime) -> Self {
        Clock::new(time.hour() as i32, time.minute() as i32)
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::clock(self.hour, self.minute))
    }
}

/// One reading: degrees Fahrenheit at a clock time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TemperatureSample {
    pub degrees: Fahrenheit,
    pub time: Clock,
}

impl TemperatureSample {
    pub fn new(degrees: f64, time: Clock) -> Self {
        TemperatureSample {
            degrees: Fahrenheit(degrees),
            time,
        }
    }

    /// The reading converted to Celsius: `(F - 32) / 1.8`
    pub fn celsius(&self) -> Celsius {
        self.degrees.into()
    }
}

/// How the time of the last sample is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatestRule {
    /// `hour >= current.hour && minute > current.minute`
    #[default]
    Literal,
    /// Strictly later `HH:MM`
    Chronological,
}

impl LatestRule {
    pub const ALL: [LatestRule; 2] = [LatestRule::Literal, LatestRule::Chronological];

    pub fn name(&self) -> &'static str {
        match self {
            LatestRule::Literal => "literal",
            LatestRule::Chronological => "chronological",
        }
    }

    /// Whether `candidate` replaces `current` as the latest time.
    pub fn is_later(&self, candidate: Clock, current: Clock) -> bool {
        match self {
            LatestRule::Literal => candidate.hour >= current.hour && candidate.minute > current.minute,
            LatestRule::Chronological => candidate > current,
        }
    }
}

impl fmt::Display for LatestRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LatestRule {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LatestRule::ALL
            .into_iter()
            .find(|rule| rule.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PrimerError::invalid_input("latest_rule", s, "Expected 'literal' or 'chronological'"))
    }
}

/// Arithmetic mean of all readings, or 0 when there are none.
pub fn average_temp(samples: &[TemperatureSample]) -> Fahrenheit {
    if samples.is_empty() {
        return Fahrenheit::default();
    }
    let sum = samples.iter().fold(Fahrenheit::default(), |acc, s| acc + s.degrees);
    sum / samples.len() as f64
}

/// Lowest reading, or 0 when there are none.
///
/// The 0 is a placeholder, not a real reading; callers that care should
/// check for an empty slice first.
pub fn coldest_temp(samples: &[TemperatureSample]) -> Fahrenheit {
    let mut iter = samples.iter();
    let Some(first) = iter.next() else {
        return Fahrenheit::default();
    };
    iter.fold(first.degrees, |min, s| if s.degrees < min { s.degrees } else { min })
}

/// Time of the last sample under `rule`, starting from 00:00.
pub fn last_sample(samples: &[TemperatureSample], rule: LatestRule) -> Clock {
    samples.iter().fold(Clock::default(), |latest, s| {
        if rule.is_later(s.time, latest) {
            s.time
        } else {
            latest
        }
    })
}

/// The three aggregates written after the sample list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub sample_count: usize,
    pub average: Fahrenheit,
    pub coldest: Fahrenheit,
    pub last_time: Clock,
    pub rule: LatestRule,
}

/// Samples for one day, in the order they were entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    samples: Vec<TemperatureSample>,
}

impl DailyLog {
    pub fn new(samples: Vec<TemperatureSample>) -> Self {
        DailyLog { samples }
    }

    pub fn push(&mut self, sample: TemperatureSample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[TemperatureSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Check every sample's clock (strict mode only).
    pub fn validate(&self) -> PrimerResult<()> {
        self.samples.iter().try_for_each(|s| s.time.validate())
    }

    pub fn summary(&self, rule: LatestRule) -> DailySummary {
        calculate(self, rule)
    }
}

/// Compute the day's aggregates.
pub fn calculate(log: &DailyLog, rule: LatestRule) -> DailySummary {
    if log.is_empty() {
        tracing::warn!("no temperature samples; average and coldest default to 0");
    }
    let summary = DailySummary {
        sample_count: log.len(),
        average: average_temp(log.samples()),
        coldest: coldest_temp(log.samples()),
        last_time: last_sample(log.samples(), rule),
        rule,
    };
    tracing::debug!(
        samples = summary.sample_count,
        average = summary.average.value(),
        coldest = summary.coldest.value(),
        last = %summary.last_time,
        rule = %rule,
        "summarized temperature log"
    );
    summary
}

/// Render one sample line (without the `Sample #k: ` prefix).
pub fn render_sample(sample: &TemperatureSample) -> String {
    format!(
        "{:.2} degrees F (or {:.2} degrees C) at {}",
        sample.degrees.value(),
        sample.celsius().value(),
        sample.time
    )
}

/// Render the complete log file contents.
pub fn render_log(log: &DailyLog, summary: &DailySummary) -> String {
    let mut out = String::new();
    out.push_str(DELIMITER);
    out.push('\n');
    for (i, sample) in log.samples().iter().enumerate() {
        out.push_str(&format!("Sample #{}: {}\n", i + 1, render_sample(sample)));
    }
    out.push_str(DELIMITER);
    out.push('\n');
    out.push_str(&format!("The average temp is {:.2} degrees F\n", summary.average.value()));
    out.push_str(&format!("The coldest temp is {:.2} degrees F\n", summary.coldest.value()));
    out.push_str(&format!("The last sample was taken at time {}\n", summary.last_time));
    out
}
