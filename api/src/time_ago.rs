//! Relative time phrases ("5 minutes ago") for transactions whose source did
//! not pre-render one.

use chrono::DateTime;
use chrono::Utc;

use crate::prefs::locale::Locale;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimeUnit {
    Seconds,
    Minute,
    Minutes,
    Hour,
    Hours,
    Day,
    Days,
    Month,
    Months,
    Year,
    Years,
}

/// A bucketed distance between two instants.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RelativeTime {
    pub unit: TimeUnit,
    pub count: i64,
    pub future: bool,
}

fn round_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

impl RelativeTime {
    /// Buckets the distance from `now` to `then` using the thresholds common to
    /// "time ago" libraries: under 45s is "a few seconds", under 90s is "a
    /// minute", under 45m counts minutes, and so on up to years.
    pub fn between(then: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let delta = (now - then).num_seconds();
        let future = delta < 0;
        let secs = delta.abs();

        const MINUTE: i64 = 60;
        const HOUR: i64 = 60 * MINUTE;
        const DAY: i64 = 24 * HOUR;

        let (unit, count) = if secs < 45 {
            (TimeUnit::Seconds, secs)
        } else if secs < 90 {
            (TimeUnit::Minute, 1)
        } else if secs < 45 * MINUTE {
            (TimeUnit::Minutes, round_div(secs, MINUTE).max(2))
        } else if secs < 90 * MINUTE {
            (TimeUnit::Hour, 1)
        } else if secs < 22 * HOUR {
            (TimeUnit::Hours, round_div(secs, HOUR).max(2))
        } else if secs < 36 * HOUR {
            (TimeUnit::Day, 1)
        } else if secs < 26 * DAY {
            (TimeUnit::Days, round_div(secs, DAY).max(2))
        } else if secs < 46 * DAY {
            (TimeUnit::Month, 1)
        } else if secs < 320 * DAY {
            (TimeUnit::Months, round_div(secs, 30 * DAY).max(2))
        } else if secs < 548 * DAY {
            (TimeUnit::Year, 1)
        } else {
            (TimeUnit::Years, round_div(secs, 365 * DAY).max(2))
        };

        Self {
            unit,
            count,
            future,
        }
    }

    pub fn format(&self, locale: Locale) -> String {
        let n = self.count;
        let span = match (locale, self.unit) {
            (Locale::En, TimeUnit::Seconds) => "a few seconds".to_string(),
            (Locale::En, TimeUnit::Minute) => "a minute".to_string(),
            (Locale::En, TimeUnit::Minutes) => format!("{n} minutes"),
            (Locale::En, TimeUnit::Hour) => "an hour".to_string(),
            (Locale::En, TimeUnit::Hours) => format!("{n} hours"),
            (Locale::En, TimeUnit::Day) => "a day".to_string(),
            (Locale::En, TimeUnit::Days) => format!("{n} days"),
            (Locale::En, TimeUnit::Month) => "a month".to_string(),
            (Locale::En, TimeUnit::Months) => format!("{n} months"),
            (Locale::En, TimeUnit::Year) => "a year".to_string(),
            (Locale::En, TimeUnit::Years) => format!("{n} years"),
            (Locale::Es, TimeUnit::Seconds) => "unos segundos".to_string(),
            (Locale::Es, TimeUnit::Minute) => "un minuto".to_string(),
            (Locale::Es, TimeUnit::Minutes) => format!("{n} minutos"),
            (Locale::Es, TimeUnit::Hour) => "una hora".to_string(),
            (Locale::Es, TimeUnit::Hours) => format!("{n} horas"),
            (Locale::Es, TimeUnit::Day) => "un día".to_string(),
            (Locale::Es, TimeUnit::Days) => format!("{n} días"),
            (Locale::Es, TimeUnit::Month) => "un mes".to_string(),
            (Locale::Es, TimeUnit::Months) => format!("{n} meses"),
            (Locale::Es, TimeUnit::Year) => "un año".to_string(),
            (Locale::Es, TimeUnit::Years) => format!("{n} años"),
        };

        match (locale, self.future) {
            (Locale::En, false) => format!("{span} ago"),
            (Locale::En, true) => format!("in {span}"),
            (Locale::Es, false) => format!("hace {span}"),
            (Locale::Es, true) => format!("en {span}"),
        }
    }
}

/// Renders the phrase for a unix-millisecond timestamp, or `None` when the
/// timestamp is out of chrono's range.
pub fn time_ago(timestamp_ms: i64, now: DateTime<Utc>, locale: Locale) -> Option<String> {
    let then = DateTime::from_timestamp_millis(timestamp_ms)?;
    Some(RelativeTime::between(then, now).format(locale))
}
