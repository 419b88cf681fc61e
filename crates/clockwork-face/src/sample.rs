use std::fmt;
use std::str::FromStr;

use chrono::Timelike;

/// Wall-clock reading the face is drawn from.
///
/// Components are not range-checked: out-of-range values draw wrapped hands
/// rather than failing. Use [`TimeSample::checked`] when validation is wanted.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TimeSample {
    /// 0–23
    pub hour: u8,
    /// 0–59
    pub minute: u8,
    /// 0–59
    pub second: u8,
}

impl TimeSample {
    /// 10:43:23, the time shown when previewing the face without a live clock.
    pub const PREVIEW: TimeSample = TimeSample::new(10, 43, 23);

    #[inline]
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self { hour, minute, second }
    }

    /// Like [`new`](Self::new) but rejects components outside 0–23 / 0–59 / 0–59.
    pub const fn checked(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self::new(hour, minute, second))
        } else {
            None
        }
    }

    /// Reads hour/minute/second from any chrono time value.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        // chrono keeps leap seconds in the nanosecond field, so second() < 60.
        Self::new(t.hour() as u8, t.minute() as u8, t.second() as u8)
    }
}

impl fmt::Display for TimeSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Error from parsing a `HH:MM:SS` string into a [`TimeSample`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParseTimeError(pub String);

impl ParseTimeError {
    fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time: {}", self.0)
    }
}

impl std::error::Error for ParseTimeError {}

impl FromStr for TimeSample {
    type Err = ParseTimeError;

    /// Parses `HH:MM` or `HH:MM:SS` (24-hour).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(':');
        let mut next = |name: &str, required: bool| -> Result<u8, ParseTimeError> {
            match parts.next() {
                // `u8::from_str` also takes a leading `+`.
                Some(p) if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) => {
                    Err(ParseTimeError::new(format!("{name} `{p}` is not a number")))
                }
                Some(p) => p
                    .parse::<u8>()
                    .map_err(|_| ParseTimeError::new(format!("{name} `{p}` is out of range"))),
                None if required => Err(ParseTimeError::new(format!("missing {name} in `{s}`"))),
                None => Ok(0),
            }
        };

        let hour = next("hour", true)?;
        let minute = next("minute", true)?;
        let second = next("second", false)?;

        if parts.next().is_some() {
            return Err(ParseTimeError::new(format!("too many components in `{s}`")));
        }

        TimeSample::checked(hour, minute, second)
            .ok_or_else(|| ParseTimeError::new(format!("`{s}` is out of range")))
    }
}

// ── sources ───────────────────────────────────────────────────────────────

/// Where time samples come from.
///
/// Reading the clock never fails; a host without a clock is a platform fault.
pub trait TimeSource {
    fn now(&self) -> TimeSample;
}

/// The host's local wall clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalTimeSource;

impl TimeSource for LocalTimeSource {
    fn now(&self) -> TimeSample {
        TimeSample::from_timelike(&chrono::Local::now())
    }
}

/// Always reports the same time. Used for previews and tests.
#[derive(Debug, Copy, Clone, Default)]
pub struct FixedTimeSource(pub TimeSample);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> TimeSample {
        self.0
    }
}

impl<S: TimeSource + ?Sized> TimeSource for Box<S> {
    fn now(&self) -> TimeSample {
        (**self).now()
    }
}
