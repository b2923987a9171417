//! The daily schedule — a bit grid over one repeating 24-hour cycle.
//!
//! A [`Schedule`] owns a [`BitArray`] with one bit per time slice of
//! `resolution` minutes (288 bits at the default resolution of 5). Ranges of
//! slices are marked active with [`Schedule::expand`], unmarked with
//! [`Schedule::clear`], and queried by bit index, `HH:MM` hour string, or the
//! current wall-clock time in the schedule's timezone.

use std::ops::Range;

use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::bitarray::BitArray;
use crate::clock::Clock;
use crate::codec;
use crate::error::{DaygridError, Result};
use crate::ranges;

/// Minutes in one daily cycle.
pub const MINUTES_PER_DAY: u32 = 1440;

/// The default slice width, in minutes per bit.
pub const DEFAULT_RESOLUTION: u32 = 5;

/// A contiguous active period projected to `HH:MM` hour strings.
///
/// `end` is exclusive — the minute after the last active slice — so a range
/// reaching the end of the day projects to `"24:00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSpan {
    pub start: String,
    pub end: String,
}

/// A range argument for [`Schedule::expand`] and [`Schedule::clear`].
///
/// The three accepted shapes are distinct variants, so mixing kinds (a bit
/// index paired with an hour string) is unrepresentable. Every variant is
/// validated and normalized to a half-open bit range before any bit changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeArg {
    /// An explicit half-open range of bit indices.
    Bits(Range<usize>),
    /// A `(start, end)` pair of bit indices, end exclusive.
    Pair(usize, usize),
    /// A `(start, end)` pair of `H:MM`/`HH:MM` hour strings, end exclusive.
    Hours(String, String),
}

impl From<Range<usize>> for RangeArg {
    fn from(range: Range<usize>) -> Self {
        Self::Bits(range)
    }
}

impl From<(usize, usize)> for RangeArg {
    fn from((start, end): (usize, usize)) -> Self {
        Self::Pair(start, end)
    }
}

impl From<[usize; 2]> for RangeArg {
    fn from([start, end]: [usize; 2]) -> Self {
        Self::Pair(start, end)
    }
}

impl From<(&str, &str)> for RangeArg {
    fn from((start, end): (&str, &str)) -> Self {
        Self::Hours(start.to_string(), end.to_string())
    }
}

impl RangeArg {
    /// Validate and normalize to a half-open bit range against a schedule of
    /// `size` bits at `resolution` minutes per bit.
    fn normalize(&self, size: usize, resolution: u32) -> Result<Range<usize>> {
        let range = match self {
            Self::Bits(range) => range.clone(),
            Self::Pair(start, end) => *start..*end,
            Self::Hours(start, end) => {
                let start_bit = parse_hour(start)? / resolution;
                let end_bit = parse_hour(end)? / resolution;
                start_bit as usize..end_bit as usize
            }
        };

        if range.start > range.end {
            return Err(DaygridError::InvalidRange(format!(
                "range start {} is after end {}",
                range.start, range.end
            )));
        }
        if range.end > size {
            return Err(DaygridError::InvalidRange(format!(
                "range end {} exceeds schedule size {size}",
                range.end
            )));
        }

        Ok(range)
    }
}

/// A recurring daily availability schedule.
///
/// The schedule is a plain value object: single-threaded, no interior
/// mutability, no cached time. Callers needing concurrent access clone it or
/// wrap it in their own lock.
///
/// # Example
/// ```
/// use daygrid::Schedule;
///
/// let mut schedule = Schedule::new(5).unwrap();
/// schedule.expand(("09:00", "17:00")).unwrap();
/// assert!(schedule.is_active_at("12:30").unwrap());
/// assert!(!schedule.is_active_at("17:00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    bits: BitArray,
    timezone: Option<Tz>,
}

impl Schedule {
    /// Create an all-zero schedule with one bit per `resolution` minutes.
    ///
    /// # Errors
    /// Returns `DaygridError::InvalidResolution` unless `resolution` evenly
    /// divides 1440, so the derived resolution always equals the requested
    /// one.
    pub fn new(resolution: u32) -> Result<Self> {
        let size = size_for(resolution)?;
        Ok(Self {
            bits: BitArray::new(size),
            timezone: None,
        })
    }

    /// Create a schedule from a wire-format string (see [`crate::codec`]).
    ///
    /// An empty `encoded` string behaves like [`Schedule::new`].
    ///
    /// # Errors
    /// Returns `DaygridError::ResolutionMismatch` if the decoded bit count
    /// differs from the size implied by `resolution` — the wire string is
    /// never truncated or padded to fit.
    pub fn from_wire(encoded: &str, resolution: u32) -> Result<Self> {
        if encoded.is_empty() {
            return Self::new(resolution);
        }

        let size = size_for(resolution)?;
        let bits = codec::decode(encoded)?;
        if bits.len() != size {
            return Err(DaygridError::ResolutionMismatch {
                expected: size,
                decoded: bits.len(),
            });
        }

        Ok(Self {
            bits: BitArray::from_bit_string(&bits)?,
            timezone: None,
        })
    }

    /// Builder-style timezone selection.
    #[must_use]
    pub fn with_timezone(mut self, tz: Tz) -> Self {
        self.timezone = Some(tz);
        self
    }

    /// Set or unset the timezone. `None` means the ambient default (UTC as
    /// reported by the injected clock).
    pub fn set_timezone(&mut self, tz: Option<Tz>) {
        self.timezone = tz;
    }

    /// Set the timezone from an IANA name such as `"America/New_York"`.
    ///
    /// # Errors
    /// Returns `DaygridError::InvalidTimezone` if the name is unknown.
    pub fn set_timezone_name(&mut self, name: &str) -> Result<()> {
        let tz: Tz = name
            .parse()
            .map_err(|_| DaygridError::InvalidTimezone(name.to_string()))?;
        self.timezone = Some(tz);
        Ok(())
    }

    /// The selected timezone, if any.
    #[must_use]
    pub fn timezone(&self) -> Option<Tz> {
        self.timezone
    }

    /// Number of bits in the daily cycle.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bits.len()
    }

    /// Minutes per bit, derived from the size rather than stored.
    #[must_use]
    pub fn resolution(&self) -> u32 {
        MINUTES_PER_DAY / self.size() as u32
    }

    /// Mark every slice in the range active.
    ///
    /// Accepts a bit-index range (`140..148`), a bit-index pair (`(140, 148)`
    /// or `[140, 148]`), or an hour-string pair (`("11:40", "12:20")`). The
    /// whole argument is validated before any bit changes.
    ///
    /// # Errors
    /// Returns `DaygridError::InvalidRange` for malformed hour strings,
    /// inverted ranges, or ends beyond the schedule size.
    pub fn expand(&mut self, arg: impl Into<RangeArg>) -> Result<()> {
        self.write_range(&arg.into(), true)
    }

    /// Mark every slice in the range inactive. Accepts the same argument
    /// shapes as [`Schedule::expand`]; clearing already-clear slices is a
    /// no-op.
    ///
    /// # Errors
    /// Same validation as [`Schedule::expand`].
    pub fn clear(&mut self, arg: impl Into<RangeArg>) -> Result<()> {
        self.write_range(&arg.into(), false)
    }

    fn write_range(&mut self, arg: &RangeArg, value: bool) -> Result<()> {
        let range = arg.normalize(self.size(), self.resolution())?;
        for bit in range {
            self.bits.set(bit, value);
        }
        Ok(())
    }

    /// Whether the slice at `bit` is active.
    ///
    /// # Errors
    /// Returns `DaygridError::InvalidRange` if `bit` is outside the schedule.
    pub fn is_active_bit(&self, bit: usize) -> Result<bool> {
        if bit >= self.size() {
            return Err(DaygridError::InvalidRange(format!(
                "bit {bit} exceeds schedule size {}",
                self.size()
            )));
        }
        Ok(self.bits.get(bit))
    }

    /// Whether the slice containing the `H:MM`/`HH:MM` hour is active.
    ///
    /// # Errors
    /// Returns `DaygridError::InvalidRange` for malformed hour strings or
    /// `"24:00"`, which names no slice.
    pub fn is_active_at(&self, hour: &str) -> Result<bool> {
        let bit = parse_hour(hour)? / self.resolution();
        self.is_active_bit(bit as usize)
    }

    /// Whether the slice containing the current wall-clock time is active.
    #[must_use]
    pub fn is_active_now(&self, clock: &dyn Clock) -> bool {
        self.bits.get(self.current_bit(clock))
    }

    /// Bit index of "now" in the schedule's timezone.
    #[must_use]
    pub fn current_bit(&self, clock: &dyn Clock) -> usize {
        let minutes = self.current_minutes(clock);
        (minutes / self.resolution()) as usize
    }

    /// `HH:MM` start of the slice containing "now".
    #[must_use]
    pub fn current_hour(&self, clock: &dyn Clock) -> String {
        format_hour(self.current_bit(clock) as u32 * self.resolution())
    }

    /// Project a bit index onto today's calendar: the UTC instant at which
    /// slice `bit` begins in the schedule's timezone. `bit` may equal
    /// `size()`, naming the exclusive end of the day.
    ///
    /// # Errors
    /// Returns `DaygridError::InvalidRange` if `bit > size()`, and
    /// `DaygridError::InvalidTimezone` if the timezone has no local midnight
    /// today (a DST transition spanning 00:00).
    pub fn instant_at(&self, bit: usize, clock: &dyn Clock) -> Result<DateTime<Utc>> {
        if bit > self.size() {
            return Err(DaygridError::InvalidRange(format!(
                "bit {bit} exceeds schedule size {}",
                self.size()
            )));
        }

        let offset = Duration::minutes(i64::from(bit as u32 * self.resolution()));
        let now = clock.now_utc();

        match self.timezone {
            Some(tz) => {
                let midnight = tz
                    .from_local_datetime(&local_midnight(now.with_timezone(&tz).date_naive()))
                    .earliest()
                    .ok_or_else(|| {
                        DaygridError::InvalidTimezone(format!("{tz} has no local midnight today"))
                    })?;
                Ok((midnight + offset).with_timezone(&Utc))
            }
            None => {
                let midnight = Utc.from_utc_datetime(&local_midnight(now.date_naive()));
                Ok(midnight + offset)
            }
        }
    }

    /// The maximal active runs as half-open bit-index ranges, ascending.
    #[must_use]
    pub fn ranges(&self) -> Vec<Range<usize>> {
        ranges::extract(&self.bits.to_bit_string())
    }

    /// The maximal active runs projected to `HH:MM` hour spans.
    #[must_use]
    pub fn hours(&self) -> Vec<HourSpan> {
        let resolution = self.resolution();
        self.ranges()
            .into_iter()
            .map(|range| HourSpan {
                start: format_hour(range.start as u32 * resolution),
                end: format_hour(range.end as u32 * resolution),
            })
            .collect()
    }

    /// Serialize to the wire format (see [`crate::codec`]).
    ///
    /// # Errors
    /// Returns `DaygridError::Encode` if the schedule size is not a multiple
    /// of 32 and therefore has no lossless wire representation.
    pub fn to_wire(&self) -> Result<String> {
        codec::encode(&self.bits.to_bit_string())
    }

    /// The raw bit pattern as a string of `'0'`/`'1'`.
    #[must_use]
    pub fn bit_string(&self) -> String {
        self.bits.to_bit_string()
    }

    fn current_minutes(&self, clock: &dyn Clock) -> u32 {
        let time = match self.timezone {
            Some(tz) => clock.now_utc().with_timezone(&tz).time(),
            None => clock.now_utc().time(),
        };
        time.hour() * 60 + time.minute()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            bits: BitArray::new((MINUTES_PER_DAY / DEFAULT_RESOLUTION) as usize),
            timezone: None,
        }
    }
}

fn size_for(resolution: u32) -> Result<usize> {
    if resolution == 0 || MINUTES_PER_DAY % resolution != 0 {
        return Err(DaygridError::InvalidResolution(resolution));
    }
    Ok((MINUTES_PER_DAY / resolution) as usize)
}

fn local_midnight(date: chrono::NaiveDate) -> chrono::NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("00:00:00 is always valid")
}

/// Parse an `H:MM`/`HH:MM` hour string into minutes since midnight.
///
/// The hour part is 1 or 2 digits, the minute part exactly 2 digits in
/// `00..=59`. `"24:00"` is accepted as the exclusive end of the day; anything
/// past it is rejected.
fn parse_hour(hour: &str) -> Result<u32> {
    let invalid = || DaygridError::InvalidRange(format!("hour string {hour:?} is not H:MM/HH:MM"));

    let (h, m) = hour.split_once(':').ok_or_else(invalid)?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return Err(invalid());
    }
    if !h.bytes().all(|b| b.is_ascii_digit()) || !m.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: u32 = h.parse().map_err(|_| invalid())?;
    let minutes: u32 = m.parse().map_err(|_| invalid())?;
    if minutes > 59 {
        return Err(invalid());
    }

    let total = hours * 60 + minutes;
    if total > MINUTES_PER_DAY {
        return Err(invalid());
    }
    Ok(total)
}

/// Format minutes since midnight as zero-padded `HH:MM`. Minute 1440 renders
/// as `"24:00"`, the exclusive end of the day.
fn format_hour(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
