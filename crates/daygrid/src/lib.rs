//! # daygrid
//!
//! Daily availability schedules as fixed-resolution bit grids.
//!
//! A schedule models one repeating 24-hour cycle as a fixed-length bit
//! array, one bit per time slice of a configurable resolution (default 5
//! minutes, giving 288 bits per day). Ranges of slices are marked active or
//! cleared, queried at a point in time in a given timezone, extracted as
//! contiguous active runs, and serialized to a compact dash-chunked hex wire
//! string.
//!
//! ## Quick start
//!
//! ```rust
//! use daygrid::Schedule;
//!
//! let mut schedule = Schedule::new(5).unwrap();
//! schedule.expand(("09:00", "12:30")).unwrap();
//!
//! assert!(schedule.is_active_at("10:15").unwrap());
//! assert_eq!(schedule.ranges(), vec![108..150]);
//!
//! // Round-trips through the wire format.
//! let wire = schedule.to_wire().unwrap();
//! let restored = Schedule::from_wire(&wire, 5).unwrap();
//! assert_eq!(restored.hours(), schedule.hours());
//! ```
//!
//! ## Modules
//!
//! - [`schedule`] — the [`Schedule`] value object and its range arguments
//! - [`bitarray`] — fixed-length bit storage
//! - [`codec`] — wire format encode/decode
//! - [`ranges`] — contiguous-run extraction
//! - [`clock`] — injectable time source (no ambient global time)
//! - [`error`] — error types

pub mod bitarray;
pub mod clock;
pub mod codec;
pub mod error;
pub mod ranges;
pub mod schedule;

pub use bitarray::BitArray;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DaygridError;
pub use schedule::{HourSpan, RangeArg, Schedule, DEFAULT_RESOLUTION, MINUTES_PER_DAY};
