//! Property-based tests for the wire codec and the schedule laws.
//!
//! Uses `proptest` to generate random bit patterns, wire strings, and ranges,
//! and verifies:
//! - `decode(encode(bits)) == bits` for any whole-chunk bit string
//! - `encode(decode(wire)) == wire` for any well-formed wire string
//! - expand/clear idempotence and inverse behavior
//! - extracted ranges are exactly the set bits, maximal and separated

use proptest::prelude::*;

use daygrid::codec::{decode, encode};
use daygrid::ranges::extract;
use daygrid::Schedule;

/// A random bit string whose length is a positive multiple of 32.
fn arb_bits() -> impl Strategy<Value = String> {
    (1usize..=9)
        .prop_flat_map(|chunks| prop::collection::vec(any::<bool>(), chunks * 32))
        .prop_map(|bits| bits.iter().map(|&b| if b { '1' } else { '0' }).collect())
}

/// A random canonical wire string of 1..=9 chunks.
fn arb_wire() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u32>(), 1..=9).prop_map(|words| {
        words
            .iter()
            .map(|w| format!("{w:08x}"))
            .collect::<Vec<_>>()
            .join("-")
    })
}

/// A random 288-bit day pattern.
fn arb_day() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 288)
}

/// A random valid half-open range within a 288-bit day.
fn arb_day_range() -> impl Strategy<Value = std::ops::Range<usize>> {
    (0usize..=288)
        .prop_flat_map(|end| (0usize..=end, Just(end)))
        .prop_map(|(start, end)| start..end)
}

fn schedule_from(day: &[bool]) -> Schedule {
    let mut schedule = Schedule::new(5).unwrap();
    for (bit, &set) in day.iter().enumerate() {
        if set {
            schedule.expand(bit..bit + 1).unwrap();
        }
    }
    schedule
}

proptest! {
    #[test]
    fn bits_roundtrip_through_the_wire(bits in arb_bits()) {
        let wire = encode(&bits).unwrap();
        prop_assert_eq!(decode(&wire).unwrap(), bits);
    }

    #[test]
    fn wire_strings_roundtrip_through_bits(wire in arb_wire()) {
        let bits = decode(&wire).unwrap();
        prop_assert_eq!(encode(&bits).unwrap(), wire);
    }

    #[test]
    fn wire_construction_preserves_the_pattern(day in arb_day()) {
        let schedule = schedule_from(&day);
        let wire = schedule.to_wire().unwrap();
        let restored = Schedule::from_wire(&wire, 5).unwrap();
        prop_assert_eq!(restored, schedule);
    }

    #[test]
    fn expand_is_idempotent(day in arb_day(), range in arb_day_range()) {
        let mut once = schedule_from(&day);
        once.expand(range.clone()).unwrap();

        let mut twice = once.clone();
        twice.expand(range).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn clear_undoes_expand_on_an_empty_schedule(range in arb_day_range()) {
        let mut schedule = Schedule::new(5).unwrap();
        schedule.expand(range.clone()).unwrap();
        schedule.clear(range).unwrap();
        prop_assert!(schedule.ranges().is_empty());
    }

    #[test]
    fn expanded_range_reads_back_active(day in arb_day(), range in arb_day_range()) {
        let mut schedule = schedule_from(&day);
        schedule.expand(range.clone()).unwrap();
        for bit in range {
            prop_assert!(schedule.is_active_bit(bit).unwrap());
        }
    }

    #[test]
    fn extracted_ranges_cover_exactly_the_set_bits(day in arb_day()) {
        let schedule = schedule_from(&day);
        let runs = schedule.ranges();

        let mut from_runs = vec![false; 288];
        for run in &runs {
            prop_assert!(run.start < run.end, "no empty ranges");
            for bit in run.clone() {
                from_runs[bit] = true;
            }
        }
        prop_assert_eq!(from_runs, day);

        // Maximal and separated: a zero bit on each side of every run.
        for pair in runs.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn hours_mirror_ranges(day in arb_day()) {
        let schedule = schedule_from(&day);
        let runs = schedule.ranges();
        let hours = schedule.hours();

        prop_assert_eq!(runs.len(), hours.len());
        for (run, hour) in runs.iter().zip(&hours) {
            let start = run.start * 5;
            let end = run.end * 5;
            prop_assert_eq!(&hour.start, &format!("{:02}:{:02}", start / 60, start % 60));
            prop_assert_eq!(&hour.end, &format!("{:02}:{:02}", end / 60, end % 60));
        }
    }

    #[test]
    fn extract_agrees_with_a_naive_rescan(day in arb_day()) {
        let bits: String = day.iter().map(|&b| if b { '1' } else { '0' }).collect();
        let runs = extract(&bits);

        // Every reported index is set, every boundary bit is clear.
        for run in &runs {
            prop_assert!(bits[run.clone()].bytes().all(|b| b == b'1'));
            if run.start > 0 {
                prop_assert_eq!(bits.as_bytes()[run.start - 1], b'0');
            }
            if run.end < bits.len() {
                prop_assert_eq!(bits.as_bytes()[run.end], b'0');
            }
        }
    }
}
