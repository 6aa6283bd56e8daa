//! Patterns matching the decimal form of integers in a range.
//!
//! A range is split by sign into ranges of magnitudes, each magnitude range
//! into sub-ranges whose bounds share a digit count and a shape, and each
//! sub-range into one fragment per digit position:
//!
//! ```text
//!   0..=255  ->  [0-9] | [1-9][0-9] | 1[0-9][0-9] | 2[0-4][0-9] | 25[0-5]
//! ```
//!
//! The result matches no leading zeros and is not anchored.

use itertools::Itertools;
use tracing::debug;

use crate::dialect::{chars, common, group};
use crate::pattern::Token;

#[cfg(test)]
mod tests;

/// An inclusive range of magnitudes whose bounds have the same digit count,
/// agree on a prefix, differ in one digit, and are followed by zeros in `lo`
/// and nines in `hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub lo: u64,
    pub hi: u64,
}

impl Segment {
    pub fn new(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }
}

/// Builds number range patterns, keeping its buffers between calls.
///
/// ```
/// use rex::helper::RangeSynthesizer;
///
/// let mut synth = RangeSynthesizer::new();
/// assert_eq!(synth.synthesize(250, 255).to_string(), "(?:25[0-5])");
/// assert_eq!(synth.synthesize(7, 7).to_string(), "7");
/// ```
#[derive(Debug, Default)]
pub struct RangeSynthesizer {
    stops: Vec<u64>,
    segments: Vec<Segment>,
}

impl RangeSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pattern matching every integer between `from` and `to`, inclusive.
    /// The bounds may come in either order.
    pub fn synthesize(&mut self, from: i64, to: i64) -> Token {
        let (from, to) = if from > to { (to, from) } else { (from, to) };

        if to < 0 {
            negative(self.nonnegative(to.unsigned_abs(), from.unsigned_abs()))
        } else if from < 0 {
            // `-0` is not a decimal form of zero.
            let below = negative(self.nonnegative(1, from.unsigned_abs()));
            let above = self.nonnegative(0, to.unsigned_abs());
            group::composite([below, above]).into()
        } else {
            self.nonnegative(from.unsigned_abs(), to.unsigned_abs())
        }
    }

    fn nonnegative(&mut self, from: u64, to: u64) -> Token {
        if from == to {
            return common::text(&from.to_string());
        }
        split(from, to, &mut self.stops, &mut self.segments);
        debug!(from, to, segments = self.segments.len(), "split number range");
        compose(&self.segments)
    }
}

/// A pattern matching every integer between `from` and `to`, inclusive.
///
/// The bounds may come in either order. Negative numbers are written with a
/// leading `-`; `-0` and leading zeros never match. Anchor the result to stop
/// it from matching inside longer numbers.
///
/// ```
/// use rex::{Rex, chars, helper, tokens};
///
/// let re = Rex::new(tokens![chars::begin(), helper::number_range(-5, 250), chars::end()])
///     .compile()
///     .unwrap();
/// assert!(re.is_match("-5"));
/// assert!(re.is_match("199"));
/// assert!(!re.is_match("251"));
/// assert!(!re.is_match("007"));
/// ```
pub fn number_range(from: i64, to: i64) -> Token {
    RangeSynthesizer::default().synthesize(from, to)
}

/// Splits `from..=to` into uniform segments, lowest first. Empty when
/// `from > to`.
pub fn steps(from: u64, to: u64) -> Vec<Segment> {
    let mut stops = Vec::new();
    let mut segments = Vec::new();
    split(from, to, &mut stops, &mut segments);
    segments
}

fn split(from: u64, to: u64, stops: &mut Vec<u64>, segments: &mut Vec<Segment>) {
    stops.clear();
    segments.clear();
    if from > to {
        return;
    }

    // Upward: the last k digits of `from` replaced by nines.
    for k in 1.. {
        let Some(p) = 10u64.checked_pow(k) else { break };
        match (from - from % p).checked_add(p - 1) {
            Some(stop) if stop <= to => stops.push(stop),
            _ => break,
        }
    }

    // Downward: the last k digits of `to + 1` cleared, minus one.
    for k in 1.. {
        let Some(p) = 10u64.checked_pow(k) else { break };
        let rem = to % p;
        let stop = if rem == p - 1 {
            Some(to)
        } else {
            (to - rem).checked_sub(1)
        };
        match stop {
            Some(stop) if stop > from => stops.push(stop),
            _ => break,
        }
    }

    stops.push(to);
    stops.sort_unstable();
    stops.dedup();

    let mut lo = from;
    let raw = stops.iter().map(|&hi| {
        let segment = Segment::new(lo, hi);
        lo = hi.wrapping_add(1);
        segment
    });
    segments.extend(raw.coalesce(|a, b| {
        if is_uniform(a.lo, b.hi) {
            Ok(Segment::new(a.lo, b.hi))
        } else {
            Err((a, b))
        }
    }));
}

fn width(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |d| d + 1)
}

fn is_uniform(mut lo: u64, mut hi: u64) -> bool {
    if width(lo) != width(hi) {
        return false;
    }
    while lo != hi && lo % 10 == 0 && hi % 10 == 9 {
        lo /= 10;
        hi /= 10;
    }
    lo / 10 == hi / 10
}

fn digit(n: u64) -> char {
    char::from(b'0' + (n % 10) as u8)
}

/// One digit fragment per position of a uniform segment: literal digits where
/// `lo` and `hi` agree, digit ranges from there on.
///
/// Equal bounds yield the number as literal text.
pub fn segment(lo: u64, hi: u64) -> Token {
    if lo == hi {
        return common::text(&lo.to_string());
    }
    let (mut lo, mut hi) = (lo, hi);
    let mut fragments = Vec::new();
    while hi > 0 {
        fragments.push(Token::from(chars::range(digit(lo), digit(hi))));
        lo /= 10;
        hi /= 10;
    }
    fragments.reverse();
    group::non_captured(fragments).into()
}

/// The alternation of the segment patterns; one segment is returned as is.
pub fn compose(segments: &[Segment]) -> Token {
    match segments {
        [only] => segment(only.lo, only.hi),
        _ => group::composite(segments.iter().map(|s| segment(s.lo, s.hi))).into(),
    }
}

fn negative(magnitude: Token) -> Token {
    group::non_captured([common::text("-"), magnitude]).into()
}
