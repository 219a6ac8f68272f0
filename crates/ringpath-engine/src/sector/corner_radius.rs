use std::fmt;
use std::str::FromStr;

use crate::coords::CornerRadii;

/// A single corner radius: an absolute length or a percentage of a ring radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RadiusValue {
    Absolute(f64),
    /// Percent points, e.g. `50.0` for `"50%"`.
    Percent(f64),
}

impl RadiusValue {
    /// Resolves against `base` (the inner radius for inner corners, the outer
    /// radius for outer ones).
    #[inline]
    pub fn resolve(self, base: f64) -> f64 {
        match self {
            RadiusValue::Absolute(v) => v,
            RadiusValue::Percent(p) => p / 100.0 * base,
        }
    }
}

impl Default for RadiusValue {
    fn default() -> Self {
        RadiusValue::Absolute(0.0)
    }
}

impl From<f64> for RadiusValue {
    fn from(v: f64) -> Self {
        RadiusValue::Absolute(v)
    }
}

/// Why a radius string was rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParseRadiusErrorKind {
    Empty,
    InvalidNumber,
}

/// A radius string that is neither a number nor a percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseRadiusError {
    pub input: String,
    pub kind: ParseRadiusErrorKind,
}

impl ParseRadiusError {
    fn new(input: &str, kind: ParseRadiusErrorKind) -> Self {
        Self { input: input.to_owned(), kind }
    }
}

impl fmt::Display for ParseRadiusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseRadiusErrorKind::Empty => write!(f, "empty corner radius"),
            ParseRadiusErrorKind::InvalidNumber => {
                write!(f, "invalid corner radius {:?}: expected a number or percentage", self.input)
            }
        }
    }
}

impl std::error::Error for ParseRadiusError {}

impl FromStr for RadiusValue {
    type Err = ParseRadiusError;

    /// Accepts `"12"`, `"12.5"` and `"50%"`, with surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseRadiusError::new(s, ParseRadiusErrorKind::Empty));
        }

        let number = |text: &str| {
            text.trim()
                .parse::<f64>()
                .map_err(|_| ParseRadiusError::new(s, ParseRadiusErrorKind::InvalidNumber))
        };

        match trimmed.strip_suffix('%') {
            Some(pct) => Ok(RadiusValue::Percent(number(pct)?)),
            None => Ok(RadiusValue::Absolute(number(trimmed)?)),
        }
    }
}

/// Corner-radius shorthand for an annular sector.
///
/// Expansion into (inner-start, inner-end, outer-start, outer-end):
///
/// | input | expands to |
/// |-------|------------|
/// | `Uniform(v)` | `[v, v, v, v]` |
/// | `[a]` | `[a, a, 0, 0]` |
/// | `[a, b]` | `[a, a, b, b]` |
/// | `[a, b, c]` | `[a, b, c, c]` |
/// | `[a, b, c, d]` | `[a, b, c, d]` |
///
/// An empty list means no rounding; entries past the fourth are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum CornerRadius {
    Uniform(RadiusValue),
    List(Vec<RadiusValue>),
}

impl Default for CornerRadius {
    fn default() -> Self {
        CornerRadius::Uniform(RadiusValue::default())
    }
}

impl From<f64> for CornerRadius {
    fn from(v: f64) -> Self {
        CornerRadius::Uniform(v.into())
    }
}

impl From<RadiusValue> for CornerRadius {
    fn from(v: RadiusValue) -> Self {
        CornerRadius::Uniform(v)
    }
}

impl From<Vec<RadiusValue>> for CornerRadius {
    fn from(v: Vec<RadiusValue>) -> Self {
        CornerRadius::List(v)
    }
}

impl<const N: usize> From<[f64; N]> for CornerRadius {
    fn from(v: [f64; N]) -> Self {
        CornerRadius::List(v.into_iter().map(RadiusValue::from).collect())
    }
}

impl CornerRadius {
    /// Expands the shorthand into four slots, still unresolved.
    ///
    /// Order: inner-start, inner-end, outer-start, outer-end.
    pub fn expand(&self) -> [RadiusValue; 4] {
        let zero = RadiusValue::default();
        match self {
            CornerRadius::Uniform(v) => [*v; 4],
            CornerRadius::List(list) => match list.as_slice() {
                [] => [zero; 4],
                [a] => [*a, *a, zero, zero],
                [a, b] => [*a, *a, *b, *b],
                [a, b, c] => [*a, *b, *c, *c],
                [a, b, c, d, ..] => [*a, *b, *c, *d],
            },
        }
    }

    /// Expands and resolves to absolute radii.
    ///
    /// Percentages in the two inner slots resolve against `inner_radius`, the
    /// two outer slots against `outer_radius`. Negative results become zero.
    pub fn resolve(&self, inner_radius: f64, outer_radius: f64) -> CornerRadii {
        let [is, ie, os, oe] = self.expand();
        CornerRadii::new(
            is.resolve(inner_radius),
            ie.resolve(inner_radius),
            os.resolve(outer_radius),
            oe.resolve(outer_radius),
        )
        .sanitized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abs(v: f64) -> RadiusValue { RadiusValue::Absolute(v) }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parse_plain_number() {
        assert_eq!("12".parse::<RadiusValue>().unwrap(), abs(12.0));
        assert_eq!(" 2.5 ".parse::<RadiusValue>().unwrap(), abs(2.5));
    }

    #[test]
    fn parse_percentage() {
        assert_eq!("50%".parse::<RadiusValue>().unwrap(), RadiusValue::Percent(50.0));
        assert_eq!(" 12.5 % ".parse::<RadiusValue>().unwrap(), RadiusValue::Percent(12.5));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "ten".parse::<RadiusValue>().unwrap_err();
        assert_eq!(err.kind, ParseRadiusErrorKind::InvalidNumber);
        assert_eq!(err.input, "ten");
        assert!(err.to_string().contains("ten"));

        assert_eq!("%".parse::<RadiusValue>().unwrap_err().kind, ParseRadiusErrorKind::InvalidNumber);
        assert_eq!("  ".parse::<RadiusValue>().unwrap_err().kind, ParseRadiusErrorKind::Empty);
    }

    // ── shorthand expansion ───────────────────────────────────────────────

    #[test]
    fn expand_uniform() {
        assert_eq!(CornerRadius::from(3.0).expand(), [abs(3.0); 4]);
    }

    #[test]
    fn expand_one() {
        assert_eq!(CornerRadius::from([1.0]).expand(), [abs(1.0), abs(1.0), abs(0.0), abs(0.0)]);
    }

    #[test]
    fn expand_two() {
        assert_eq!(CornerRadius::from([1.0, 2.0]).expand(), [abs(1.0), abs(1.0), abs(2.0), abs(2.0)]);
    }

    #[test]
    fn expand_three() {
        assert_eq!(
            CornerRadius::from([1.0, 2.0, 3.0]).expand(),
            [abs(1.0), abs(2.0), abs(3.0), abs(3.0)]
        );
    }

    #[test]
    fn expand_four() {
        assert_eq!(
            CornerRadius::from([1.0, 2.0, 3.0, 4.0]).expand(),
            [abs(1.0), abs(2.0), abs(3.0), abs(4.0)]
        );
    }

    #[test]
    fn expand_empty_is_zero() {
        assert_eq!(CornerRadius::List(Vec::new()).expand(), [abs(0.0); 4]);
    }

    #[test]
    fn expand_ignores_extra_entries() {
        assert_eq!(
            CornerRadius::from([1.0, 2.0, 3.0, 4.0, 5.0]).expand(),
            [abs(1.0), abs(2.0), abs(3.0), abs(4.0)]
        );
    }

    // ── resolution ────────────────────────────────────────────────────────

    #[test]
    fn percent_resolves_per_ring() {
        let cr = CornerRadius::Uniform(RadiusValue::Percent(50.0));
        let r = cr.resolve(10.0, 20.0);
        assert_eq!(r, CornerRadii::new(5.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn mixed_list_resolves() {
        let cr = CornerRadius::List(vec!["25%".parse().unwrap(), abs(3.0)]);
        let r = cr.resolve(8.0, 40.0);
        assert_eq!(r, CornerRadii::new(2.0, 2.0, 3.0, 3.0));
    }

    #[test]
    fn negative_radius_becomes_zero() {
        let r = CornerRadius::from([-2.0, 4.0]).resolve(5.0, 10.0);
        assert_eq!(r, CornerRadii::new(0.0, 0.0, 4.0, 4.0));
    }
}
