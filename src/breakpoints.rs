//! Named width breakpoints and their mobile-first ordering.
//!
//! A [`Breakpoints`] value is the canonical table: a declaration-ordered
//! mapping from breakpoint name to the width (in logical pixels) where its
//! band starts, plus a derived list of those bands sorted ascending. The
//! table is built wholesale and never mutated in place; replacing a
//! configuration means building a new value.

use std::fmt;

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::warn;

/// Error returned by the width predicates when a name is not part of the
/// configured mapping, or its min width is NaN and therefore unusable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownBreakpoint {
    /// The offending breakpoint name.
    pub name: String,
}

impl fmt::Display for UnknownBreakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown breakpoint {:?}", self.name)
    }
}

impl std::error::Error for UnknownBreakpoint {}

/// One breakpoint's band: its name and the width where the band starts.
#[derive(Clone, Debug, PartialEq)]
struct Band {
    name: String,
    min_width: f64,
}

/// A declaration-ordered breakpoint table and its derived band list.
///
/// Built from `(name, min width)` pairs; collecting an iterator is the usual
/// way in code, and with the `serde` feature a table deserializes from any
/// map-shaped config:
///
/// ```
/// use viewport_breakpoints::Breakpoints;
///
/// let breakpoints: Breakpoints =
///     [("sm", 0.0), ("md", 768.0), ("lg", 1024.0)].into_iter().collect();
///
/// assert_eq!(breakpoints.min_width("md"), Some(768.0));
/// assert_eq!(breakpoints.resolve(500.0), Some("sm"));
/// assert_eq!(breakpoints.resolve(1400.0), Some("lg"));
/// ```
///
/// Bands are sorted ascending by min width with a stable sort, so
/// breakpoints sharing a min width keep declaration order; the last
/// declared of a tie sorts as the widest and wins resolution. Supplying a
/// name twice keeps its first position with the last width.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Breakpoints {
    sizes: IndexMap<String, f64>,
    bands: SmallVec<[Band; 8]>,
}

impl Breakpoints {
    /// An empty table: nothing ever resolves and every predicate reports
    /// its name unknown.
    pub fn new() -> Breakpoints {
        Breakpoints::default()
    }

    fn from_map(sizes: IndexMap<String, f64>) -> Breakpoints {
        let mut bands: SmallVec<[Band; 8]> = sizes
            .iter()
            .map(|(name, &min_width)| Band {
                name: name.clone(),
                min_width,
            })
            .collect();
        // Stable sort: equal min widths keep declaration order.
        bands.sort_by(|a, b| a.min_width.total_cmp(&b.min_width));
        for band in &bands {
            if band.min_width.is_nan() {
                warn!(name = %band.name, "breakpoint has a NaN min width and will never match");
            }
        }
        Breakpoints { sizes, bands }
    }

    /// Number of configured breakpoints.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Whether `name` is a configured breakpoint.
    pub fn contains(&self, name: &str) -> bool {
        self.sizes.contains_key(name)
    }

    /// The width where `name`'s band starts, if configured.
    pub fn min_width(&self, name: &str) -> Option<f64> {
        self.sizes.get(name).copied()
    }

    /// Names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sizes.keys().map(String::as_str)
    }

    /// `(name, min width)` bands in mobile-first order (ascending width).
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.bands.iter().map(|band| (band.name.as_str(), band.min_width))
    }

    /// The active breakpoint for `width`: scanning from the widest band
    /// down, the first whose min width is at or below `width`. `None` when
    /// no band qualifies.
    pub fn resolve(&self, width: f64) -> Option<&str> {
        self.bands
            .iter()
            .rev()
            .find(|band| width >= band.min_width)
            .map(|band| band.name.as_str())
    }

    /// Confirm `name` maps to a usable min width and return it.
    pub(crate) fn validate(&self, name: &str) -> Result<f64, UnknownBreakpoint> {
        match self.sizes.get(name) {
            Some(&width) if !width.is_nan() => Ok(width),
            _ => Err(UnknownBreakpoint {
                name: name.to_string(),
            }),
        }
    }

    /// The width where the band above `name` starts, or infinity when
    /// `name` is the widest (or only) band.
    pub(crate) fn next_above(&self, name: &str) -> f64 {
        match self.bands.iter().position(|band| band.name == name) {
            Some(idx) => self
                .bands
                .get(idx + 1)
                .map_or(f64::INFINITY, |band| band.min_width),
            None => f64::INFINITY,
        }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Breakpoints {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Breakpoints {
        Breakpoints::from_map(
            iter.into_iter()
                .map(|(name, width)| (name.into(), width))
                .collect(),
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Breakpoints {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sizes.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Breakpoints {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Breakpoints, D::Error> {
        let sizes = IndexMap::<String, f64>::deserialize(deserializer)?;
        Ok(Breakpoints::from_map(sizes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bootstrap() -> Breakpoints {
        [("sm", 0.0), ("md", 768.0), ("lg", 1024.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_bands_sort_ascending_regardless_of_declaration() {
        let breakpoints: Breakpoints = [("lg", 1024.0), ("sm", 0.0), ("md", 768.0)]
            .into_iter()
            .collect();
        let order: Vec<&str> = breakpoints.iter().map(|(name, _)| name).collect();
        assert_eq!(order, ["sm", "md", "lg"]);
    }

    #[test]
    fn test_names_keep_declaration_order() {
        let breakpoints: Breakpoints = [("lg", 1024.0), ("sm", 0.0), ("md", 768.0)]
            .into_iter()
            .collect();
        let names: Vec<&str> = breakpoints.names().collect();
        assert_eq!(names, ["lg", "sm", "md"]);
    }

    #[test]
    fn test_equal_widths_keep_declaration_order() {
        let breakpoints: Breakpoints = [("first", 600.0), ("second", 600.0)]
            .into_iter()
            .collect();
        let order: Vec<&str> = breakpoints.iter().map(|(name, _)| name).collect();
        assert_eq!(order, ["first", "second"]);
        // The later declared of a tie sorts as the widest, so it wins
        // resolution at any qualifying width.
        assert_eq!(breakpoints.resolve(700.0), Some("second"));
    }

    #[test]
    fn test_resolve_boundaries_are_inclusive() {
        let breakpoints = bootstrap();
        assert_eq!(breakpoints.resolve(0.0), Some("sm"));
        assert_eq!(breakpoints.resolve(767.9), Some("sm"));
        assert_eq!(breakpoints.resolve(768.0), Some("md"));
        assert_eq!(breakpoints.resolve(1023.9), Some("md"));
        assert_eq!(breakpoints.resolve(1024.0), Some("lg"));
        assert_eq!(breakpoints.resolve(9999.0), Some("lg"));
    }

    #[test]
    fn test_resolve_below_every_band_is_none() {
        let breakpoints: Breakpoints = [("sm", 360.0), ("md", 768.0)].into_iter().collect();
        assert_eq!(breakpoints.resolve(200.0), None);
        assert_eq!(breakpoints.resolve(359.9), None);
        assert_eq!(breakpoints.resolve(360.0), Some("sm"));
    }

    #[test]
    fn test_resolve_on_empty_table_is_none() {
        let breakpoints = Breakpoints::new();
        assert!(breakpoints.is_empty());
        assert_eq!(breakpoints.resolve(1000.0), None);
    }

    #[test]
    fn test_validate_rejects_missing_and_nan() {
        let breakpoints: Breakpoints = [("sm", 0.0), ("bad", f64::NAN)].into_iter().collect();
        assert_eq!(breakpoints.validate("sm"), Ok(0.0));
        assert_eq!(
            breakpoints.validate("xl"),
            Err(UnknownBreakpoint {
                name: "xl".to_string()
            })
        );
        // A NaN min width is present in the table but unusable.
        assert!(breakpoints.contains("bad"));
        assert!(breakpoints.validate("bad").is_err());
    }

    #[test]
    fn test_nan_band_never_resolves() {
        let breakpoints: Breakpoints = [("sm", 0.0), ("bad", f64::NAN)].into_iter().collect();
        assert_eq!(breakpoints.resolve(5000.0), Some("sm"));
    }

    #[test]
    fn test_next_above_steps_through_bands() {
        let breakpoints = bootstrap();
        assert_eq!(breakpoints.next_above("sm"), 768.0);
        assert_eq!(breakpoints.next_above("md"), 1024.0);
        assert_eq!(breakpoints.next_above("lg"), f64::INFINITY);
    }

    #[test]
    fn test_duplicate_name_keeps_first_position_last_width() {
        let breakpoints: Breakpoints = [("sm", 0.0), ("md", 500.0), ("md", 768.0)]
            .into_iter()
            .collect();
        assert_eq!(breakpoints.len(), 2);
        assert_eq!(breakpoints.min_width("md"), Some(768.0));
    }

    #[test]
    fn test_error_display_names_the_breakpoint() {
        let err = UnknownBreakpoint {
            name: "xl".to_string(),
        };
        assert_eq!(err.to_string(), "unknown breakpoint \"xl\"");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_table_deserializes_from_json_map() {
        let breakpoints: Breakpoints =
            serde_json::from_str(r#"{ "sm": 0, "md": 768, "lg": 1024 }"#).unwrap();
        assert_eq!(breakpoints.min_width("md"), Some(768.0));
        let order: Vec<&str> = breakpoints.iter().map(|(name, _)| name).collect();
        assert_eq!(order, ["sm", "md", "lg"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_table_serializes_as_plain_map() {
        let json = serde_json::to_string(&bootstrap()).unwrap();
        assert_eq!(json, r#"{"sm":0.0,"md":768.0,"lg":1024.0}"#);
    }
}
