use crate::{default_palette, parse_color, ColorError, ColorQuery, ColorSpec, Palette, Rgb};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A matched color which has a name.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorMatch {
    pub name: String,
    /// Source of the matched color, e.g. `#FF0`.
    pub value: String,
    pub rgb: Rgb,
    /// Euclidean distance between the queried and the matched color.
    pub distance: f64,
}

/// Result of looking up the nearest color.
///
/// Colors without name are reported as bare source string, without distance.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum NearestMatch {
    Named(ColorMatch),
    Unnamed(String),
}

impl Display for NearestMatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl NearestMatch {
    fn new(color: &ColorSpec, distance_squared: u32) -> Self {
        match color.name() {
            Some(name) => Self::Named(ColorMatch {
                name: name.to_string(),
                value: color.source().to_string(),
                rgb: color.rgb(),
                distance: (distance_squared as f64).sqrt(),
            }),
            None => Self::Unnamed(color.source().to_string()),
        }
    }

    /// Source of the matched color.
    pub fn value(&self) -> &str {
        match self {
            Self::Named(m) => &m.value,
            Self::Unnamed(source) => source,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.named().map(|m| m.name.as_str())
    }

    pub fn named(&self) -> Option<&ColorMatch> {
        match self {
            Self::Named(m) => Some(m),
            Self::Unnamed(_) => None,
        }
    }
}

// Initially taken from https://github.com/jamesmunns/launch-rs/blob/master/lib/src/color.rs
/// Returns the index of the color nearest to the given one along with the squared distance.
///
/// If several colors are equally near, the first one wins. Returns `None` if there are no colors.
pub fn find_nearest_color(color: Rgb, palette: &[ColorSpec]) -> Option<(usize, u32)> {
    let mut nearest: Option<(usize, u32)> = None;
    for (i, c) in palette.iter().enumerate() {
        let distance = color.distance_squared_to(c.rgb());
        if distance == 0 {
            // Exact match
            return Some((i, 0));
        }
        if nearest.map_or(true, |(_, min)| distance < min) {
            nearest = Some((i, distance));
        }
    }
    nearest
}

/// Looks up the color of the given palette which is nearest to the queried one.
pub fn nearest_color_in<'a>(
    query: impl Into<ColorQuery<'a>>,
    palette: &Palette,
) -> Result<NearestMatch, ColorError> {
    let rgb = parse_color(query)?;
    let (color, distance_squared) = palette.nearest(rgb).ok_or(ColorError::EmptyPalette)?;
    tracing::trace!(
        query = %rgb,
        nearest = color.source(),
        distance_squared,
        "found nearest color"
    );
    Ok(NearestMatch::new(color, distance_squared))
}

/// Looks up the color of the [default palette](default_palette) which is nearest to the queried
/// one.
///
/// # Examples
///
/// ```
/// use nearest_color::{nearest_color, Rgb};
///
/// assert_eq!(nearest_color("#f11").unwrap().value(), "#ff2500");
/// assert_eq!(nearest_color(Rgb::new(200, 50, 50)).unwrap().value(), "#d7235f");
/// assert!(nearest_color("foo").is_err());
/// ```
pub fn nearest_color<'a>(query: impl Into<ColorQuery<'a>>) -> Result<NearestMatch, ColorError> {
    nearest_color_in(query, default_palette())
}
