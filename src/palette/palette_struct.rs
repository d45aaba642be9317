use crate::{find_nearest_color, ColorError, ColorSpec, PaletteSource, Rgb};
use std::slice;

/// An ordered list of available colors.
///
/// Order only matters when several colors are equally near to a queried one: the first one
/// wins. Neither colors nor names need to be unique.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Palette {
    colors: Vec<ColorSpec>,
}

impl Palette {
    /// Builds a palette, parsing each color.
    ///
    /// Fails on the first color which can't be parsed.
    pub fn build(source: impl Into<PaletteSource>) -> Result<Self, ColorError> {
        let colors: Result<Vec<_>, ColorError> = match source.into() {
            PaletteSource::Sequence(colors) => colors
                .into_iter()
                .map(|c| ColorSpec::create(c, None))
                .collect(),
            PaletteSource::Mapping(colors) => colors
                .into_iter()
                .map(|(name, c)| ColorSpec::create(c, Some(name)))
                .collect(),
        };
        let palette = Self { colors: colors? };
        tracing::trace!(len = palette.len(), "built palette");
        Ok(palette)
    }

    pub fn from_colors(colors: Vec<ColorSpec>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[ColorSpec] {
        &self.colors
    }

    pub fn into_colors(self) -> Vec<ColorSpec> {
        self.colors
    }

    pub fn get(&self, index: usize) -> Option<&ColorSpec> {
        self.colors.get(index)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, ColorSpec> {
        self.colors.iter()
    }

    /// Returns a new palette consisting of the colors of this one followed by the given ones.
    pub fn concat(&self, other: &Palette) -> Palette {
        let colors = self.colors.iter().chain(other.colors.iter()).cloned();
        Self {
            colors: colors.collect(),
        }
    }

    /// Returns the color nearest to the given one along with the squared distance.
    ///
    /// Returns `None` if this palette is empty.
    pub fn nearest(&self, rgb: Rgb) -> Option<(&ColorSpec, u32)> {
        let (index, distance_squared) = find_nearest_color(rgb, &self.colors)?;
        Some((&self.colors[index], distance_squared))
    }

    /// Returns the index of the color nearest to the given one.
    pub fn nearest_index(&self, rgb: Rgb) -> Option<usize> {
        find_nearest_color(rgb, &self.colors).map(|(i, _)| i)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorSpec;
    type IntoIter = slice::Iter<'a, ColorSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<ColorSpec> for Palette {
    fn from_iter<T: IntoIterator<Item = ColorSpec>>(iter: T) -> Self {
        Self::from_colors(iter.into_iter().collect())
    }
}
