use crate::{ColorValue, Palette};
use std::collections::BTreeMap;

/// The colors a palette is built from.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum PaletteSource {
    /// Colors without names.
    Sequence(Vec<ColorValue>),
    /// Colors with names, in the given order.
    Mapping(Vec<(String, ColorValue)>),
}

impl PaletteSource {
    pub fn sequence<I, C>(colors: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColorValue>,
    {
        Self::Sequence(colors.into_iter().map(Into::into).collect())
    }

    pub fn mapping<I, K, C>(colors: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<ColorValue>,
    {
        Self::Mapping(
            colors
                .into_iter()
                .map(|(name, color)| (name.into(), color.into()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(colors) => colors.len(),
            Self::Mapping(colors) => colors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: Into<ColorValue>> From<Vec<C>> for PaletteSource {
    fn from(colors: Vec<C>) -> Self {
        Self::sequence(colors)
    }
}

impl<C: Into<ColorValue>, const N: usize> From<[C; N]> for PaletteSource {
    fn from(colors: [C; N]) -> Self {
        Self::sequence(colors)
    }
}

impl<C: Into<ColorValue> + Clone> From<&[C]> for PaletteSource {
    fn from(colors: &[C]) -> Self {
        Self::sequence(colors.iter().cloned())
    }
}

/// Iterates in key order.
impl<K: Into<String>, C: Into<ColorValue>> From<BTreeMap<K, C>> for PaletteSource {
    fn from(colors: BTreeMap<K, C>) -> Self {
        Self::mapping(colors)
    }
}

impl From<Palette> for PaletteSource {
    fn from(palette: Palette) -> Self {
        Self::sequence(palette.into_colors())
    }
}

impl From<&Palette> for PaletteSource {
    fn from(palette: &Palette) -> Self {
        Self::sequence(palette.colors())
    }
}
