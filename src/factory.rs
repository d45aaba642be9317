use crate::{nearest_color_in, ColorError, ColorQuery, NearestMatch, Palette, PaletteSource};

/// Looks up nearest colors within a fixed palette.
///
/// The palette is built and validated when the matcher is created, not when it's first used.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NearestColorMatcher {
    palette: Palette,
}

impl NearestColorMatcher {
    pub fn new(source: impl Into<PaletteSource>) -> Result<Self, ColorError> {
        let palette = Palette::build(source)?;
        tracing::debug!(palette_len = palette.len(), "created nearest color matcher");
        Ok(Self { palette })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn nearest<'a>(&self, query: impl Into<ColorQuery<'a>>) -> Result<NearestMatch, ColorError> {
        nearest_color_in(query, &self.palette)
    }

    /// Creates an independent matcher for the given colors.
    pub fn from_palette(&self, source: impl Into<PaletteSource>) -> Result<Self, ColorError> {
        Self::new(source)
    }

    /// Creates a matcher for the colors of this matcher followed by the given ones.
    pub fn or(&self, source: impl Into<PaletteSource>) -> Result<Self, ColorError> {
        let alternative = Palette::build(source)?;
        let palette = self.palette.concat(&alternative);
        tracing::debug!(
            palette_len = palette.len(),
            added = alternative.len(),
            "extended nearest color matcher"
        );
        Ok(Self { palette })
    }
}

impl From<Palette> for NearestColorMatcher {
    fn from(palette: Palette) -> Self {
        Self { palette }
    }
}

/// Creates a matcher for the given colors.
///
/// # Examples
///
/// ```
/// use nearest_color::{from_palette, PaletteSource};
///
/// let colors = PaletteSource::mapping([("maroon", "#800"), ("white", "fff")]);
/// let any_color = from_palette(colors).unwrap().or(["#eee", "#444"]).unwrap();
/// assert_eq!(any_color.nearest("#f00").unwrap().name(), Some("maroon"));
/// assert_eq!(any_color.nearest("#888").unwrap().value(), "#444");
/// ```
pub fn from_palette(source: impl Into<PaletteSource>) -> Result<NearestColorMatcher, ColorError> {
    NearestColorMatcher::new(source)
}
