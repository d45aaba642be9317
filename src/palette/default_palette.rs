use crate::{ColorSpec, Palette};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The default colors: the 256 colors of a typical xterm-compatible terminal.
///
/// 0..16 are the standard and bright colors, 16..232 the 6x6x6 color cube and 232..256 the
/// grayscale ramp. Some entries occur more than once.
pub const DEFAULT_PALETTE_COLORS: [&str; 256] = [
    "#000000", "#c91b00", "#00c300", "#c7c500", "#0225c7", "#ca30c7", "#00c5c7", "#c7c7c7",
    "#686868", "#ff6e67", "#60fa67", "#fffc67", "#6971ff", "#ff77ff", "#5ffdff", "#ffffff",
    "#000000", "#000c5f", "#011587", "#011faf", "#0328d7", "#0433ff", "#005f01", "#005f60",
    "#005f87", "#005fb0", "#005fd7", "#005fff", "#008701", "#01875f", "#008787", "#0087af",
    "#0087d7", "#0087ff", "#00af01", "#00af5f", "#00af87", "#00afaf", "#00afd7", "#00aeff",
    "#00d701", "#01d760", "#00d787", "#00d7af", "#00d7d7", "#00d7ff", "#05f900", "#04f95f",
    "#02fa87", "#03fbaf", "#03fcd7", "#02fcff", "#5f0800", "#5f115f", "#5f1987", "#5e23af",
    "#5f2bd8", "#5f34ff", "#5f5f00", "#5f5f5f", "#5f5f87", "#5f5faf", "#5f5fd7", "#5f5fff",
    "#5f8700", "#5f875f", "#5f8787", "#5f87af", "#5f87d7", "#5f87ff", "#5faf00", "#5faf5f",
    "#5faf87", "#5fafaf", "#5eafd7", "#5fafff", "#5fd700", "#5fd75f", "#5fd787", "#5fd7af",
    "#5fd7d7", "#5fd7ff", "#60f900", "#60fa5f", "#60fa87", "#5ffbaf", "#5ffcd7", "#5ffdff",
    "#870f00", "#86165f", "#871e87", "#8725b0", "#872ed7", "#8736ff", "#875f01", "#875f5f",
    "#875f87", "#875faf", "#875fd7", "#875fff", "#878701", "#87875f", "#878787", "#8787af",
    "#8787d7", "#8787ff", "#87af00", "#87af5f", "#87af87", "#87afaf", "#87afd7", "#87afff",
    "#87d700", "#87d760", "#87d787", "#87d7af", "#87d7d7", "#87d7ff", "#87f901", "#87fa5f",
    "#87fb87", "#87fbaf", "#87fcd8", "#87fdff", "#af1601", "#af1c5f", "#af2287", "#af29af",
    "#af31d7", "#af39ff", "#af5f00", "#b05e5f", "#af5f87", "#af5faf", "#af5fd7", "#af5fff",
    "#af8700", "#af875f", "#af8787", "#af87af", "#af87d7", "#af87ff", "#afaf00", "#afaf5f",
    "#afaf87", "#afafaf", "#afafd7", "#afafff", "#afd701", "#afd75f", "#afd787", "#afd7af",
    "#afd7d7", "#afd7ff", "#affa01", "#affb5f", "#affb88", "#affbaf", "#b0fdd7", "#affeff",
    "#d71e00", "#d7235f", "#d72787", "#d72eaf", "#d734d7", "#d73cff", "#d75f01", "#d75f5e",
    "#d75f87", "#d75faf", "#d75fd7", "#d75fff", "#d78701", "#d7875f", "#d78787", "#d887af",
    "#d787d7", "#d787ff", "#d7af00", "#d7af5f", "#d7af87", "#d7afb0", "#d7afd7", "#d7afff",
    "#d7d700", "#d7d75f", "#d7d787", "#d7d7af", "#d7d7d7", "#d7d7ff", "#d7fb00", "#d7fb5f",
    "#d7fc87", "#d7fcaf", "#d7fdd7", "#d7feff", "#ff2500", "#ff2a5f", "#ff2d87", "#ff33af",
    "#ff39d7", "#fe40ff", "#ff5f00", "#ff5f5f", "#ff5f87", "#ff5faf", "#ff5fd7", "#ff5fff",
    "#ff8700", "#ff875f", "#ff8787", "#ff87af", "#ff87d7", "#ff87ff", "#ffaf00", "#ffaf5f",
    "#ffaf87", "#ffafaf", "#ffafd8", "#ffafff", "#ffd600", "#ffd75f", "#ffd787", "#ffd7af",
    "#ffd7d8", "#ffd7ff", "#fefb01", "#fffc5e", "#fffc87", "#fffdaf", "#fffed7", "#ffffff",
    "#080808", "#121212", "#1c1c1c", "#262626", "#303030", "#3a3a3a", "#444444", "#4e4e4e",
    "#585858", "#626262", "#6c6c6c", "#767676", "#808080", "#8a8a8a", "#949494", "#9e9e9e",
    "#a8a8a8", "#b2b2b2", "#bcbcbc", "#c6c6c6", "#d0d0d0", "#dadada", "#e4e4e4", "#eeeeee",
];

static DEFAULT_PALETTE: Lazy<Palette> = Lazy::new(|| {
    DEFAULT_PALETTE_COLORS
        .iter()
        .map(|hex| ColorSpec::parse(*hex).expect("impossible"))
        .collect()
});

static DEFAULT_PALETTE_INDEXES: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    // Later entries overwrite earlier ones with the same color
    DEFAULT_PALETTE_COLORS
        .iter()
        .enumerate()
        .map(|(i, hex)| (*hex, i as u8))
        .collect()
});

/// Returns the palette used when no other palette is given.
pub fn default_palette() -> &'static Palette {
    &DEFAULT_PALETTE
}

/// Returns the index of the given color within the default palette.
///
/// Expects the exact notation used in [`DEFAULT_PALETTE_COLORS`], e.g. `#5f87af`. If the color
/// occurs more than once, this returns the index of the last occurrence.
pub fn default_palette_index(hex: &str) -> Option<u8> {
    DEFAULT_PALETTE_INDEXES.get(hex).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    #[test]
    fn palette() {
        let palette = default_palette();
        assert_eq!(palette.len(), 256);
        assert!(palette.iter().all(|c| c.name().is_none()));
        assert_eq!(palette.colors()[1].rgb(), Rgb::new(0xc9, 0x1b, 0x00));
        assert_eq!(palette.colors()[255].source(), "#eeeeee");
    }

    #[test]
    fn indexes() {
        assert_eq!(default_palette_index("#c91b00"), Some(1));
        assert_eq!(default_palette_index("#5f87af"), Some(67));
        assert_eq!(default_palette_index("#eeeeee"), Some(255));
        assert_eq!(default_palette_index("#000000"), Some(16));
        assert_eq!(default_palette_index("#ffffff"), Some(231));
        assert_eq!(default_palette_index("#5ffdff"), Some(87));
        assert_eq!(default_palette_index("#c91b01"), None);
        assert_eq!(default_palette_index("#C91B00"), None);
    }

    #[test]
    fn nearest_index_maps_to_terminal_color() {
        let palette = default_palette();
        assert_eq!(palette.nearest_index(Rgb::new(0x80, 0x80, 0x80)), Some(244));
        assert_eq!(palette.nearest_index(Rgb::BLACK), Some(0));
        assert_eq!(palette.nearest_index(Rgb::WHITE), Some(15));
    }
}
