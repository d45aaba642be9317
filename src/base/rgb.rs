use derive_more::Display;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A color in RGB space, 8 bit per channel.
///
/// Displays as canonical lowercase hex string, e.g. `#ff8000`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(fmt = "#{:02x}{:02x}{:02x}", r, g, b)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn r(self) -> u8 {
        self.r
    }

    pub const fn g(self) -> u8 {
        self.g
    }

    pub const fn b(self) -> u8 {
        self.b
    }

    /// Sum of the squared per-channel differences.
    ///
    /// Sufficient for comparing distances. Take the square root only when reporting.
    pub fn distance_squared_to(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance in RGB space.
    pub fn distance_to(self, other: Rgb) -> f64 {
        (self.distance_squared_to(other) as f64).sqrt()
    }
}

/// Formats the given color as lowercase, zero-padded `#rrggbb` string.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> Self {
        (rgb.r, rgb.g, rgb.b)
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(value: image::Rgb<u8>) -> Self {
        value.0.into()
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(value: Rgb) -> Self {
        image::Rgb([value.r, value.g, value.b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(rgb_to_hex(Rgb::new(255, 128, 0)), "#ff8000");
        assert_eq!(rgb_to_hex(Rgb::new(1, 2, 3)), "#010203");
        assert_eq!(rgb_to_hex(Rgb::BLACK), "#000000");
        assert_eq!(Rgb::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn distances() {
        assert_eq!(Rgb::new(255, 255, 238).distance_squared_to(Rgb::WHITE), 289);
        assert_eq!(Rgb::WHITE.distance_squared_to(Rgb::BLACK), 3 * 255 * 255);
        assert_eq!(Rgb::new(255, 0, 0).distance_to(Rgb::new(136, 0, 0)), 119.0);
        assert_eq!(Rgb::new(7, 8, 9).distance_to(Rgb::new(7, 8, 9)), 0.0);
    }

    #[test]
    fn image_interop() {
        let pixel = image::Rgb([3u8, 22, 111]);
        let rgb: Rgb = pixel.into();
        assert_eq!(rgb, Rgb::new(3, 22, 111));
        assert_eq!(image::Rgb::<u8>::from(rgb), pixel);
    }
}
