//! Finds the color of a palette which is nearest to a given one, measured as Euclidean distance
//! in RGB space.
//!
//! Useful for snapping arbitrary colors to a constrained set of colors, e.g. the 256 colors of a
//! terminal or a set of named colors.
//!
//! ```
//! use nearest_color::{from_palette, nearest_color, PaletteSource};
//!
//! // Default palette
//! assert_eq!(nearest_color("#f11").unwrap().to_string(), "#ff2500");
//!
//! // Custom palette with names
//! let get_color = from_palette(PaletteSource::mapping([("maroon", "#800"), ("white", "fff")]))
//!     .unwrap();
//! let m = get_color.nearest("ffe").unwrap();
//! assert_eq!(m.name(), Some("white"));
//! assert_eq!(m.named().unwrap().distance, 17.0);
//! ```
#[macro_use]
mod util;

mod base;
pub use base::*;

mod error;
pub use error::*;

mod standard_colors;
pub use standard_colors::*;

mod parse;
pub use parse::*;

mod palette;
pub use palette::*;

mod matcher;
pub use matcher::*;

mod factory;
pub use factory::*;

#[cfg(test)]
mod test_util;
