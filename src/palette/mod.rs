mod color_spec;
pub use color_spec::*;

mod palette_source;
pub use palette_source::*;

mod palette_struct;
pub use palette_struct::*;

mod default_palette;
pub use default_palette::*;
