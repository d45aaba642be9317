use crate::{standard_color, ColorError, ColorSpec, Rgb};
use std::str::FromStr;

/// A color given by the caller, either structured or as text.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ColorQuery<'a> {
    Rgb(Rgb),
    Text(&'a str),
}

impl From<Rgb> for ColorQuery<'_> {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<(u8, u8, u8)> for ColorQuery<'_> {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::Rgb(value.into())
    }
}

impl<'a> From<&'a str> for ColorQuery<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for ColorQuery<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a ColorSpec> for ColorQuery<'a> {
    fn from(value: &'a ColorSpec) -> Self {
        Self::Rgb(value.rgb())
    }
}

/// A color query classified by its shape, ready to be resolved to RGB.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ColorInput<'a> {
    Rgb(Rgb),
    /// Name of a standard color.
    Named(&'a str),
    /// Either 3 or 6 hex digits, optionally with leading `#`.
    Hex(&'a str),
    /// Components of an `rgb()` expression, each an integer optionally followed by `%`.
    Functional {
        text: &'a str,
        components: [&'a str; 3],
    },
}

impl<'a> ColorInput<'a> {
    /// Decides which form the given query has.
    ///
    /// Named colors take precedence over hex strings, hex strings over `rgb()` expressions.
    pub fn classify(query: impl Into<ColorQuery<'a>>) -> Result<Self, ColorError> {
        let text = match query.into() {
            ColorQuery::Rgb(rgb) => return Ok(Self::Rgb(rgb)),
            ColorQuery::Text(text) => text,
        };
        if standard_color(text).is_some() {
            return Ok(Self::Named(text));
        }
        if hex_regex().is_match(text) {
            return Ok(Self::Hex(text));
        }
        if let Some(captures) = functional_regex().captures(text) {
            let component = |i: usize| captures.get(i).map_or("", |m| m.as_str());
            return Ok(Self::Functional {
                text,
                components: [component(1), component(2), component(3)],
            });
        }
        Err(ColorError::invalid(text))
    }

    pub fn resolve(self) -> Result<Rgb, ColorError> {
        match self {
            Self::Rgb(rgb) => Ok(rgb),
            Self::Named(name) => {
                let hex = standard_color(name).ok_or_else(|| ColorError::invalid(name))?;
                parse_color(hex)
            }
            Self::Hex(text) => {
                let digits = text.strip_prefix('#').unwrap_or(text);
                parse_hex_digits(digits).ok_or_else(|| ColorError::invalid(text))
            }
            Self::Functional {
                text,
                components: [r, g, b],
            } => {
                let component = |c| parse_component(c).ok_or_else(|| ColorError::invalid(text));
                Ok(Rgb::new(component(r)?, component(g)?, component(b)?))
            }
        }
    }
}

/// Parses the given color.
///
/// Accepts structured RGB values (returned unchanged), standard color names (e.g. `aqua`), hex
/// strings with 3 or 6 digits and optional leading `#` (e.g. `#f00`, `04fbc8`) and `rgb()`
/// expressions with absolute or percentage components (e.g. `rgb(3, 10, 100)`,
/// `rgb(50%, 0%, 50%)`).
pub fn parse_color<'a>(query: impl Into<ColorQuery<'a>>) -> Result<Rgb, ColorError> {
    ColorInput::classify(query)?.resolve()
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

fn parse_hex_digits(digits: &str) -> Option<Rgb> {
    let byte = |pair: &str| u8::from_str_radix(pair, 16).ok();
    match digits.len() {
        3 => {
            let nibble = |i: usize| byte(&digits[i..=i]).map(|v| v * 17);
            Some(Rgb::new(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => Some(Rgb::new(
            byte(&digits[0..2])?,
            byte(&digits[2..4])?,
            byte(&digits[4..6])?,
        )),
        _ => None,
    }
}

/// Returns `None` if the component doesn't fit into 8 bit.
fn parse_component(text: &str) -> Option<u8> {
    let value = match text.strip_suffix('%') {
        Some(percentage) => {
            let percentage: u32 = percentage.parse().ok()?;
            (percentage as f64 * 255.0 / 100.0).round() as u32
        }
        None => text.parse().ok()?,
    };
    u8::try_from(value).ok()
}

fn hex_regex() -> &'static regex::Regex {
    regex!(r"^#?(?:[0-9a-fA-F]{3}){1,2}$")
}

fn functional_regex() -> &'static regex::Regex {
    regex!(r"(?i)^rgb\(\s*(\d{1,3}%?)\s*,\s*(\d{1,3}%?)\s*,\s*(\d{1,3}%?)\s*\)$")
}
