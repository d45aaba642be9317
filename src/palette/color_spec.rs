use crate::{parse_color, rgb_to_hex, ColorError, Rgb};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An available color of a palette.
///
/// The RGB value is always the parsed form of the source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawColorSpec")
)]
pub struct ColorSpec {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    name: Option<String>,
    /// Color as given, e.g. `#FF0`, or formatted as `#rrggbb` if given as RGB.
    source: String,
    rgb: Rgb,
}

impl ColorSpec {
    /// Parses the given text and keeps it verbatim as source.
    pub fn parse(source: impl Into<String>) -> Result<Self, ColorError> {
        let source = source.into();
        let rgb = parse_color(source.as_str())?;
        Ok(Self {
            name: None,
            source,
            rgb,
        })
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            name: None,
            source: rgb_to_hex(rgb),
            rgb,
        }
    }

    /// Creates a palette color from the given value.
    ///
    /// Existing color specs are taken as they are, the given name is ignored for them.
    pub fn create(value: impl Into<ColorValue>, name: Option<String>) -> Result<Self, ColorError> {
        let spec = match value.into() {
            ColorValue::Text(text) => Self::parse(text)?,
            ColorValue::Rgb(rgb) => Self::from_rgb(rgb),
            ColorValue::Spec(spec) => return Ok(spec),
        };
        Ok(spec.with_name(name))
    }

    /// An empty name counts as no name.
    pub fn with_name(self, name: Option<String>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()),
            ..self
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }
}

/// A palette color as given by the caller.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ColorValue {
    /// Anything [`parse_color`] understands.
    Text(String),
    Rgb(Rgb),
    /// An already built palette color, e.g. when combining palettes.
    Spec(ColorSpec),
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ColorValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Rgb> for ColorValue {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<(u8, u8, u8)> for ColorValue {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::Rgb(value.into())
    }
}

impl From<ColorSpec> for ColorValue {
    fn from(value: ColorSpec) -> Self {
        Self::Spec(value)
    }
}

impl From<&ColorSpec> for ColorValue {
    fn from(value: &ColorSpec) -> Self {
        Self::Spec(value.clone())
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawColorSpec {
    name: Option<String>,
    source: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawColorSpec> for ColorSpec {
    type Error = ColorError;

    fn try_from(raw: RawColorSpec) -> Result<Self, Self::Error> {
        Ok(ColorSpec::parse(raw.source)?.with_name(raw.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text() {
        let spec = ColorSpec::parse("#800").unwrap();
        assert_eq!(spec.name(), None);
        assert_eq!(spec.source(), "#800");
        assert_eq!(spec.rgb(), Rgb::new(136, 0, 0));
    }

    #[test]
    fn from_rgb() {
        let spec = ColorSpec::create(Rgb::new(255, 255, 51), Some("light yellow".into())).unwrap();
        assert_eq!(spec.name(), Some("light yellow"));
        assert_eq!(spec.source(), "#ffff33");
        assert_eq!(spec.rgb(), Rgb::new(255, 255, 51));
    }

    #[test]
    fn rewrapping_keeps_identity() {
        let original = ColorSpec::create("#800", Some("maroon".into())).unwrap();
        assert_eq!(ColorSpec::create(&original, None), Ok(original.clone()));
        assert_eq!(
            ColorSpec::create(&original, Some("other".into())),
            Ok(original)
        );
        let unnamed = ColorSpec::parse("fff").unwrap();
        let rewrapped = ColorSpec::create(unnamed.clone(), Some("white".into())).unwrap();
        assert_eq!(rewrapped.name(), None);
        assert_eq!(rewrapped, unnamed);
    }

    #[test]
    fn empty_name_means_unnamed() {
        let spec = ColorSpec::create("#fff", Some(String::new())).unwrap();
        assert_eq!(spec.name(), None);
        assert_eq!(ColorSpec::parse("#000").unwrap().with_name(Some("".into())).name(), None);
    }

    #[test]
    fn invalid() {
        assert_eq!(
            ColorSpec::create("foo", Some("invalid".into())),
            Err(ColorError::invalid("foo"))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() {
        let spec = ColorSpec::create("#800", Some("maroon".into())).unwrap();
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "maroon",
                "source": "#800",
                "rgb": { "r": 136, "g": 0, "b": 0 }
            })
        );
        let parsed: ColorSpec =
            serde_json::from_str(r##"{ "name": "maroon", "source": "#800" }"##).unwrap();
        assert_eq!(parsed, spec);
        assert!(serde_json::from_str::<ColorSpec>(r#"{ "source": "foo" }"#).is_err());
    }
}
