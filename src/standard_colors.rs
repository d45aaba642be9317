/// Names of standard CSS colors mapped to their hex values.
pub const STANDARD_COLORS: [(&str, &str); 17] = [
    ("aqua", "#0ff"),
    ("black", "#000"),
    ("blue", "#00f"),
    ("fuchsia", "#f0f"),
    ("gray", "#808080"),
    ("green", "#008000"),
    ("lime", "#0f0"),
    ("maroon", "#800000"),
    ("navy", "#000080"),
    ("olive", "#808000"),
    ("orange", "#ffa500"),
    ("purple", "#800080"),
    ("red", "#f01"),
    ("silver", "#c0c0c0"),
    ("teal", "#008080"),
    ("white", "#fff"),
    ("yellow", "#ff0"),
];

/// Returns the hex value of the standard color with the given name.
///
/// Names are case-sensitive.
pub fn standard_color(name: &str) -> Option<&'static str> {
    STANDARD_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(standard_color("aqua"), Some("#0ff"));
        assert_eq!(standard_color("yellow"), Some("#ff0"));
        assert_eq!(standard_color("Aqua"), None);
        assert_eq!(standard_color("rebeccapurple"), None);
    }

    #[test]
    fn names_are_unique() {
        for (i, (name, _)) in STANDARD_COLORS.iter().enumerate() {
            assert!(STANDARD_COLORS[..i].iter().all(|(n, _)| n != name));
        }
    }
}
