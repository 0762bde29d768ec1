//! Named colors accepted for button and font color keys.
//!
//! A key is valid when it names one of the colors below (case-insensitive)
//! or is a `#RRGGBB` literal.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// (name, color, is one of the 16 W3C HTML colors)
const NAMED: &[(&str, Rgb, bool)] = &[
    ("black", Rgb(0x00, 0x00, 0x00), true),
    ("blue", Rgb(0x00, 0x00, 0xff), true),
    ("cyan", Rgb(0x00, 0xff, 0xff), false),
    ("darkgray", Rgb(0x40, 0x40, 0x40), false),
    ("gray", Rgb(0x80, 0x80, 0x80), true),
    ("green", Rgb(0x00, 0x80, 0x00), true),
    ("lightgray", Rgb(0xc0, 0xc0, 0xc0), false),
    ("magenta", Rgb(0xff, 0x00, 0xff), false),
    ("orange", Rgb(0xff, 0xc8, 0x00), false),
    ("pink", Rgb(0xff, 0xaf, 0xaf), false),
    ("red", Rgb(0xff, 0x00, 0x00), true),
    ("white", Rgb(0xff, 0xff, 0xff), true),
    ("yellow", Rgb(0xff, 0xff, 0x00), true),
    ("aqua", Rgb(0x00, 0xff, 0xff), true),
    ("fuchsia", Rgb(0xff, 0x00, 0xff), true),
    ("lime", Rgb(0x00, 0xff, 0x00), true),
    ("maroon", Rgb(0x80, 0x00, 0x00), true),
    ("navy", Rgb(0x00, 0x00, 0x80), true),
    ("olive", Rgb(0x80, 0x80, 0x00), true),
    ("purple", Rgb(0x80, 0x00, 0x80), true),
    ("silver", Rgb(0xc0, 0xc0, 0xc0), true),
    ("teal", Rgb(0x00, 0x80, 0x80), true),
];

pub fn lookup(key: &str) -> Option<Rgb> {
    if let Some(hex) = key.strip_prefix('#') {
        return parse_hex(hex);
    }
    NAMED
        .iter()
        .find(|(name, _, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, rgb, _)| *rgb)
}

pub fn is_known(key: &str) -> bool {
    lookup(key).is_some()
}

pub fn is_html_color(key: &str) -> bool {
    NAMED
        .iter()
        .any(|(name, _, html)| *html && name.eq_ignore_ascii_case(key))
}

/// All named colors, in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
    NAMED.iter().map(|(name, _, _)| *name)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_lookup_ignores_case() {
        assert_eq!(lookup("Red"), Some(Rgb(0xff, 0, 0)));
        assert_eq!(lookup("darkgray"), Some(Rgb(0x40, 0x40, 0x40)));
        assert!(lookup("chartreuse").is_none());
    }

    #[test]
    fn test_hex_literals() {
        assert_eq!(lookup("#0A0b0C"), Some(Rgb(0x0a, 0x0b, 0x0c)));
        assert!(lookup("#12345").is_none());
        assert!(lookup("#gg0000").is_none());
    }

    #[test]
    fn test_html_colors() {
        assert!(is_html_color("navy"));
        assert!(!is_html_color("orange"));
        assert_eq!(Rgb(0xff, 0xc8, 0x00).to_hex(), "#ffc800");
    }
}
