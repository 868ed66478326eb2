/// An `xcolor` RGB triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// `\definecolor{name}{RGB}{r,g,b}`
    pub fn define(&self, name: &str) -> String {
        format!(r"\definecolor{{{name}}}{{RGB}}{{{},{},{}}}", self.r, self.g, self.b)
    }
}

/// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb` into an [`Rgb`].
///
/// Anything else yields black; a bad colour never aborts generation.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or(Rgb::BLACK)
}

/// Like [`hex_to_rgb`] but reports whether the input was usable.
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    let expanded: String = if digits.chars().count() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    if expanded.len() != 6 || !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    // u8 parsing bounds each channel to 0..=255.
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_full_form() {
        assert_eq!(hex_to_rgb("#1f6feb"), Rgb { r: 31, g: 111, b: 235 });
        assert_eq!(hex_to_rgb("FFFFFF"), Rgb { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn test_hex_to_rgb_shorthand_expands() {
        assert_eq!(hex_to_rgb("abc"), hex_to_rgb("aabbcc"));
        assert_eq!(hex_to_rgb("#fff"), Rgb { r: 255, g: 255, b: 255 });
        // three hex letters are shorthand, even when they spell a word
        assert_eq!(hex_to_rgb("bad"), Rgb { r: 0xbb, g: 0xaa, b: 0xdd });
    }

    #[test]
    fn test_invalid_hex_is_black() {
        assert_eq!(hex_to_rgb("bad!"), Rgb::BLACK);
        assert_eq!(hex_to_rgb("xyz"), Rgb::BLACK);
        assert_eq!(hex_to_rgb(""), Rgb::BLACK);
        assert_eq!(hex_to_rgb("#12345"), Rgb::BLACK);
        assert_eq!(hex_to_rgb("#gggggg"), Rgb::BLACK);
        assert_eq!(hex_to_rgb("ééé"), Rgb::BLACK);
        assert_eq!(hex_to_rgb("#1f6feb00"), Rgb::BLACK);
    }

    #[test]
    fn test_define_color() {
        let rgb = Rgb { r: 31, g: 111, b: 235 };
        assert_eq!(
            rgb.define("primarycolor"),
            r"\definecolor{primarycolor}{RGB}{31,111,235}"
        );
    }
}
