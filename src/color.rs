//! Course color assignment and contrast rules.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fallback background when a course has no assigned color.
pub const SENTINEL_BACKGROUND: &str = "#000000";

/// WCAG relative-luminance cutoff below which white text is readable.
const WHITE_TEXT_LUMINANCE_CUTOFF: f64 = 0.179;

/// Background and contrasting text color for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseColor {
    /// Hex background color, e.g. `"#7030a0"`.
    pub background: String,
    /// Contrasting text color, `"#ffffff"` or `"#000000"`.
    pub text: String,
}

impl CourseColor {
    /// Pairs a background with its computed contrasting text color.
    #[must_use]
    pub fn from_background(background: &str) -> Self {
        Self {
            background: background.to_string(),
            text: text_color_for(background).to_string(),
        }
    }
}

/// Picks a random dark color, rejection-sampling until the result is dark
/// enough for white text. Dark backgrounds keep lesson labels readable.
#[must_use]
pub fn random_dark_color() -> String {
    let mut rng = rand::rng();
    loop {
        let (r, g, b) = (rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>());
        if relative_luminance(r, g, b) <= WHITE_TEXT_LUMINANCE_CUTOFF {
            return format!("#{r:02x}{g:02x}{b:02x}");
        }
    }
}

/// Contrasting text color for a hex background. Unparsable backgrounds
/// are treated as the black sentinel, which takes white text.
#[must_use]
pub fn text_color_for(background: &str) -> &'static str {
    let luminance = parse_hex(background)
        .map_or(0.0, |(r, g, b)| relative_luminance(r, g, b));
    if luminance <= WHITE_TEXT_LUMINANCE_CUTOFF {
        "#ffffff"
    } else {
        "#000000"
    }
}

/// WCAG relative luminance of an sRGB color.
fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Parses `#rgb` or `#rrggbb` into channels.
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let digits = color.strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    match digits.len() {
        3 => {
            let mut channels = digits.chars().filter_map(|c| c.to_digit(16));
            let r = u8::try_from(channels.next()?).ok()?;
            let g = u8::try_from(channels.next()?).ok()?;
            let b = u8::try_from(channels.next()?).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}
