use std::fmt::Display;
use std::ops::Range;
use std::str::FromStr;

use image::{Rgb, Rgba};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RGBColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RGBColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        RGBColor { red, green, blue }
    }
}

/// The placeholder blue, `#58A6FF`.
impl Default for RGBColor {
    fn default() -> Self {
        RGBColor::new(88, 166, 255)
    }
}

impl From<RGBColor> for Rgb<u8> {
    fn from(value: RGBColor) -> Self {
        Rgb([value.red, value.green, value.blue])
    }
}

impl From<RGBColor> for Rgba<u8> {
    fn from(value: RGBColor) -> Self {
        Rgba([value.red, value.green, value.blue, u8::MAX])
    }
}

impl Display for RGBColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(String);

impl Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' is not a color. Expected '#RRGGBB', 'RRGGBB' or 'R,G,B'.",
            self.0
        )
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for RGBColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = if trimmed.contains(',') {
            parse_decimal_triple(trimmed)
        } else {
            parse_hex_triple(trimmed.strip_prefix('#').unwrap_or(trimmed))
        };
        parsed.ok_or_else(|| ColorParseError(s.to_owned()))
    }
}

fn parse_hex_triple(hex: &str) -> Option<RGBColor> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let component = |range: Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(RGBColor::new(
        component(0..2)?,
        component(2..4)?,
        component(4..6)?,
    ))
}

fn parse_decimal_triple(triple: &str) -> Option<RGBColor> {
    let mut components = triple.split(',').map(|c| c.trim().parse::<u8>());
    let red = components.next()?.ok()?;
    let green = components.next()?.ok()?;
    let blue = components.next()?.ok()?;
    if components.next().is_some() {
        return None;
    }
    Some(RGBColor::new(red, green, blue))
}
