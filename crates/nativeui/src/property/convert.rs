//! String ↔ typed value conversions for property values.

use super::PropertyError;
use crate::handle::Handle;

pub fn parse_int(value: &str) -> Result<i32, PropertyError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| PropertyError::conversion(value, "integer"))
}

/// Integer that must not be negative.
pub fn parse_count(value: &str) -> Result<u32, PropertyError> {
    let parsed = parse_int(value)?;
    u32::try_from(parsed)
        .map_err(|_| PropertyError::InvalidValue(format!("{} must not be negative", parsed)))
}

pub fn parse_float(value: &str) -> Result<f32, PropertyError> {
    let parsed = value
        .trim()
        .parse::<f32>()
        .map_err(|_| PropertyError::conversion(value, "float"))?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(PropertyError::conversion(value, "finite float"))
    }
}

/// Only the literals `true` and `false` are accepted.
pub fn parse_bool(value: &str) -> Result<bool, PropertyError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(PropertyError::conversion(value, "boolean")),
    }
}

pub fn format_bool(value: bool) -> String {
    String::from(if value { "true" } else { "false" })
}

/// Parse `0xRRGGBB`, `#RRGGBB` or the eight-digit ARGB forms.
///
/// Six-digit colors are fully opaque.
pub fn parse_color(value: &str) -> Result<u32, PropertyError> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('#'))
        .ok_or_else(|| PropertyError::conversion(value, "color"))?;

    let raw =
        u32::from_str_radix(digits, 16).map_err(|_| PropertyError::conversion(value, "color"))?;
    match digits.len() {
        6 => Ok(0xFF00_0000 | raw),
        8 => Ok(raw),
        _ => Err(PropertyError::conversion(value, "color")),
    }
}

/// Inverse of [`parse_color`]: opaque colors use the six-digit form.
pub fn format_color(argb: u32) -> String {
    if argb >> 24 == 0xFF {
        format!("0x{:06X}", argb & 0x00FF_FFFF)
    } else {
        format!("0x{:08X}", argb)
    }
}

pub fn parse_handle(value: &str) -> Result<Handle, PropertyError> {
    parse_int(value).map(Handle::from_raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_conversion() {
        assert_eq!(parse_int("42"), Ok(42));
        assert_eq!(parse_int(" -2 "), Ok(-2));
        assert!(matches!(
            parse_int("4.5"),
            Err(PropertyError::Conversion { .. })
        ));
        assert!(parse_count("-1").is_err());
        assert_eq!(parse_count("7"), Ok(7));
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(parse_float("0.25"), Ok(0.25));
        assert!(parse_float("NaN").is_err());
        assert!(parse_float("inf").is_err());
        assert!(parse_float("big").is_err());
    }

    #[test]
    fn test_bool_conversion() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert!(parse_bool("yes").is_err());
        assert_eq!(parse_bool(&format_bool(true)), Ok(true));
    }

    #[test]
    fn test_color_forms() {
        assert_eq!(parse_color("0xFF0000"), Ok(0xFFFF_0000));
        assert_eq!(parse_color("#00ff00"), Ok(0xFF00_FF00));
        assert_eq!(parse_color("0x800000FF"), Ok(0x8000_00FF));
        assert!(parse_color("FF0000").is_err());
        assert!(parse_color("0xFFF").is_err());
        assert!(parse_color("0xGG0000").is_err());
    }

    #[test]
    fn test_color_formatting_reparses() {
        for argb in [0xFF12_3456u32, 0x0000_0000, 0x7F00_FF00] {
            assert_eq!(parse_color(&format_color(argb)), Ok(argb));
        }
        assert_eq!(format_color(0xFFAB_CDEF), "0xABCDEF");
    }
}
