use plotters::style::RGBColor;

use crate::PlotError;

/// Default line and marker color, the first color of matplotlib's cycle.
pub const DEFAULT_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
pub const DEFAULT_SIZE: (u32, u32) = (640, 480);
pub const DEFAULT_MARKER_SIZE: u32 = 3;
pub const DEFAULT_LINE_WIDTH: u32 = 1;

/// Rendering parameters, handed as they are to the series and chart calls.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Color of the line and of the markers.
    pub color: RGBColor,
    /// Marker radius in pixels.
    pub marker_size: u32,
    /// Line width in pixels.
    pub line_width: u32,
    /// Optional caption drawn above the chart.
    pub caption: Option<String>,
    /// Draw axes, ticks and the background grid.
    pub show_mesh: bool,
    /// Write the time value above every marker.
    pub label_points: bool,
    /// Image and window size in pixels, `(width, height)`.
    pub size: (u32, u32),
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            marker_size: DEFAULT_MARKER_SIZE,
            line_width: DEFAULT_LINE_WIDTH,
            caption: None,
            show_mesh: true,
            label_points: false,
            size: DEFAULT_SIZE,
        }
    }
}

/// Parses a `#rrggbb` (or `rrggbb`) hex string.
pub fn parse_color(s: &str) -> Result<RGBColor, PlotError> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(PlotError::Color(s.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| PlotError::Color(s.to_string()))
    };
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

/// Formats a color as `#rrggbb`, the form [`parse_color`] reads.
pub fn to_hex(color: RGBColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(c: RGBColor) -> (u8, u8, u8) {
        (c.0, c.1, c.2)
    }

    #[test]
    fn test_parse_color() {
        assert_eq!((0x1f, 0x77, 0xb4), rgb(parse_color("#1f77b4").unwrap()));
        assert_eq!((255, 0, 16), rgb(parse_color("FF0010").unwrap()));
        assert_eq!((0, 0, 0), rgb(parse_color(" #000000 ").unwrap()));
    }

    #[test]
    fn test_parse_invalid_color() {
        for input in ["", "#", "#fff", "#1f77b4ff", "#gg0000", "blue", "#ééé"] {
            assert!(
                matches!(parse_color(input), Err(PlotError::Color(_))),
                "'{}' must be rejected",
                input
            );
        }
    }

    #[test]
    fn test_to_hex() {
        assert_eq!("#1f77b4", to_hex(DEFAULT_COLOR));
        assert_eq!("#00ff0a", to_hex(RGBColor(0, 255, 10)));
        assert_eq!((12, 200, 7), rgb(parse_color(&to_hex(RGBColor(12, 200, 7))).unwrap()));
    }

    #[test]
    fn test_default_style() {
        let style = PlotStyle::default();
        assert_eq!(rgb(DEFAULT_COLOR), rgb(style.color));
        assert_eq!((640, 480), style.size);
        assert!(style.show_mesh);
        assert!(!style.label_points);
        assert!(style.caption.is_none());
    }
}
