//! Color definitions
//!
//! Chrome uses the 256-color (indexed) palette for broad terminal
//! compatibility. Swatches are drawn in true color since showing the exact
//! value is the point.

use ratatui::style::Color;

use crate::color::{contrast_color, Rgb};

/// Primary accent color (cyan-like)
pub const PRIMARY: Color = Color::Indexed(73); // Steel blue

/// Secondary/muted text color
pub const MUTED: Color = Color::Indexed(243); // Gray

/// Highlight color (yellow-like)
pub const HIGHLIGHT: Color = Color::Indexed(179); // Light goldenrod

/// Error/danger color
pub const ERROR: Color = Color::Indexed(167); // Indian red

/// Success color
pub const SUCCESS: Color = Color::Indexed(108); // Dark sea green

/// Header/footer background
pub const BAR_BG: Color = Color::Indexed(236); // Dark gray

/// Empty grid cell
pub const EMPTY_CELL: Color = Color::Indexed(234);

/// Disabled button text
pub const DISABLED: Color = Color::Indexed(239);

/// Border color for dialogs
pub const BORDER: Color = Color::Indexed(243); // Gray

/// Border color for focused/active elements
pub const BORDER_FOCUS: Color = Color::Indexed(73); // Steel blue

/// True-color swatch
pub fn swatch(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Readable text color on top of a swatch
pub fn on_swatch(rgb: Rgb) -> Color {
    swatch(contrast_color(rgb).rgb())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_swatch() {
        assert_eq!(on_swatch(Rgb::WHITE), Color::Rgb(0, 0, 0));
        assert_eq!(on_swatch(Rgb::new(0x1a, 0x2f, 0x96)), Color::Rgb(255, 255, 255));
    }
}
