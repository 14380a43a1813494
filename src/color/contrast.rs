//! WCAG foreground selection for swatches

use super::Rgb;

/// WCAG AA minimum contrast ratio for normal text
pub const AA_RATIO: f64 = 4.5;

/// Legible foreground for a swatch background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foreground {
    Black,
    White,
}

impl Foreground {
    pub fn hex(&self) -> &'static str {
        match self {
            Foreground::Black => "#000000",
            Foreground::White => "#FFFFFF",
        }
    }

    pub fn rgb(&self) -> Rgb {
        match self {
            Foreground::Black => Rgb::BLACK,
            Foreground::White => Rgb::WHITE,
        }
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in [0, 1]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Contrast ratio between two colors, in [1, 21]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Pick black or white text for `background`.
///
/// White wins whenever it meets AA, then black if it does; otherwise the
/// one with the higher ratio.
pub fn contrast_color(background: Rgb) -> Foreground {
    let white = contrast_ratio(background, Rgb::WHITE);
    if white >= AA_RATIO {
        return Foreground::White;
    }

    let black = contrast_ratio(background, Rgb::BLACK);
    if black >= AA_RATIO {
        return Foreground::Black;
    }

    if white > black {
        Foreground::White
    } else {
        Foreground::Black
    }
}
