//! The budgeting palette - light and dark color sets.
//!
//! These are the app's domain colors (mint primary, expense red, card
//! surfaces); structural chrome colors come from the gpui-component
//! theme. Values are plain hex constants resolved per theme mode.

use crate::types::ThemeMode;
use gpui::{rgb, Rgba};

/// Resolved colors for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Vibrant mint green - brand/primary accents
    pub primary: Rgba,
    /// Indigo - AI/secondary accents
    pub secondary: Rgba,
    pub background: Rgba,
    /// Card and row surfaces
    pub card: Rgba,
    pub text: Rgba,
    pub text_secondary: Rgba,
    /// Income / positive amounts
    pub success: Rgba,
    /// Expense / negative amounts
    pub error: Rgba,
    pub warning: Rgba,
}

fn light() -> Palette {
    Palette {
        primary: rgb(0x00d09c),
        secondary: rgb(0x5e5ce6),
        background: rgb(0xf8f9fa),
        card: rgb(0xffffff),
        text: rgb(0x1a1d1e),
        text_secondary: rgb(0x6c757d),
        success: rgb(0x00d09c),
        error: rgb(0xff453a),
        warning: rgb(0xffcc00),
    }
}

fn dark() -> Palette {
    Palette {
        primary: rgb(0x00d09c),
        secondary: rgb(0x5e5ce6),
        background: rgb(0x121212),
        card: rgb(0x1e1e1e),
        text: rgb(0xededed),
        text_secondary: rgb(0xa1a1aa),
        success: rgb(0x4ade80),
        error: rgb(0xf87171),
        warning: rgb(0xffb340),
    }
}

/// The palette for the given theme mode.
pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => light(),
        ThemeMode::Dark => dark(),
    }
}
