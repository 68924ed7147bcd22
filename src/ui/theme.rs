//! Color theme definitions
//!
//! Default colors used when providers leave styling unset.

use ratatui::style::Color;

/// Overlay element colors
pub mod overlay {
    use super::*;

    /// Title text without its own foreground
    pub const TITLE: Color = Color::Gray;
    /// Description text without its own foreground
    pub const DESCRIPTION: Color = Color::DarkGray;
    /// Button title without its own foreground
    pub const BUTTON: Color = Color::Cyan;
    /// Template images drawn without a tint
    pub const TEMPLATE_FALLBACK: Color = Color::Gray;
}

/// Host widget colors
pub mod list {
    use super::*;

    /// Block title
    pub const TITLE: Color = Color::Cyan;
    /// Section header
    pub const HEADER: Color = Color::Yellow;
    /// Selected row foreground
    pub const SELECTED_FG: Color = Color::Black;
    /// Selected row background
    pub const SELECTED_BG: Color = Color::Cyan;
}

/// Demo application colors
pub mod demo {
    use super::*;

    /// Tint of the empty state image
    pub const IMAGE_TINT: Color = Color::LightCyan;
}
