use alchemy_engine::paint::Color;

/// Named colors shared by the poster and the icons.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    /// `#667eea`
    pub deep_purple: Color,
    /// `#764ba2`
    pub violet: Color,
    /// `#f093fb`
    pub pink: Color,
    pub white: Color,
    /// `#141413`
    pub ink: Color,
}

impl Palette {
    pub const DIGITAL_ALCHEMY: Palette = Palette {
        deep_purple: Color::rgb(102, 126, 234),
        violet: Color::rgb(118, 75, 162),
        pink: Color::rgb(240, 147, 251),
        white: Color::rgb(255, 255, 255),
        ink: Color::rgb(20, 20, 19),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DIGITAL_ALCHEMY
    }
}
