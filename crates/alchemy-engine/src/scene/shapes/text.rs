use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::Font;

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: Font,
    pub color: Color,
    /// Top-left of the line box, snapped to whole pixels when drawn.
    pub origin: Vec2,
}

impl DrawList {
    /// Records a single-line text label.
    pub fn push_text(&mut self, z: ZIndex, text: impl Into<String>, font: Font, color: Color, origin: Vec2) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            color,
            origin,
        }));
    }
}
