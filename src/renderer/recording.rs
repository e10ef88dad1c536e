//! In-memory backend
//!
//! Records draw calls instead of drawing them. Used by tests and by the
//! headless native build.

use super::{RenderBackend, SpriteKey, TextStyle};

/// One recorded draw
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Image { sprite: SpriteKey, x: f32, y: f32 },
    Text { text: String, x: f32, y: f32, style: TextStyle },
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<DrawCall>,
}

impl RecordingBackend {
    /// Drop everything recorded so far
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    /// How many times a sprite was drawn
    pub fn count(&self, sprite: SpriteKey) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Image { sprite: s, .. } if *s == sprite))
            .count()
    }

    /// Text of the most recent text draw
    pub fn last_text(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl RenderBackend for RecordingBackend {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn draw_image(&mut self, sprite: SpriteKey, x: f32, y: f32) {
        self.calls.push(DrawCall::Image { sprite, x, y });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
        });
    }
}
