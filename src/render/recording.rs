//! In-memory surface that records draw calls instead of rasterizing them

use super::{RenderSurface, TextAlign};
use crate::config::Color;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    FillCircle {
        cx: f32,
        cy: f32,
        r: f32,
        color: Color,
    },
    FillText {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: Color,
        align: TextAlign,
    },
}

/// Records every call since the last `clear_rect`, like a canvas would show.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls of the current frame, oldest first
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames started (calls to `clear_rect`)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Text currently on screen
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::ClearRect { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle { cx, cy, r, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color, align: TextAlign) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color,
            align,
        });
    }
}
