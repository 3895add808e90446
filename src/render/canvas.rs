//! Canvas 2D backend (browser only)

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::{RenderSurface, TextAlign};
use crate::config::Color;

impl RenderSurface for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        CanvasRenderingContext2d::clear_rect(self, x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.set_fill_style_str(&color.to_css());
        CanvasRenderingContext2d::fill_rect(self, x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        self.begin_path();
        if let Err(e) = self.arc(cx as f64, cy as f64, r as f64, 0.0, TAU) {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.set_fill_style_str(&color.to_css());
        self.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color, align: TextAlign) {
        self.set_font(font);
        self.set_fill_style_str(&color.to_css());
        self.set_text_align(align.as_str());
        if let Err(e) = CanvasRenderingContext2d::fill_text(self, text, x as f64, y as f64) {
            log::warn!("Canvas fill_text failed: {:?}", e);
        }
    }
}
