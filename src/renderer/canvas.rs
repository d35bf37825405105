//! Browser canvas adapter

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::surface::{DrawingSurface, Rgba};

impl DrawingSurface for CanvasRenderingContext2d {
    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        CanvasRenderingContext2d::clear_rect(
            self,
            origin.x as f64,
            origin.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    ) {
        // Only fails for a negative radius, which validated settings rule out
        if let Err(e) = self.arc_with_anticlockwise(
            center.x as f64,
            center.y as f64,
            radius as f64,
            start_angle as f64,
            end_angle as f64,
            anticlockwise,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
    }

    fn move_to(&mut self, point: Vec2) {
        CanvasRenderingContext2d::move_to(self, point.x as f64, point.y as f64);
    }

    fn line_to(&mut self, point: Vec2) {
        CanvasRenderingContext2d::line_to(self, point.x as f64, point.y as f64);
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.set_fill_style_str(&color.to_css());
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.set_stroke_style_str(&color.to_css());
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }
}
