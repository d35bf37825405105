//! In-memory drawing surface
//!
//! Records every command instead of drawing. Used by tests and the native
//! headless run.

use glam::Vec2;

use super::surface::{DrawingSurface, Rgba};

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { origin: Vec2, size: Vec2 },
    BeginPath,
    ClosePath,
    Arc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    },
    MoveTo(Vec2),
    LineTo(Vec2),
    FillColor(Rgba),
    StrokeColor(Rgba),
    Fill,
    Stroke,
}

/// Surface that keeps a log of every command
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of filled paths (one per particle disk)
    pub fn fill_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Fill))
    }

    /// Number of stroked paths (one per joint)
    pub fn stroke_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Stroke))
    }

    /// Stroke colors in drawing order
    pub fn stroke_colors(&self) -> Vec<Rgba> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeColor(color) => Some(*color),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::ClearRect { origin, size });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    ) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    fn move_to(&mut self, point: Vec2) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Vec2) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}
