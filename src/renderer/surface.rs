//! Abstract 2D drawing surface
//!
//! Mirrors the subset of the canvas 2D context the renderer needs. Coordinates
//! are surface pixels, origin top-left, x right, y down.

use glam::Vec2;

/// 8-bit RGB color with a float alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// Opaque color from an RGB triple
    pub const fn opaque(rgb: [u8; 3]) -> Self {
        Self::with_alpha(rgb, 1.0)
    }

    /// Color from an RGB triple with alpha `a`
    pub const fn with_alpha(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    /// CSS color string, e.g. `rgba(255, 255, 255, 0.6)`
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Drawing commands a surface must support
pub trait DrawingSurface {
    /// Erase a rectangle back to the background
    fn clear_rect(&mut self, origin: Vec2, size: Vec2);
    /// Start a new path
    fn begin_path(&mut self);
    /// Close the current subpath back to its start
    fn close_path(&mut self);
    /// Add a circular arc to the current path (angles in radians)
    fn arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    );
    /// Start a subpath at `point`
    fn move_to(&mut self, point: Vec2);
    /// Straight segment from the current point to `point`
    fn line_to(&mut self, point: Vec2);
    /// Color used by [`DrawingSurface::fill`]
    fn set_fill_color(&mut self, color: Rgba);
    /// Color used by [`DrawingSurface::stroke`]
    fn set_stroke_color(&mut self, color: Rgba);
    /// Fill the current path
    fn fill(&mut self);
    /// Stroke the current path
    fn stroke(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_css() {
        assert_eq!(Rgba::opaque([255, 255, 255]).to_css(), "rgba(255, 255, 255, 1)");
        assert_eq!(
            Rgba::with_alpha([10, 20, 30], 0.6).to_css(),
            "rgba(10, 20, 30, 0.6)"
        );
    }
}
