//! [`DrawList`] over an SDL2 window canvas
//!
//! SDL has no multicolour rectangles, so gradients are rasterised one
//! vertical line per column. Text uses the procedural bitmap font.

use super::DrawList;
use super::bitmap_font;
use glam::Vec2;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Bitmap font scale; 5x7 glyphs become 10x14
pub const TEXT_SCALE: u32 = 2;

/// Unpacks `0xAABBGGRR`
pub fn to_sdl_color(color: u32) -> Color {
    let [r, g, b, a] = color.to_le_bytes();
    Color::RGBA(r, g, b, a)
}

fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::RGBA(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
        channel(from.a, to.a),
    )
}

/// Integer rectangle covering `min..max`; `None` when it has no area
fn to_rect(min: Vec2, max: Vec2) -> Option<Rect> {
    let width = (max.x - min.x).round();
    let height = (max.y - min.y).round();
    if width < 1.0 || height < 1.0 {
        return None;
    }
    Some(Rect::new(min.x.round() as i32, min.y.round() as i32, width as u32, height as u32))
}

/// One frame's worth of drawing into an SDL2 canvas.
///
/// SDL calls can fail, [`DrawList`] calls can't; the first failure is kept
/// and handed back by [`SdlDrawList::finish`].
pub struct SdlDrawList<'c> {
    canvas: &'c mut Canvas<Window>,
    viewport: Vec2,
    click: Option<Vec2>,
    error: Option<String>,
}

impl<'c> SdlDrawList<'c> {
    /// `click` is where the left mouse button went down this frame, if it did.
    /// The viewport is the canvas' logical size when one is set.
    pub fn new(canvas: &'c mut Canvas<Window>, click: Option<Vec2>) -> Result<Self, String> {
        let (width, height) = match canvas.logical_size() {
            (0, 0) => canvas.output_size()?,
            size => size,
        };
        canvas.set_blend_mode(BlendMode::Blend);

        Ok(SdlDrawList {
            canvas,
            viewport: Vec2::new(width as f32, height as f32),
            click,
            error: None,
        })
    }

    pub fn finish(self) -> Result<(), String> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn record(&mut self, result: Result<(), String>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }
}

impl DrawList for SdlDrawList<'_> {
    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    fn begin_overlay(&mut self, _name: &str) -> bool {
        true
    }

    fn end_overlay(&mut self) {}

    fn add_rect_filled(&mut self, min: Vec2, max: Vec2, color: u32) {
        let Some(rect) = to_rect(min, max) else {
            return;
        };
        self.canvas.set_draw_color(to_sdl_color(color));
        let result = self.canvas.fill_rect(rect);
        self.record(result);
    }

    fn add_rect_filled_multicolor(
        &mut self,
        min: Vec2,
        max: Vec2,
        top_left: u32,
        top_right: u32,
        _bottom_right: u32,
        _bottom_left: u32,
    ) {
        let Some(rect) = to_rect(min, max) else {
            return;
        };

        let left = to_sdl_color(top_left);
        let right = to_sdl_color(top_right);
        let span = (rect.width() - 1).max(1) as f32;

        for column in 0..rect.width() {
            let x = rect.x() + column as i32;
            self.canvas.set_draw_color(lerp_color(left, right, column as f32 / span));
            let result = self.canvas.draw_line((x, rect.top()), (x, rect.bottom() - 1));
            self.record(result);
        }
    }

    fn add_rect(&mut self, min: Vec2, max: Vec2, color: u32) {
        let Some(rect) = to_rect(min, max) else {
            return;
        };
        self.canvas.set_draw_color(to_sdl_color(color));
        let result = self.canvas.draw_rect(rect);
        self.record(result);
    }

    fn add_text(&mut self, pos: Vec2, color: u32, text: &str) {
        let result = bitmap_font::draw_text(
            self.canvas,
            text,
            pos.x.round() as i32,
            pos.y.round() as i32,
            to_sdl_color(color),
            TEXT_SCALE,
        );
        self.record(result);
    }

    fn calc_text_size(&self, text: &str) -> Vec2 {
        let (width, height) = bitmap_font::text_size(text, TEXT_SCALE);
        Vec2::new(width as f32, height as f32)
    }

    fn is_clicked(&mut self, min: Vec2, max: Vec2) -> bool {
        self.click
            .is_some_and(|p| p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_unpacks_abgr() {
        assert_eq!(to_sdl_color(0x8800_0000), Color::RGBA(0, 0, 0, 0x88));
        assert_eq!(to_sdl_color(0xFFE6_CD00), Color::RGBA(0x00, 0xCD, 0xE6, 0xFF));
    }

    #[test]
    fn test_lerp_endpoints() {
        let from = Color::RGBA(0, 100, 200, 255);
        let to = Color::RGBA(100, 0, 0, 255);
        assert_eq!(lerp_color(from, to, 0.0), from);
        assert_eq!(lerp_color(from, to, 1.0), to);
        assert_eq!(lerp_color(from, to, 0.5), Color::RGBA(50, 50, 100, 255));
    }

    #[test]
    fn test_empty_rect_is_skipped() {
        assert!(to_rect(Vec2::new(10.0, 10.0), Vec2::new(10.0, 20.0)).is_none());
        assert_eq!(
            to_rect(Vec2::new(10.0, 10.0), Vec2::new(20.0, 15.0)),
            Some(Rect::new(10, 10, 10, 5))
        );
    }
}
