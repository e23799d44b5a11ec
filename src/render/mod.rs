//! Draw-list backend
//!
//! The HUD never talks to a graphics API directly. Everything goes through
//! [`DrawList`], an immediate-mode draw list supplied by the host each frame.
//! Draw order is paint order: later calls land on top.
//!
//! # Backends
//!
//! - The host game's immediate-mode UI (implemented outside this crate)
//! - [`sdl_canvas::SdlDrawList`] - SDL2 canvas, used by the demo binary
//!   (`demo` feature)

#[cfg(feature = "demo")]
pub mod bitmap_font;
#[cfg(feature = "demo")]
pub mod sdl_canvas;

use crate::geometry::BarSpec;
use glam::Vec2;

/// Immediate-mode draw list for one frame.
///
/// Colours are packed `0xAABBGGRR`.
pub trait DrawList {
    /// Size of the main viewport in pixels
    fn viewport_size(&self) -> Vec2;

    /// Opens the full-viewport, input-transparent overlay window.
    ///
    /// Returns `false` when the host decides not to draw it this frame;
    /// [`DrawList::end_overlay`] must then not be called.
    fn begin_overlay(&mut self, name: &str) -> bool;

    fn end_overlay(&mut self);

    fn add_rect_filled(&mut self, min: Vec2, max: Vec2, color: u32);

    /// Rectangle with one colour per corner, clockwise from top-left
    fn add_rect_filled_multicolor(
        &mut self,
        min: Vec2,
        max: Vec2,
        top_left: u32,
        top_right: u32,
        bottom_right: u32,
        bottom_left: u32,
    );

    /// Rectangle outline
    fn add_rect(&mut self, min: Vec2, max: Vec2, color: u32);

    fn add_text(&mut self, pos: Vec2, color: u32, text: &str);

    fn calc_text_size(&self, text: &str) -> Vec2;

    /// Whether the region was clicked this frame
    fn is_clicked(&mut self, min: Vec2, max: Vec2) -> bool;
}

/// Draws a bar plate: background, horizontal gradient fill, border.
pub fn draw_bar(draw: &mut dyn DrawList, bar: &BarSpec) {
    let colors = bar.colors();
    draw.add_rect_filled(bar.origin(), bar.max(), colors.background);
    draw.add_rect_filled_multicolor(
        bar.origin(),
        bar.fill_max(),
        colors.gradient_left,
        colors.gradient_right,
        colors.gradient_right,
        colors.gradient_left,
    );
    draw.add_rect(bar.origin(), bar.max(), colors.border);
}

/// Draws a discrete charge cell; empty cells skip the fill entirely.
pub fn draw_cell(draw: &mut dyn DrawList, cell: &BarSpec) {
    let colors = cell.colors();
    draw.add_rect_filled(cell.origin(), cell.max(), colors.background);
    if cell.fill() > 0.0 {
        draw.add_rect_filled_multicolor(
            cell.origin(),
            cell.fill_max(),
            colors.gradient_left,
            colors.gradient_right,
            colors.gradient_right,
            colors.gradient_left,
        );
    }
    draw.add_rect(cell.origin(), cell.max(), colors.border);
}
