//! Job gauges
//!
//! Each job module exposes its job id, the default [`GaugeLayout`] of its
//! gauge block and a `draw` function. Gauges stack upwards from the layout
//! anchor in rows of `layout.height`, [`ROW_GAP`] pixels apart.

pub mod bard;
pub mod dancer;
pub mod dark_knight;
pub mod gunbreaker;
pub mod red_mage;
pub mod summoner;
pub mod white_mage;

use super::Frame;
use crate::color::ColorSet;
use crate::config::GaugeLayout;
use crate::gauge::GaugeState;
use crate::geometry::{charge_cells, compute_bar, ratio};
use crate::render::{draw_bar, draw_cell};
use glam::Vec2;

/// Vertical gap between gauge rows
pub const ROW_GAP: f32 = 3.0;
/// Horizontal gap between charge cells
pub const CELL_GAP: f32 = 2.0;

/// Which gauge a window draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    Gunbreaker,
    DarkKnight,
    Bard,
    Dancer,
    RedMage,
    Summoner,
    WhiteMage,
}

impl JobKind {
    pub fn draw_gauge(self, frame: &mut Frame<'_>, layout: &GaugeLayout, gauge: &GaugeState) {
        match self {
            JobKind::Gunbreaker => gunbreaker::draw(frame, layout, gauge),
            JobKind::DarkKnight => dark_knight::draw(frame, layout, gauge),
            JobKind::Bard => bard::draw(frame, layout, gauge),
            JobKind::Dancer => dancer::draw(frame, layout, gauge),
            JobKind::RedMage => red_mage::draw(frame, layout, gauge),
            JobKind::Summoner => summoner::draw(frame, layout, gauge),
            JobKind::WhiteMage => white_mage::draw(frame, layout, gauge),
        }
    }
}

/// Top-left corner of gauge row `row` (row 0 is the bottom row)
pub fn row_anchor(frame: &Frame<'_>, layout: &GaugeLayout, row: u32) -> Vec2 {
    let center = frame.center();
    Vec2::new(
        center.x - layout.x_offset,
        center.y + layout.y_offset - row as f32 * (layout.height + ROW_GAP),
    )
}

/// Row of `cells` discrete charge cells, the first `charges` of them lit
pub fn draw_charges(
    frame: &mut Frame<'_>,
    anchor: Vec2,
    width: f32,
    height: f32,
    cells: u32,
    charges: u32,
    color: u32,
) {
    for cell in charge_cells(anchor, width, height, CELL_GAP, cells, charges) {
        draw_cell(frame.draw, &cell.with_colors(ColorSet::solid(color)));
    }
}

/// Continuous gauge bar filled to `value / max`
pub fn draw_meter(
    frame: &mut Frame<'_>,
    anchor: Vec2,
    width: f32,
    height: f32,
    value: u32,
    max: u32,
    color: u32,
) {
    let bar =
        compute_bar(anchor, width, height, ratio(value, max)).with_colors(ColorSet::solid(color));
    draw_bar(frame.draw, &bar);
}

/// Meter with its value printed in the middle
pub fn draw_labeled_meter(
    frame: &mut Frame<'_>,
    anchor: Vec2,
    width: f32,
    height: f32,
    value: u32,
    max: u32,
    color: u32,
) {
    draw_meter(frame, anchor, width, height, value, max, color);

    let size = frame.format(format_args!("{value}"));
    frame.draw_label(anchor + Vec2::new(width / 2.0 - size.x / 2.0, height / 2.0 - size.y / 2.0));
}

/// Countdown bar; the label shows whole seconds left and is hidden at zero
pub fn draw_timer(
    frame: &mut Frame<'_>,
    anchor: Vec2,
    width: f32,
    height: f32,
    remaining_ms: u32,
    max_ms: u32,
    color: u32,
) {
    draw_meter(frame, anchor, width, height, remaining_ms, max_ms, color);

    if remaining_ms == 0 {
        return;
    }
    let size = frame.format(format_args!("{}", remaining_ms.div_ceil(1000)));
    frame.draw_label(anchor + Vec2::new(width / 2.0 - size.x / 2.0, height / 2.0 - size.y / 2.0));
}
