//! Red Mage: white and black mana, side by side

use super::{CELL_GAP, draw_labeled_meter, row_anchor};
use crate::actor::JobId;
use crate::config::GaugeLayout;
use crate::gauge::GaugeState;
use crate::hud::Frame;
use glam::Vec2;

pub const JOB_ID: JobId = JobId(35);
pub const LAYOUT: GaugeLayout = GaugeLayout::new(254.0, 13.0, 127.0, 417.0);

pub const MAX_MANA: u32 = 100;

const WHITE_MANA_COLOR: u32 = 0xFFE6_E6DC;
const BLACK_MANA_COLOR: u32 = 0xFF96_4B3C;

pub fn draw(frame: &mut Frame<'_>, layout: &GaugeLayout, gauge: &GaugeState) {
    let GaugeState::RedMage { white_mana, black_mana } = *gauge else {
        return;
    };

    let anchor = row_anchor(frame, layout, 0);
    let half = ((layout.width - CELL_GAP) / 2.0).floor();

    draw_labeled_meter(
        frame,
        anchor,
        half,
        layout.height,
        u32::from(white_mana),
        MAX_MANA,
        WHITE_MANA_COLOR,
    );
    draw_labeled_meter(
        frame,
        anchor + Vec2::new(half + CELL_GAP, 0.0),
        half,
        layout.height,
        u32::from(black_mana),
        MAX_MANA,
        BLACK_MANA_COLOR,
    );
}
