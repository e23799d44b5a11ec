//! Summoner: aetherflow stacks and demi-summon timer

use super::{draw_charges, draw_timer, row_anchor};
use crate::actor::JobId;
use crate::config::GaugeLayout;
use crate::gauge::GaugeState;
use crate::hud::Frame;

pub const JOB_ID: JobId = JobId(27);
pub const LAYOUT: GaugeLayout = GaugeLayout::new(254.0, 13.0, 127.0, 417.0);

pub const MAX_AETHERFLOW: u32 = 2;
pub const DEMI_MS: u32 = 15_000;

const AETHERFLOW_COLOR: u32 = 0xFF78_D2B4;
const DEMI_COLOR: u32 = 0xFF32_8CE6;

pub fn draw(frame: &mut Frame<'_>, layout: &GaugeLayout, gauge: &GaugeState) {
    let GaugeState::Summoner { aetherflow, demi_ms } = *gauge else {
        return;
    };

    let aetherflow_row = row_anchor(frame, layout, 0);
    draw_charges(
        frame,
        aetherflow_row,
        layout.width,
        layout.height,
        MAX_AETHERFLOW,
        u32::from(aetherflow),
        AETHERFLOW_COLOR,
    );

    let demi_row = row_anchor(frame, layout, 1);
    draw_timer(frame, demi_row, layout.width, layout.height, demi_ms, DEMI_MS, DEMI_COLOR);
}
