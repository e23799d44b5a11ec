//! Dark Knight: blood gauge and Darkside timer

use super::{draw_labeled_meter, draw_timer, row_anchor};
use crate::actor::JobId;
use crate::config::GaugeLayout;
use crate::gauge::GaugeState;
use crate::hud::Frame;

pub const JOB_ID: JobId = JobId(32);
pub const LAYOUT: GaugeLayout = GaugeLayout::new(254.0, 13.0, 127.0, 417.0);

pub const MAX_BLOOD: u32 = 100;
pub const DARKSIDE_MS: u32 = 60_000;

const BLOOD_COLOR: u32 = 0xFF2A_1EB4;
const DARKSIDE_COLOR: u32 = 0xFF8A_2E7A;

pub fn draw(frame: &mut Frame<'_>, layout: &GaugeLayout, gauge: &GaugeState) {
    let GaugeState::DarkKnight { blood, darkside_ms } = *gauge else {
        return;
    };

    let blood_row = row_anchor(frame, layout, 0);
    draw_labeled_meter(
        frame,
        blood_row,
        layout.width,
        layout.height,
        u32::from(blood),
        MAX_BLOOD,
        BLOOD_COLOR,
    );

    let darkside_row = row_anchor(frame, layout, 1);
    draw_timer(
        frame,
        darkside_row,
        layout.width,
        layout.height,
        darkside_ms,
        DARKSIDE_MS,
        DARKSIDE_COLOR,
    );
}
