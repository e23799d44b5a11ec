//! White Mage: healing lilies, lily timer and the blood lily

use super::{draw_charges, draw_timer, row_anchor};
use crate::actor::JobId;
use crate::config::GaugeLayout;
use crate::gauge::GaugeState;
use crate::hud::Frame;

pub const JOB_ID: JobId = JobId(24);
pub const LAYOUT: GaugeLayout = GaugeLayout::new(254.0, 13.0, 127.0, 417.0);

pub const MAX_LILIES: u32 = 3;
pub const MAX_BLOOD_LILY: u32 = 3;
pub const LILY_MS: u32 = 30_000;

const LILY_COLOR: u32 = 0xFFE6_C896;
const LILY_TIMER_COLOR: u32 = 0xFFB4_9664;
const BLOOD_LILY_COLOR: u32 = 0xFF3C_28C8;

pub fn draw(frame: &mut Frame<'_>, layout: &GaugeLayout, gauge: &GaugeState) {
    let GaugeState::WhiteMage {
        lilies,
        lily_timer_ms,
        blood_lily,
    } = *gauge
    else {
        return;
    };

    let lily_row = row_anchor(frame, layout, 0);
    draw_charges(
        frame,
        lily_row,
        layout.width,
        layout.height,
        MAX_LILIES,
        u32::from(lilies),
        LILY_COLOR,
    );

    let timer_row = row_anchor(frame, layout, 1);
    draw_timer(
        frame,
        timer_row,
        layout.width,
        layout.height,
        lily_timer_ms,
        LILY_MS,
        LILY_TIMER_COLOR,
    );

    let blood_row = row_anchor(frame, layout, 2);
    draw_charges(
        frame,
        blood_row,
        layout.width,
        layout.height,
        MAX_BLOOD_LILY,
        u32::from(blood_lily),
        BLOOD_LILY_COLOR,
    );
}
