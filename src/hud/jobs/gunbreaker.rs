//! Gunbreaker: powder gauge (two cartridges)

use super::{draw_charges, row_anchor};
use crate::actor::JobId;
use crate::config::GaugeLayout;
use crate::gauge::GaugeState;
use crate::hud::Frame;

pub const JOB_ID: JobId = JobId(37);

/// Sits where the mana bar would be; Gunbreaker windows don't draw one
pub const LAYOUT: GaugeLayout = GaugeLayout::new(254.0, 13.0, 127.0, 433.0);

pub const MAX_CARTRIDGES: u32 = 2;
const POWDER_COLOR: u32 = 0xFFFE_AD43;

pub fn draw(frame: &mut Frame<'_>, layout: &GaugeLayout, gauge: &GaugeState) {
    let GaugeState::Gunbreaker { ammo } = *gauge else {
        return;
    };

    let anchor = row_anchor(frame, layout, 0);
    draw_charges(
        frame,
        anchor,
        layout.width,
        layout.height,
        MAX_CARTRIDGES,
        u32::from(ammo),
        POWDER_COLOR,
    );
}
