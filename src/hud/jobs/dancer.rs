//! Dancer: fourfold feathers and esprit

use super::{draw_charges, draw_labeled_meter, row_anchor};
use crate::actor::JobId;
use crate::config::GaugeLayout;
use crate::gauge::GaugeState;
use crate::hud::Frame;

pub const JOB_ID: JobId = JobId(38);
pub const LAYOUT: GaugeLayout = GaugeLayout::new(254.0, 13.0, 127.0, 417.0);

pub const MAX_FEATHERS: u32 = 4;
pub const MAX_ESPRIT: u32 = 100;

const FEATHER_COLOR: u32 = 0xFF9E_D25A;
const ESPRIT_COLOR: u32 = 0xFF8C_78E6;

pub fn draw(frame: &mut Frame<'_>, layout: &GaugeLayout, gauge: &GaugeState) {
    let GaugeState::Dancer { feathers, esprit } = *gauge else {
        return;
    };

    let feather_row = row_anchor(frame, layout, 0);
    draw_charges(
        frame,
        feather_row,
        layout.width,
        layout.height,
        MAX_FEATHERS,
        u32::from(feathers),
        FEATHER_COLOR,
    );

    let esprit_row = row_anchor(frame, layout, 1);
    draw_labeled_meter(
        frame,
        esprit_row,
        layout.width,
        layout.height,
        u32::from(esprit),
        MAX_ESPRIT,
        ESPRIT_COLOR,
    );
}
