//! Configuration data types
//!
//! Everything here is plain serde data. Missing fields in a config file fall
//! back to their defaults, so older files keep loading as fields are added.

use crate::actor::JobId;
use crate::color::ColorConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current config file version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Root of the persisted configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub version: u32,
    /// Never draw the HUD unless manually forced
    pub hide_hud: bool,
    pub colors: ColorConfig,
    pub layout: HudLayout,
    pub resource_bar: ResourceBarLayout,
    pub target_of_target: TargetOfTargetLayout,
    pub labels: LabelLayout,
    /// Per-job gauge geometry overrides, keyed by job id
    pub gauges: BTreeMap<u32, GaugeOverride>,
}

impl Default for HudConfig {
    fn default() -> Self {
        HudConfig {
            version: CURRENT_CONFIG_VERSION,
            hide_hud: false,
            colors: ColorConfig::default(),
            layout: HudLayout::default(),
            resource_bar: ResourceBarLayout::default(),
            target_of_target: TargetOfTargetLayout::default(),
            labels: LabelLayout::default(),
            gauges: BTreeMap::new(),
        }
    }
}

impl HudConfig {
    /// Gauge geometry for `job`: `default` with any configured fields laid over it
    pub fn gauge_layout(&self, job: JobId, default: GaugeLayout) -> GaugeLayout {
        match self.gauges.get(&job.0) {
            Some(custom) => custom.apply(default),
            None => default,
        }
    }
}

/// Geometry shared by the health and target plates.
///
/// Offsets are measured from the viewport centre: the health bar sits
/// `x_offset` left of centre, the target bar `x_offset` right of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudLayout {
    pub x_offset: f32,
    pub y_offset: f32,
    pub bar_width: f32,
    pub bar_height: f32,
}

impl Default for HudLayout {
    fn default() -> Self {
        HudLayout {
            x_offset: 160.0,
            y_offset: 460.0,
            bar_width: 270.0,
            bar_height: 50.0,
        }
    }
}

/// Thin mana bar centred between the plates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceBarLayout {
    pub width: f32,
    pub height: f32,
    /// Distance above the plates' top edge
    pub rise: f32,
    pub background: u32,
    pub gradient_left: u32,
    pub gradient_right: u32,
}

impl Default for ResourceBarLayout {
    fn default() -> Self {
        ResourceBarLayout {
            width: 254.0,
            height: 13.0,
            rise: 27.0,
            background: 0x8800_0000,
            gradient_left: 0xFFE6_CD00,
            gradient_right: 0xFFD8_DF3C,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetOfTargetLayout {
    pub width: f32,
    pub height: f32,
    /// Horizontal gap to the target plate
    pub gap: f32,
}

impl Default for TargetOfTargetLayout {
    fn default() -> Self {
        TargetOfTargetLayout {
            width: 120.0,
            height: 20.0,
            gap: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelLayout {
    /// Distance of label baselines above their bar
    pub rise: f32,
    pub padding: f32,
    pub name_chars: usize,
    pub target_of_target_name_chars: usize,
}

impl Default for LabelLayout {
    fn default() -> Self {
        LabelLayout {
            rise: 22.0,
            padding: 5.0,
            name_chars: 16,
            target_of_target_name_chars: 12,
        }
    }
}

/// Geometry of a job gauge block.
///
/// `x_offset` is measured left of the viewport centre and `y_offset` below
/// it, the same way the plates are anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeLayout {
    pub width: f32,
    pub height: f32,
    pub x_offset: f32,
    pub y_offset: f32,
}

impl GaugeLayout {
    pub const fn new(width: f32, height: f32, x_offset: f32, y_offset: f32) -> Self {
        GaugeLayout {
            width,
            height,
            x_offset,
            y_offset,
        }
    }
}

/// Per-job gauge override as stored in the config file.
///
/// Only the fields present are overridden; the rest come from the job's
/// built-in [`GaugeLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_offset: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_offset: Option<f32>,
}

impl GaugeOverride {
    pub fn apply(&self, base: GaugeLayout) -> GaugeLayout {
        GaugeLayout {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            x_offset: self.x_offset.unwrap_or(base.x_offset),
            y_offset: self.y_offset.unwrap_or(base.y_offset),
        }
    }
}

impl From<GaugeLayout> for GaugeOverride {
    fn from(layout: GaugeLayout) -> Self {
        GaugeOverride {
            width: Some(layout.width),
            height: Some(layout.height),
            x_offset: Some(layout.x_offset),
            y_offset: Some(layout.y_offset),
        }
    }
}
