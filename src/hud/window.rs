//! The HUD window for one job
//!
//! A window owns nothing but its identity, the manual override flag and a
//! label buffer reused across frames. Everything it draws is read fresh
//! from the game state and config each frame.

use super::selector::JobWindowDescriptor;
use super::{Frame, plates};
use crate::actor::{ActorId, ActorQuery, GameState, JobId};
use crate::config::HudConfig;
use crate::render::DrawList;
use crate::visibility::{UiProbe, VisibilityInputs, compute_visibility};

/// Name of the host overlay surface the window draws into
pub const OVERLAY_NAME: &str = "job_hud";

/// Identifies one window instance; a new id is handed out on every swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

#[derive(Debug)]
pub struct HudWindow {
    id: WindowId,
    descriptor: &'static JobWindowDescriptor,
    visible: bool,
    label: String,
}

impl HudWindow {
    pub fn new(id: WindowId, descriptor: &'static JobWindowDescriptor, visible: bool) -> Self {
        HudWindow {
            id,
            descriptor,
            visible,
            label: String::with_capacity(32),
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn job(&self) -> JobId {
        self.descriptor.job
    }

    pub fn descriptor(&self) -> &'static JobWindowDescriptor {
        self.descriptor
    }

    /// Manual override: a visible window draws regardless of the auto-hide rules
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Draws one frame of the HUD.
    ///
    /// Order: health, resource, job gauge, target, target of target. Returns
    /// the actor a plate click asked to target; the caller hands it to the
    /// host target manager.
    pub fn draw(
        &mut self,
        draw: &mut dyn DrawList,
        game: &dyn GameState,
        ui: &dyn UiProbe,
        config: &HudConfig,
    ) -> Option<ActorId> {
        let actors = ActorQuery::new(game);
        let player = actors.local_player();

        let inputs = VisibilityInputs::probe(self.visible, config.hide_hud, player.is_some(), ui);
        if !compute_visibility(&inputs).renders() {
            return None;
        }
        // Forced visible still has nothing to show without a player
        let player = player?;

        if !draw.begin_overlay(OVERLAY_NAME) {
            return None;
        }

        let descriptor = self.descriptor;
        let mut frame = Frame::new(draw, actors, config, &mut self.label);

        plates::draw_health_bar(&mut frame, &player);
        if descriptor.resource_bar {
            plates::draw_resource_bar(&mut frame, &player);
        }

        if let Some(gauge) = frame.actors.job_gauge(descriptor.job) {
            let layout = config.gauge_layout(descriptor.job, descriptor.gauge);
            descriptor.kind.draw_gauge(&mut frame, &layout, &gauge);
        }

        plates::draw_target_bar(&mut frame);

        frame.draw.end_overlay();
        frame.retarget()
    }
}
