//! Frame entry point
//!
//! The host calls [`Overlay::draw_frame`] once per rendered frame. It picks
//! the window for the player's job, takes a config snapshot, draws and then
//! forwards any plate click to the host target manager.
//!
//! # Example
//!
//! ```ignore
//! let mut overlay = Overlay::new(ConfigStore::open(default_path()?)?);
//! loop {
//!     overlay.draw_frame(&mut draw_list, &game, &ui, &mut targets);
//! }
//! overlay.shutdown();
//! ```

use crate::actor::{GameState, TargetManager};
use crate::config::{ConfigError, ConfigStore};
use crate::hud::{Swap, WindowSelector};
use crate::render::DrawList;
use crate::visibility::UiProbe;
use log::{debug, info};

pub struct Overlay {
    selector: WindowSelector,
    config: ConfigStore,
    manual_override: bool,
}

impl Overlay {
    pub fn new(config: ConfigStore) -> Self {
        Overlay {
            selector: WindowSelector::default(),
            config,
            manual_override: false,
        }
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn selector(&self) -> &WindowSelector {
        &self.selector
    }

    pub fn manual_override(&self) -> bool {
        self.manual_override
    }

    pub fn draw_frame(
        &mut self,
        draw: &mut dyn DrawList,
        game: &dyn GameState,
        ui: &dyn UiProbe,
        targets: &mut dyn TargetManager,
    ) {
        let job = game.local_player().and_then(|player| player.job);
        if let Swap::Replaced { evicted: Some(old) } = self.selector.on_frame(job) {
            debug!("Dropped HUD window {}", old.id().0);
        }

        let Some(window) = self.selector.active_mut() else {
            return;
        };

        let config = self.config.snapshot();
        if let Some(target) = window.draw(draw, game, ui, &config) {
            targets.set_target(target);
        }
    }

    /// Flips the manual override; applies to the active window and any
    /// window created after a job change. Returns the new state.
    pub fn toggle_manual_override(&mut self) -> bool {
        self.manual_override = !self.manual_override;
        self.selector.set_initial_visibility(self.manual_override);
        if let Some(window) = self.selector.active_mut() {
            window.set_visible(self.manual_override);
        }

        info!(
            "HUD manual override {}",
            if self.manual_override { "on" } else { "off" }
        );
        self.manual_override
    }

    /// Sets the "hide entirely" flag and persists the config
    pub fn set_hide_hud(&self, hide: bool) -> Result<(), ConfigError> {
        self.config.update(|config| config.hide_hud = hide);
        self.config.save()?;
        Ok(())
    }

    pub fn shutdown(&mut self) {
        self.selector.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{ActorId, JobId};
    use crate::config::{HudConfig, load_or_default};
    use crate::hud::HudWindow;
    use crate::testing::{FakeActor, FakeGame, FakeUi, RecordingDrawList, RecordingTargets};
    use glam::Vec2;

    fn frame(
        overlay: &mut Overlay,
        game: &FakeGame,
        draw: &mut RecordingDrawList,
    ) -> RecordingTargets {
        let mut targets = RecordingTargets::default();
        overlay.draw_frame(draw, game, &FakeUi::default(), &mut targets);
        targets
    }

    #[test]
    fn test_click_reaches_target_manager_same_frame() {
        let mut game = FakeGame::with_player(FakeActor::local_player(1, "Tank", 37));
        game.hard_target = Some(FakeActor::hostile(5, "Dummy").targeting(7));
        game.put(4, FakeActor::player(7, "Healer", 24));

        let mut overlay = Overlay::new(ConfigStore::default());
        let mut draw = RecordingDrawList::default();
        // target-of-target plate: x 960 + 160 + 270 + 2, y 1000, 120 x 20
        draw.click(Vec2::new(1400.0, 1010.0));

        let targets = frame(&mut overlay, &game, &mut draw);
        assert_eq!(targets.requests, vec![ActorId(7)]);
    }

    #[test]
    fn test_window_follows_job() {
        let mut game = FakeGame::with_player(FakeActor::local_player(1, "Tank", 37));
        let mut overlay = Overlay::new(ConfigStore::default());

        frame(&mut overlay, &game, &mut RecordingDrawList::default());
        assert_eq!(overlay.selector().active().map(HudWindow::job), Some(JobId(37)));

        game.player = Some(FakeActor::local_player(1, "Tank", 24));
        frame(&mut overlay, &game, &mut RecordingDrawList::default());
        assert_eq!(overlay.selector().active().map(HudWindow::job), Some(JobId(24)));

        // Unsupported job: keep drawing the white mage window
        game.player = Some(FakeActor::local_player(1, "Tank", 5));
        let mut draw = RecordingDrawList::default();
        frame(&mut overlay, &game, &mut draw);
        assert_eq!(overlay.selector().active().map(HudWindow::job), Some(JobId(24)));
        assert!(!draw.commands.is_empty());
    }

    #[test]
    fn test_no_player_no_window() {
        let mut overlay = Overlay::new(ConfigStore::default());
        let mut draw = RecordingDrawList::default();

        frame(&mut overlay, &FakeGame::default(), &mut draw);

        assert!(overlay.selector().active().is_none());
        assert!(draw.commands.is_empty());
    }

    #[test]
    fn test_manual_override_survives_job_change() {
        let mut game = FakeGame::with_player(FakeActor::local_player(1, "Tank", 37));
        let mut overlay = Overlay::new(ConfigStore::in_memory(HudConfig {
            hide_hud: true,
            ..HudConfig::default()
        }));

        let mut draw = RecordingDrawList::default();
        frame(&mut overlay, &game, &mut draw);
        assert!(draw.commands.is_empty());

        assert!(overlay.toggle_manual_override());
        game.player = Some(FakeActor::local_player(1, "Tank", 38));
        let mut draw = RecordingDrawList::default();
        frame(&mut overlay, &game, &mut draw);
        assert!(!draw.commands.is_empty());

        assert!(!overlay.toggle_manual_override());
        let mut draw = RecordingDrawList::default();
        frame(&mut overlay, &game, &mut draw);
        assert!(draw.commands.is_empty());
    }

    #[test]
    fn test_hide_hud_is_persisted() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.json");
        let overlay = Overlay::new(ConfigStore::open(&path).expect("open"));

        overlay.set_hide_hud(true).expect("save");

        assert!(overlay.config().snapshot().hide_hud);
        assert!(load_or_default(&path).expect("reload").hide_hud);
    }

    #[test]
    fn test_shutdown_clears_window() {
        let game = FakeGame::with_player(FakeActor::local_player(1, "Tank", 37));
        let mut overlay = Overlay::new(ConfigStore::default());
        frame(&mut overlay, &game, &mut RecordingDrawList::default());

        overlay.shutdown();

        assert!(overlay.selector().active().is_none());
    }
}
