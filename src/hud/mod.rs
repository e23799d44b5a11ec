//! Per-job HUD windows
//!
//! A HUD window is the set of plates and gauges drawn for the player's current
//! job. Every job shares the same health, resource, target and
//! target-of-target plates (`plates`); what differs per job is a gauge block
//! (`jobs`) and its geometry. The [`WindowSelector`] owns the one active
//! window and swaps it when the job changes.
//!
//! # Architecture
//!
//! - `window`: [`HudWindow`], the per-frame entry point
//! - `plates`: plates common to every job
//! - `jobs`: job gauges, dispatched on [`JobKind`]
//! - `selector`: [`JobRegistry`] and [`WindowSelector`]

pub mod jobs;
pub mod plates;
pub mod selector;
pub mod window;

pub use jobs::JobKind;
pub use selector::{JobRegistry, JobWindowDescriptor, Swap, WindowSelector};
pub use window::{HudWindow, WindowId};

use crate::actor::{ActorId, ActorQuery};
use crate::config::HudConfig;
use crate::render::DrawList;
use crate::text;
use glam::Vec2;
use std::fmt::{self, Write};

/// Everything a window needs while drawing one frame
pub struct Frame<'a> {
    pub draw: &'a mut dyn DrawList,
    pub actors: ActorQuery<'a>,
    pub config: &'a HudConfig,
    /// Scratch buffer for label text, owned by the window and reused
    label: &'a mut String,
    retarget: Option<ActorId>,
}

impl<'a> Frame<'a> {
    pub fn new(
        draw: &'a mut dyn DrawList,
        actors: ActorQuery<'a>,
        config: &'a HudConfig,
        label: &'a mut String,
    ) -> Self {
        Frame {
            draw,
            actors,
            config,
            label,
            retarget: None,
        }
    }

    /// Viewport centre, the origin every layout offset is measured from
    pub fn center(&self) -> Vec2 {
        self.draw.viewport_size() / 2.0
    }

    pub fn text_size(&self, text: &str) -> Vec2 {
        self.draw.calc_text_size(text)
    }

    /// Formats into the label buffer and returns the rendered text size
    pub fn format(&mut self, args: fmt::Arguments<'_>) -> Vec2 {
        self.label.clear();
        // Only a failing Display impl can error; never show a partial label
        if self.label.write_fmt(args).is_err() {
            self.label.clear();
        }
        self.draw.calc_text_size(self.label)
    }

    /// Draws the label buffer as an outlined label
    pub fn draw_label(&mut self, pos: Vec2) {
        text::draw_label(self.draw, self.label, pos);
    }

    /// Asks for `id` to become the hard target once the window is done
    pub fn request_target(&mut self, id: ActorId) {
        self.retarget = Some(id);
    }

    pub fn retarget(&self) -> Option<ActorId> {
        self.retarget
    }
}

/// Integer percentage of a fill ratio, as shown on plate labels
pub fn percent(ratio: f32) -> u32 {
    (ratio * 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CHAR_WIDTH, FakeGame, RecordingDrawList};

    /// Writes some text, then fails
    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("half")?;
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_failed_format_leaves_empty_label() {
        let game = FakeGame::default();
        let config = HudConfig::default();
        let mut draw = RecordingDrawList::default();
        let mut label = String::from("stale");

        let mut frame = Frame::new(&mut draw, ActorQuery::new(&game), &config, &mut label);
        let size = frame.format(format_args!("{}", Broken));
        frame.draw_label(Vec2::ZERO);

        assert_eq!(size.x, 0.0);
        assert!(draw.texts().iter().all(|call| call.text.is_empty()));
    }

    #[test]
    fn test_format_reuses_buffer() {
        let game = FakeGame::default();
        let config = HudConfig::default();
        let mut draw = RecordingDrawList::default();
        let mut label = String::new();

        let mut frame = Frame::new(&mut draw, ActorQuery::new(&game), &config, &mut label);
        frame.format(format_args!("{}", 12345));
        let size = frame.format(format_args!("{:>3}", 7));

        assert_eq!(size.x, 3.0 * CHAR_WIDTH);
        assert_eq!(label, "  7");
    }
}
