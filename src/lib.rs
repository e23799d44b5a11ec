//! Per-job status HUD drawn over a running game client
//!
//! Every frame the host hands the [`overlay::Overlay`] a draw list, a view of
//! the game state and its UI probes. The overlay picks the window for the
//! player's current job, decides whether the HUD shows at all, and draws the
//! health, resource, target and target-of-target plates plus the job gauge.
//!
//! # Architecture
//!
//! - `actor`: borrowed actor snapshots and the host-side traits
//! - `color`: plate colour policy
//! - `geometry`: bar and charge-cell layout math
//! - `visibility`: per-frame show/hide decision
//! - `text`: outlined labels and label formatting
//! - `render`: the [`render::DrawList`] seam (plus an SDL2 backend for the demo)
//! - `hud`: job windows, plates, gauges and the window selector
//! - `config`: serde config with copy-on-write snapshots and JSON persistence
//! - `overlay`: the per-frame entry point

pub mod actor;
pub mod color;
pub mod config;
pub mod gauge;
pub mod geometry;
pub mod hud;
pub mod overlay;
pub mod render;
pub mod text;
pub mod visibility;

#[cfg(test)]
mod testing;

pub use overlay::Overlay;
