//! Read-only access to the host's combat actors
//!
//! The host game owns the actor table and mutates it continuously. Everything
//! here hands out borrowed [`ActorSnapshot`]s that live for one frame at most:
//! nothing in the HUD keeps an actor across frames.
//!
//! # Architecture
//!
//! - [`GameState`]: the host-side provider (implemented outside this crate)
//! - [`AggressionProbe`]: "could this NPC pull aggro" capability, kept separate
//!   because hosts usually answer it by poking engine memory
//! - [`ActorQuery`]: the lookups the HUD actually needs, layered on top

use crate::gauge::GaugeState;
use serde::{Deserialize, Serialize};

/// Slots in the host object table alternate between combat entities and
/// unrelated companion slots, so only every second slot is scanned.
pub const OBJECT_TABLE_STRIDE: usize = 2;

/// Opaque host object id. `0` means "no actor".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl ActorId {
    pub const NONE: ActorId = ActorId(0);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// Class/job identifier as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub u32);

/// How an actor relates to the local player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affiliation {
    LocalPlayer,
    Player,
    HostileNpc,
    FriendlyNpc,
    NeutralNpc,
}

/// A current/max pair (hit points, mana, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pool {
    pub current: u32,
    pub max: u32,
}

impl Pool {
    pub fn new(current: u32, max: u32) -> Self {
        Pool { current, max }
    }

    /// Fill ratio in [0, 1]. An empty pool (max == 0) reads as 0.
    pub fn ratio(&self) -> f32 {
        crate::geometry::ratio(self.current, self.max)
    }
}

/// Borrowed view of one combat entity, valid for the current frame only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorSnapshot<'a> {
    pub id: ActorId,
    pub name: &'a str,
    pub hp: Pool,
    /// Primary resource (mana). `None` for actors without one.
    pub mp: Option<Pool>,
    pub affiliation: Affiliation,
    pub in_combat: bool,
    /// Only set for players
    pub job: Option<JobId>,
    /// What this actor is targeting, [`ActorId::NONE`] if nothing
    pub target_id: ActorId,
}

/// Engine-specific hostility check for NPCs that are not yet in combat.
pub trait AggressionProbe {
    fn is_aggressive(&self, actor: &ActorSnapshot<'_>) -> bool;
}

/// Host game state, queried once or more per frame.
///
/// Implementations return `None` freely: a missing player, target or slot is
/// normal during zone loads and cutscenes.
pub trait GameState: AggressionProbe {
    fn local_player(&self) -> Option<ActorSnapshot<'_>>;

    /// Explicitly locked target
    fn hard_target(&self) -> Option<ActorSnapshot<'_>>;

    /// Mouse-over / provisional target
    fn soft_target(&self) -> Option<ActorSnapshot<'_>>;

    fn object_table_len(&self) -> usize;

    /// Entity in table slot `index`, `None` for empty or non-entity slots
    fn object_at(&self, index: usize) -> Option<ActorSnapshot<'_>>;

    /// Gauge of the local player's current job
    fn job_gauge(&self, job: JobId) -> Option<GaugeState>;
}

/// Host side of click-to-target
pub trait TargetManager {
    fn set_target(&mut self, id: ActorId);
}

/// Lookups over a [`GameState`] used by the HUD windows
#[derive(Clone, Copy)]
pub struct ActorQuery<'a> {
    game: &'a dyn GameState,
}

impl<'a> ActorQuery<'a> {
    pub fn new(game: &'a dyn GameState) -> Self {
        ActorQuery { game }
    }

    pub fn local_player(&self) -> Option<ActorSnapshot<'a>> {
        self.game.local_player()
    }

    /// Target shown on the target plate: soft target wins over hard target
    pub fn current_target(&self) -> Option<ActorSnapshot<'a>> {
        self.game.soft_target().or_else(|| self.game.hard_target())
    }

    /// Finds a live entity by id, scanning entity slots only.
    ///
    /// The whole table is scanned and the last matching slot wins. Returns
    /// `None` for [`ActorId::NONE`] or when nothing matches this frame.
    pub fn resolve_by_id(&self, id: ActorId) -> Option<ActorSnapshot<'a>> {
        if id.is_none() {
            return None;
        }

        (0..self.game.object_table_len())
            .step_by(OBJECT_TABLE_STRIDE)
            .filter_map(|index| self.game.object_at(index))
            .filter(|actor| actor.id == id)
            .last()
    }

    /// Gauge of `job`, if the host reports one
    pub fn job_gauge(&self, job: JobId) -> Option<GaugeState> {
        self.game.job_gauge(job)
    }
}

impl AggressionProbe for ActorQuery<'_> {
    fn is_aggressive(&self, actor: &ActorSnapshot<'_>) -> bool {
        self.game.is_aggressive(actor)
    }
}
