//! Plate colours
//!
//! Colours are packed `u32`s in immediate-mode draw-list order (`0xAABBGGRR`),
//! the same layout the host backend consumes, so they pass straight through
//! to draw calls.

use crate::actor::{ActorSnapshot, Affiliation, AggressionProbe};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const BLACK: u32 = 0xFF00_0000;
pub const WHITE: u32 = 0xFFFF_FFFF;

/// The four colours of a bar plate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSet {
    pub background: u32,
    pub gradient_left: u32,
    pub gradient_right: u32,
    pub border: u32,
}

impl ColorSet {
    /// Fallback whenever a lookup has nothing configured
    pub const NEUTRAL: ColorSet = ColorSet::new(0x8800_0000, 0xFF5A_5A5A, 0xFF7A_7A7A, BLACK);

    pub const fn new(
        background: u32,
        gradient_left: u32,
        gradient_right: u32,
        border: u32,
    ) -> Self {
        ColorSet {
            background,
            gradient_left,
            gradient_right,
            border,
        }
    }

    /// Flat fill: both gradient stops the same colour
    pub const fn solid(fill: u32) -> Self {
        ColorSet::new(0x8800_0000, fill, fill, BLACK)
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        ColorSet::NEUTRAL
    }
}

/// NPC stance used to key the NPC colour map
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpcStance {
    Hostile,
    Neutral,
    Friendly,
}

/// Job-id and NPC-stance colour maps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub jobs: BTreeMap<u32, ColorSet>,
    pub npcs: BTreeMap<NpcStance, ColorSet>,
}

impl ColorConfig {
    /// Colour set for a job; unmapped jobs get [`ColorSet::NEUTRAL`]
    pub fn job(&self, job: Option<crate::actor::JobId>) -> ColorSet {
        job.and_then(|job| self.jobs.get(&job.0))
            .copied()
            .unwrap_or(ColorSet::NEUTRAL)
    }

    pub fn npc(&self, stance: NpcStance) -> ColorSet {
        self.npcs.get(&stance).copied().unwrap_or(ColorSet::NEUTRAL)
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        let jobs = [
            // Tanks
            (19, 0xFFDE_9F33), // PLD
            (21, 0xFF35_34CF), // WAR
            (32, 0xFF9A_2BD1), // DRK
            (37, 0xFF3C_787C), // GNB
            // Healers
            (24, 0xFFD8_E5F0), // WHM
            (28, 0xFF90_6E30), // SCH
            (33, 0xFF3E_C6FF), // AST
            // Melee
            (20, 0xFF1C_A9D6), // MNK
            (22, 0xFFD8_6042), // DRG
            (30, 0xFF7D_3BAF), // NIN
            (34, 0xFF30_6CE4), // SAM
            // Ranged
            (23, 0xFF6C_BC91), // BRD
            (31, 0xFFB4_AE6E), // MCH
            (38, 0xFFA1_ABE2), // DNC
            // Casters
            (25, 0xFFC9_7E9D), // BLM
            (27, 0xFF6B_BD2D), // SMN
            (35, 0xFF86_5BE7), // RDM
        ]
        .into_iter()
        .map(|(job, fill)| (job, ColorSet::solid(fill)))
        .collect();

        let npcs = BTreeMap::from([
            (NpcStance::Hostile, ColorSet::new(0x8800_0000, 0xFF11_11CC, 0xFF33_33EE, BLACK)),
            (NpcStance::Neutral, ColorSet::new(0x8800_0000, 0xFF21_A5D8, 0xFF3D_C2F5, BLACK)),
            (NpcStance::Friendly, ColorSet::new(0x8800_0000, 0xFF3C_9E4B, 0xFF5A_C96B, BLACK)),
        ]);

        ColorConfig { jobs, npcs }
    }
}

/// Picks the plate colours for an actor.
///
/// Never fails: every branch lands on a configured set or on
/// [`ColorSet::NEUTRAL`].
pub fn resolve_colors(
    actor: &ActorSnapshot<'_>,
    probe: &dyn AggressionProbe,
    colors: &ColorConfig,
) -> ColorSet {
    match actor.affiliation {
        Affiliation::LocalPlayer | Affiliation::Player => colors.job(actor.job),
        Affiliation::HostileNpc if actor.in_combat => colors.npc(NpcStance::Hostile),
        // Idle enemies that would never pull aggro read as friendly
        Affiliation::HostileNpc if !probe.is_aggressive(actor) => colors.npc(NpcStance::Friendly),
        _ => colors.npc(NpcStance::Neutral),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{ActorId, JobId, Pool};

    struct Probe(bool);

    impl AggressionProbe for Probe {
        fn is_aggressive(&self, _actor: &ActorSnapshot<'_>) -> bool {
            self.0
        }
    }

    fn actor(
        affiliation: Affiliation,
        in_combat: bool,
        job: Option<u32>,
    ) -> ActorSnapshot<'static> {
        ActorSnapshot {
            id: ActorId(1),
            name: "Someone",
            hp: Pool::new(1, 1),
            mp: None,
            affiliation,
            in_combat,
            job: job.map(JobId),
            target_id: ActorId::NONE,
        }
    }

    #[test]
    fn test_player_uses_job_colors() {
        let colors = ColorConfig::default();
        let player = actor(Affiliation::Player, false, Some(37));
        let resolved = resolve_colors(&player, &Probe(true), &colors);
        assert_eq!(resolved, colors.jobs[&37]);
    }

    #[test]
    fn test_unmapped_job_falls_back_to_neutral() {
        let colors = ColorConfig::default();
        let unmapped = actor(Affiliation::LocalPlayer, false, Some(9999));
        let resolved = resolve_colors(&unmapped, &Probe(true), &colors);
        assert_eq!(resolved, ColorSet::NEUTRAL);

        let jobless = actor(Affiliation::Player, false, None);
        let resolved = resolve_colors(&jobless, &Probe(true), &colors);
        assert_eq!(resolved, ColorSet::NEUTRAL);
    }

    #[test]
    fn test_engaged_enemy_is_hostile() {
        let colors = ColorConfig::default();
        let engaged = actor(Affiliation::HostileNpc, true, None);
        let resolved = resolve_colors(&engaged, &Probe(false), &colors);
        assert_eq!(resolved, colors.npc(NpcStance::Hostile));
    }

    #[test]
    fn test_idle_enemy_uses_aggression_probe() {
        let colors = ColorConfig::default();
        let idle = actor(Affiliation::HostileNpc, false, None);
        let passive = resolve_colors(&idle, &Probe(false), &colors);
        assert_eq!(passive, colors.npc(NpcStance::Friendly));

        let aggressive = resolve_colors(&idle, &Probe(true), &colors);
        assert_eq!(aggressive, colors.npc(NpcStance::Neutral));
    }

    #[test]
    fn test_other_npcs_are_neutral() {
        let colors = ColorConfig::default();
        for affiliation in [Affiliation::FriendlyNpc, Affiliation::NeutralNpc] {
            let npc = actor(affiliation, true, Some(37));
            let resolved = resolve_colors(&npc, &Probe(true), &colors);
            assert_eq!(resolved, colors.npc(NpcStance::Neutral));
        }
    }

    #[test]
    fn test_resolution_is_total_with_empty_config() {
        let colors = ColorConfig {
            jobs: BTreeMap::new(),
            npcs: BTreeMap::new(),
        };
        let affiliations = [
            Affiliation::LocalPlayer,
            Affiliation::Player,
            Affiliation::HostileNpc,
            Affiliation::FriendlyNpc,
            Affiliation::NeutralNpc,
        ];

        for affiliation in affiliations {
            for in_combat in [false, true] {
                for job in [None, Some(0), Some(37), Some(u32::MAX)] {
                    for aggressive in [false, true] {
                        let snapshot = actor(affiliation, in_combat, job);
                        let resolved = resolve_colors(&snapshot, &Probe(aggressive), &colors);
                        assert_eq!(resolved, ColorSet::NEUTRAL);
                    }
                }
            }
        }
    }
}
