//! Job gauge state as reported by the host
//!
//! One variant per job with a dedicated gauge. Timers are in milliseconds
//! remaining, resources are the raw 0-100 (or stack count) values the host
//! exposes.

/// Bard song currently playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Song {
    None,
    WanderersMinuet,
    MagesBallad,
    ArmysPaeon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeState {
    Gunbreaker {
        ammo: u8,
    },
    DarkKnight {
        blood: u8,
        darkside_ms: u32,
    },
    Bard {
        song: Song,
        song_ms: u32,
        repertoire: u8,
        soul_voice: u8,
    },
    Dancer {
        feathers: u8,
        esprit: u8,
    },
    RedMage {
        white_mana: u8,
        black_mana: u8,
    },
    Summoner {
        aetherflow: u8,
        demi_ms: u32,
    },
    WhiteMage {
        lilies: u8,
        lily_timer_ms: u32,
        blood_lily: u8,
    },
}
