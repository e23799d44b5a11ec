//! Bard: song timer, repertoire and soul voice

use super::{draw_charges, draw_labeled_meter, draw_timer, row_anchor};
use crate::actor::JobId;
use crate::config::GaugeLayout;
use crate::gauge::{GaugeState, Song};
use crate::hud::Frame;

pub const JOB_ID: JobId = JobId(23);
pub const LAYOUT: GaugeLayout = GaugeLayout::new(254.0, 13.0, 127.0, 417.0);

pub const SONG_MS: u32 = 45_000;
pub const MAX_SOUL_VOICE: u32 = 100;

const SOUL_VOICE_COLOR: u32 = 0xFF3C_C8E6;
const REPERTOIRE_COLOR: u32 = 0xFFE6_D25A;

fn song_color(song: Song) -> u32 {
    match song {
        Song::None => 0xFF5A_5A5A,
        Song::WanderersMinuet => 0xFF5A_C86E,
        Song::MagesBallad => 0xFFC8_6EB4,
        Song::ArmysPaeon => 0xFF3C_A0E6,
    }
}

/// Army's Paeon stacks to four, the other songs to three
pub fn repertoire_cells(song: Song) -> u32 {
    match song {
        Song::ArmysPaeon => 4,
        _ => 3,
    }
}

pub fn draw(frame: &mut Frame<'_>, layout: &GaugeLayout, gauge: &GaugeState) {
    let GaugeState::Bard {
        song,
        song_ms,
        repertoire,
        soul_voice,
    } = *gauge
    else {
        return;
    };

    let song_row = row_anchor(frame, layout, 0);
    draw_timer(
        frame,
        song_row,
        layout.width,
        layout.height,
        song_ms,
        SONG_MS,
        song_color(song),
    );

    let repertoire_row = row_anchor(frame, layout, 1);
    draw_charges(
        frame,
        repertoire_row,
        layout.width,
        layout.height,
        repertoire_cells(song),
        u32::from(repertoire),
        REPERTOIRE_COLOR,
    );

    let soul_voice_row = row_anchor(frame, layout, 2);
    draw_labeled_meter(
        frame,
        soul_voice_row,
        layout.width,
        layout.height,
        u32::from(soul_voice),
        MAX_SOUL_VOICE,
        SOUL_VOICE_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::JobKind;
    use crate::testing::{DrawCmd, RecordingDrawList, render_gauge};

    fn draw_gauge(song: Song, song_ms: u32, repertoire: u8, soul_voice: u8) -> RecordingDrawList {
        render_gauge(
            JobKind::Bard,
            &LAYOUT,
            GaugeState::Bard {
                song,
                song_ms,
                repertoire,
                soul_voice,
            },
        )
    }

    fn cell_frames(draw: &RecordingDrawList) -> usize {
        // Repertoire is the only row drawn at y = 941
        draw.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Rect { min, .. } if min.y == 941.0))
            .count()
    }

    #[test]
    fn test_paeon_has_four_repertoire_cells() {
        assert_eq!(cell_frames(&draw_gauge(Song::ArmysPaeon, 10_000, 2, 0)), 4);
        assert_eq!(cell_frames(&draw_gauge(Song::WanderersMinuet, 10_000, 2, 0)), 3);
        assert_eq!(cell_frames(&draw_gauge(Song::None, 0, 0, 0)), 3);
    }

    #[test]
    fn test_song_timer_uses_song_colour() {
        let draw = draw_gauge(Song::MagesBallad, 22_500, 0, 0);

        let fills = draw.fills();
        assert_eq!(fills[0].2, [song_color(Song::MagesBallad); 4]);
        assert_eq!(fills[0].1.x, 833.0 + 127.0);
    }

    #[test]
    fn test_lit_repertoire_cells() {
        let draw = draw_gauge(Song::WanderersMinuet, 0, 2, 0);

        let lit = draw
            .fills()
            .into_iter()
            .filter(|fill| fill.2 == [REPERTOIRE_COLOR; 4])
            .count();
        assert_eq!(lit, 2);
    }

    #[test]
    fn test_labels() {
        let draw = draw_gauge(Song::ArmysPaeon, 44_001, 1, 85);
        assert_eq!(draw.label_texts(), vec!["45", "85"]);
    }
}
