//! Test doubles for the host collaborators

use crate::actor::{
    ActorId, ActorQuery, ActorSnapshot, Affiliation, AggressionProbe, GameState, JobId, Pool,
    TargetManager,
};
use crate::color::WHITE;
use crate::config::{GaugeLayout, HudConfig};
use crate::gauge::GaugeState;
use crate::hud::{Frame, JobKind};
use crate::render::DrawList;
use crate::visibility::{Addon, UiProbe};
use glam::Vec2;

/// Fixed text metrics: every character is `CHAR_WIDTH` wide
pub const CHAR_WIDTH: f32 = 10.0;
pub const LINE_HEIGHT: f32 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Begin(String),
    End,
    RectFilled { min: Vec2, max: Vec2, color: u32 },
    RectFilledMulticolor { min: Vec2, max: Vec2, colors: [u32; 4] },
    Rect { min: Vec2, max: Vec2, color: u32 },
    Text { pos: Vec2, color: u32, text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextCall {
    pub pos: Vec2,
    pub color: u32,
    pub text: String,
}

/// Draw list that records every call
#[derive(Debug)]
pub struct RecordingDrawList {
    pub commands: Vec<DrawCmd>,
    pub viewport: Vec2,
    /// Mouse clicks landing this frame
    pub clicks: Vec<Vec2>,
    pub allow_begin: bool,
}

impl Default for RecordingDrawList {
    fn default() -> Self {
        RecordingDrawList {
            commands: Vec::new(),
            viewport: Vec2::new(1920.0, 1080.0),
            clicks: Vec::new(),
            allow_begin: true,
        }
    }
}

impl RecordingDrawList {
    pub fn texts(&self) -> Vec<TextCall> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { pos, color, text } => Some(TextCall {
                    pos: *pos,
                    color: *color,
                    text: text.clone(),
                }),
                _ => None,
            })
            .collect()
    }

    /// Fill passes of outlined labels, in draw order
    pub fn labels(&self) -> Vec<TextCall> {
        self.texts().into_iter().filter(|call| call.color == WHITE).collect()
    }

    pub fn label_texts(&self) -> Vec<String> {
        self.labels().into_iter().map(|call| call.text).collect()
    }

    /// Gradient fills as (min, max, corner colours)
    pub fn fills(&self) -> Vec<(Vec2, Vec2, [u32; 4])> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::RectFilledMulticolor { min, max, colors } => Some((*min, *max, *colors)),
                _ => None,
            })
            .collect()
    }

    /// Bar frames (outline rectangles) as (min, max)
    pub fn frames(&self) -> Vec<(Vec2, Vec2)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Rect { min, max, .. } => Some((*min, *max)),
                _ => None,
            })
            .collect()
    }

    pub fn click(&mut self, pos: Vec2) {
        self.clicks.push(pos);
    }
}

impl DrawList for RecordingDrawList {
    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    fn begin_overlay(&mut self, name: &str) -> bool {
        if self.allow_begin {
            self.commands.push(DrawCmd::Begin(name.to_string()));
        }
        self.allow_begin
    }

    fn end_overlay(&mut self) {
        self.commands.push(DrawCmd::End);
    }

    fn add_rect_filled(&mut self, min: Vec2, max: Vec2, color: u32) {
        self.commands.push(DrawCmd::RectFilled { min, max, color });
    }

    fn add_rect_filled_multicolor(
        &mut self,
        min: Vec2,
        max: Vec2,
        top_left: u32,
        top_right: u32,
        bottom_right: u32,
        bottom_left: u32,
    ) {
        self.commands.push(DrawCmd::RectFilledMulticolor {
            min,
            max,
            colors: [top_left, top_right, bottom_right, bottom_left],
        });
    }

    fn add_rect(&mut self, min: Vec2, max: Vec2, color: u32) {
        self.commands.push(DrawCmd::Rect { min, max, color });
    }

    fn add_text(&mut self, pos: Vec2, color: u32, text: &str) {
        self.commands.push(DrawCmd::Text {
            pos,
            color,
            text: text.to_string(),
        });
    }

    fn calc_text_size(&self, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * CHAR_WIDTH, LINE_HEIGHT)
    }

    fn is_clicked(&mut self, min: Vec2, max: Vec2) -> bool {
        self.clicks
            .iter()
            .any(|p| p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y)
    }
}

/// Owned actor backing the snapshots handed out by [`FakeGame`]
#[derive(Debug, Clone)]
pub struct FakeActor {
    pub id: ActorId,
    pub name: String,
    pub hp: Pool,
    pub mp: Option<Pool>,
    pub affiliation: Affiliation,
    pub in_combat: bool,
    pub job: Option<JobId>,
    pub target_id: ActorId,
}

impl FakeActor {
    pub fn local_player(id: u32, name: &str, job: u32) -> Self {
        FakeActor {
            id: ActorId(id),
            name: name.to_string(),
            hp: Pool::new(8000, 8000),
            mp: Some(Pool::new(10000, 10000)),
            affiliation: Affiliation::LocalPlayer,
            in_combat: false,
            job: Some(JobId(job)),
            target_id: ActorId::NONE,
        }
    }

    pub fn player(id: u32, name: &str, job: u32) -> Self {
        FakeActor {
            affiliation: Affiliation::Player,
            ..FakeActor::local_player(id, name, job)
        }
    }

    pub fn hostile(id: u32, name: &str) -> Self {
        FakeActor {
            id: ActorId(id),
            name: name.to_string(),
            hp: Pool::new(1000, 1000),
            mp: None,
            affiliation: Affiliation::HostileNpc,
            in_combat: true,
            job: None,
            target_id: ActorId::NONE,
        }
    }

    pub fn with_hp(mut self, current: u32, max: u32) -> Self {
        self.hp = Pool::new(current, max);
        self
    }

    pub fn targeting(mut self, id: u32) -> Self {
        self.target_id = ActorId(id);
        self
    }

    pub fn snapshot(&self) -> ActorSnapshot<'_> {
        ActorSnapshot {
            id: self.id,
            name: &self.name,
            hp: self.hp,
            mp: self.mp,
            affiliation: self.affiliation,
            in_combat: self.in_combat,
            job: self.job,
            target_id: self.target_id,
        }
    }
}

#[derive(Debug, Default)]
pub struct FakeGame {
    pub player: Option<FakeActor>,
    pub hard_target: Option<FakeActor>,
    pub soft_target: Option<FakeActor>,
    pub table: Vec<Option<FakeActor>>,
    pub gauge: Option<GaugeState>,
    pub aggressive: bool,
}

impl FakeGame {
    pub fn with_player(player: FakeActor) -> Self {
        FakeGame {
            player: Some(player),
            ..FakeGame::default()
        }
    }

    /// Places `actor` in table slot `index`, growing the table as needed
    pub fn put(&mut self, index: usize, actor: FakeActor) {
        if self.table.len() <= index {
            self.table.resize(index + 1, None);
        }
        self.table[index] = Some(actor);
    }
}

impl AggressionProbe for FakeGame {
    fn is_aggressive(&self, _actor: &ActorSnapshot<'_>) -> bool {
        self.aggressive
    }
}

impl GameState for FakeGame {
    fn local_player(&self) -> Option<ActorSnapshot<'_>> {
        self.player.as_ref().map(FakeActor::snapshot)
    }

    fn hard_target(&self) -> Option<ActorSnapshot<'_>> {
        self.hard_target.as_ref().map(FakeActor::snapshot)
    }

    fn soft_target(&self) -> Option<ActorSnapshot<'_>> {
        self.soft_target.as_ref().map(FakeActor::snapshot)
    }

    fn object_table_len(&self) -> usize {
        self.table.len()
    }

    fn object_at(&self, index: usize) -> Option<ActorSnapshot<'_>> {
        self.table.get(index)?.as_ref().map(FakeActor::snapshot)
    }

    fn job_gauge(&self, _job: JobId) -> Option<GaugeState> {
        self.gauge
    }
}

/// UI probe with fixed answers; resolves both addons as visible by default
#[derive(Debug, Clone, Copy)]
pub struct FakeUi {
    pub parameter_widget: Option<bool>,
    pub fade_middle: Option<bool>,
}

impl Default for FakeUi {
    fn default() -> Self {
        FakeUi {
            parameter_widget: Some(true),
            fade_middle: Some(false),
        }
    }
}

impl UiProbe for FakeUi {
    fn addon_visible(&self, addon: Addon) -> Option<bool> {
        match addon {
            Addon::ParameterWidget => self.parameter_widget,
            Addon::FadeMiddle => self.fade_middle,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingTargets {
    pub requests: Vec<ActorId>,
}

impl TargetManager for RecordingTargets {
    fn set_target(&mut self, id: ActorId) {
        self.requests.push(id);
    }
}

/// Draws one job gauge on an otherwise empty 1920x1080 frame
pub fn render_gauge(kind: JobKind, layout: &GaugeLayout, gauge: GaugeState) -> RecordingDrawList {
    let game = FakeGame::default();
    let config = HudConfig::default();
    let mut list = RecordingDrawList::default();
    let mut label = String::new();

    let mut frame = Frame::new(&mut list, ActorQuery::new(&game), &config, &mut label);
    kind.draw_gauge(&mut frame, layout, &gauge);

    list
}
