//! Demo host for the job HUD
//!
//! An SDL2 window stands in for the game client: a small simulated actor
//! table, animated job gauges and keyboard toggles for everything the real
//! host would drive.
//!
//! Keys: `1`-`7` switch job, `Tab` cycles the target, `F1` toggles the manual
//! override, `H` toggles "hide HUD", `P` hides the status panel, `F` starts a
//! fade, `Esc` quits. Clicking a plate targets its actor.

use glam::Vec2;
use job_hud::actor::{
    ActorId, ActorSnapshot, Affiliation, AggressionProbe, GameState, JobId, Pool, TargetManager,
};
use job_hud::config::{ConfigStore, default_path};
use job_hud::gauge::{GaugeState, Song};
use job_hud::hud::JobRegistry;
use job_hud::hud::jobs::{bard, dancer, dark_knight, gunbreaker, red_mage, summoner, white_mage};
use job_hud::overlay::Overlay;
use job_hud::render::bitmap_font;
use job_hud::render::sdl_canvas::SdlDrawList;
use job_hud::visibility::{Addon, UiProbe};
use log::{info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use std::time::Instant;

// Logical resolution the HUD layout is tuned for; SDL scales it to the window
const LOGICAL_WIDTH: u32 = 1920;
const LOGICAL_HEIGHT: u32 = 1080;
const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

const FADE_MS: u32 = 1_500;

/// Owned actor in the simulated object table
struct DemoActor {
    id: ActorId,
    name: String,
    hp: Pool,
    mp: Option<Pool>,
    affiliation: Affiliation,
    in_combat: bool,
    job: Option<JobId>,
    target_id: ActorId,
    aggressive: bool,
}

impl DemoActor {
    fn snapshot(&self) -> ActorSnapshot<'_> {
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

/// Simulated game client. Slot 0 is the local player; entities sit on even slots.
struct World {
    table: Vec<Option<DemoActor>>,
    hard_target: Option<ActorId>,
    elapsed_ms: u32,
}

impl World {
    fn new(job: JobId) -> Self {
        let mut table: Vec<Option<DemoActor>> = Vec::new();
        let mut put = |actor: DemoActor| {
            table.push(Some(actor));
            table.push(None);
        };

        put(DemoActor {
            id: ActorId(1),
            name: "Tank Mcgee".to_string(),
            hp: Pool::new(84_300, 84_300),
            mp: Some(Pool::new(10_000, 10_000)),
            affiliation: Affiliation::LocalPlayer,
            in_combat: true,
            job: Some(job),
            target_id: ActorId(10),
            aggressive: false,
        });
        put(DemoActor {
            id: ActorId(2),
            name: "Lily Whitewood".to_string(),
            hp: Pool::new(61_200, 61_200),
            mp: Some(Pool::new(10_000, 10_000)),
            affiliation: Affiliation::Player,
            in_combat: true,
            job: Some(white_mage::JOB_ID),
            target_id: ActorId(1),
            aggressive: false,
        });
        put(DemoActor {
            id: ActorId(10),
            name: "Striking Dummy".to_string(),
            hp: Pool::new(12_500_000, 12_500_000),
            mp: None,
            affiliation: Affiliation::HostileNpc,
            in_combat: true,
            job: None,
            target_id: ActorId(1),
            aggressive: true,
        });
        put(DemoActor {
            id: ActorId(11),
            name: "Lost Lamb".to_string(),
            hp: Pool::new(4_000, 4_000),
            mp: None,
            affiliation: Affiliation::HostileNpc,
            in_combat: false,
            job: None,
            target_id: ActorId::NONE,
            aggressive: false,
        });
        put(DemoActor {
            id: ActorId(12),
            name: "Wild Boar".to_string(),
            hp: Pool::new(9_800, 9_800),
            mp: None,
            affiliation: Affiliation::HostileNpc,
            in_combat: false,
            job: None,
            target_id: ActorId::NONE,
            aggressive: true,
        });
        put(DemoActor {
            id: ActorId(20),
            name: "Mender".to_string(),
            hp: Pool::new(15_000, 15_000),
            mp: None,
            affiliation: Affiliation::FriendlyNpc,
            in_combat: false,
            job: None,
            target_id: ActorId::NONE,
            aggressive: false,
        });

        World {
            table,
            hard_target: Some(ActorId(10)),
            elapsed_ms: 0,
        }
    }

    fn actors(&self) -> impl Iterator<Item = &DemoActor> {
        self.table.iter().flatten()
    }

    fn actor_mut(&mut self, id: ActorId) -> Option<&mut DemoActor> {
        self.table.iter_mut().flatten().find(|actor| actor.id == id)
    }

    fn find(&self, id: ActorId) -> Option<&DemoActor> {
        self.actors().find(|actor| actor.id == id)
    }

    fn set_job(&mut self, job: JobId) {
        if let Some(player) = self.actor_mut(ActorId(1)) {
            player.job = Some(job);
        }
    }

    /// Next actor after the current target, skipping the player
    fn cycle_target(&mut self) {
        let ids: Vec<ActorId> = self
            .actors()
            .map(|actor| actor.id)
            .filter(|id| *id != ActorId(1))
            .collect();
        let current = self
            .hard_target
            .and_then(|current| ids.iter().position(|id| *id == current));
        let next = match current {
            Some(index) => ids.get(index + 1).copied(),
            None => ids.first().copied(),
        };
        self.set_target(next.unwrap_or(ActorId::NONE));
    }

    fn set_target(&mut self, id: ActorId) {
        self.hard_target = (!id.is_none()).then_some(id);
        if let Some(player) = self.actor_mut(ActorId(1)) {
            player.target_id = id;
        }
    }

    fn tick(&mut self, delta_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.wrapping_add(delta_ms);
        let t = self.elapsed_ms;

        for actor in self.table.iter_mut().flatten() {
            // Triangle wave between 20% and 100% health, out of phase per actor
            let period = 8_000 + actor.id.0 * 700;
            let phase = t.wrapping_add(actor.id.0 * 1_300) % period;
            let wave = if phase < period / 2 { phase } else { period - phase };
            let permille = 200 + wave * 1_600 / period;
            actor.hp.current = (actor.hp.max as u64 * permille as u64 / 1_000) as u32;

            if let Some(mp) = actor.mp.as_mut().filter(|mp| mp.max > 0) {
                mp.current = mp.max - (t / 3 % mp.max);
            }
        }
    }
}

/// Gauge values cycling through their full range
fn simulated_gauge(job: JobId, t: u32) -> Option<GaugeState> {
    let gauge = match job {
        gunbreaker::JOB_ID => GaugeState::Gunbreaker {
            ammo: (t / 3_000 % 3) as u8,
        },
        dark_knight::JOB_ID => GaugeState::DarkKnight {
            blood: (t / 100 % 101) as u8,
            darkside_ms: dark_knight::DARKSIDE_MS - t % dark_knight::DARKSIDE_MS,
        },
        bard::JOB_ID => {
            let song = match t / bard::SONG_MS % 3 {
                0 => Song::WanderersMinuet,
                1 => Song::MagesBallad,
                _ => Song::ArmysPaeon,
            };
            GaugeState::Bard {
                song,
                song_ms: bard::SONG_MS - t % bard::SONG_MS,
                repertoire: (t / 5_000 % (bard::repertoire_cells(song) + 1)) as u8,
                soul_voice: (t / 200 % 101) as u8,
            }
        }
        dancer::JOB_ID => GaugeState::Dancer {
            feathers: (t / 2_500 % (dancer::MAX_FEATHERS + 1)) as u8,
            esprit: (t / 150 % 101) as u8,
        },
        red_mage::JOB_ID => GaugeState::RedMage {
            white_mana: (t / 120 % 101) as u8,
            black_mana: (t / 170 % 101) as u8,
        },
        summoner::JOB_ID => GaugeState::Summoner {
            aetherflow: (t / 4_000 % (summoner::MAX_AETHERFLOW + 1)) as u8,
            demi_ms: summoner::DEMI_MS - t % summoner::DEMI_MS,
        },
        white_mage::JOB_ID => GaugeState::WhiteMage {
            lilies: (t / white_mage::LILY_MS % (white_mage::MAX_LILIES + 1)) as u8,
            lily_timer_ms: white_mage::LILY_MS - t % white_mage::LILY_MS,
            blood_lily: (t / 20_000 % (white_mage::MAX_BLOOD_LILY + 1)) as u8,
        },
        _ => return None,
    };
    Some(gauge)
}

impl AggressionProbe for World {
    fn is_aggressive(&self, actor: &ActorSnapshot<'_>) -> bool {
        self.find(actor.id).is_some_and(|actor| actor.aggressive)
    }
}

impl GameState for World {
    fn local_player(&self) -> Option<ActorSnapshot<'_>> {
        self.find(ActorId(1)).map(DemoActor::snapshot)
    }

    fn hard_target(&self) -> Option<ActorSnapshot<'_>> {
        self.find(self.hard_target?).map(DemoActor::snapshot)
    }

    fn soft_target(&self) -> Option<ActorSnapshot<'_>> {
        None
    }

    fn object_table_len(&self) -> usize {
        self.table.len()
    }

    fn object_at(&self, index: usize) -> Option<ActorSnapshot<'_>> {
        self.table.get(index)?.as_ref().map(DemoActor::snapshot)
    }

    fn job_gauge(&self, job: JobId) -> Option<GaugeState> {
        simulated_gauge(job, self.elapsed_ms)
    }
}

/// Status panel and fade overlay of the simulated client
#[derive(Default)]
struct DemoUi {
    status_panel_hidden: bool,
    fade_ms_left: u32,
}

impl UiProbe for DemoUi {
    fn addon_visible(&self, addon: Addon) -> Option<bool> {
        match addon {
            Addon::ParameterWidget => Some(!self.status_panel_hidden),
            Addon::FadeMiddle => Some(self.fade_ms_left > 0),
        }
    }
}

/// Collects the click-to-target request of one frame
#[derive(Default)]
struct PendingTarget(Option<ActorId>);

impl TargetManager for PendingTarget {
    fn set_target(&mut self, id: ActorId) {
        self.0 = Some(id);
    }
}

fn job_for_key(key: Keycode) -> Option<usize> {
    let index = match key {
        Keycode::Num1 => 0,
        Keycode::Num2 => 1,
        Keycode::Num3 => 2,
        Keycode::Num4 => 3,
        Keycode::Num5 => 4,
        Keycode::Num6 => 5,
        Keycode::Num7 => 6,
        _ => return None,
    };
    Some(index)
}

fn draw_help(
    canvas: &mut sdl2::render::Canvas<sdl2::video::Window>,
    lines: &[String],
) -> Result<(), String> {
    for (i, line) in lines.iter().enumerate() {
        bitmap_font::draw_text(canvas, line, 20, 20 + i as i32 * 22, Color::RGB(170, 170, 190), 2)?;
    }
    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match default_path().and_then(ConfigStore::open) {
        Ok(store) => store,
        Err(err) => {
            warn!("Config unavailable ({err}), using defaults");
            ConfigStore::default()
        }
    };
    let mut overlay = Overlay::new(config);

    let registry = JobRegistry::builtin();
    let jobs: Vec<_> = registry.iter().collect();
    let mut world = World::new(gunbreaker::JOB_ID);
    let mut ui = DemoUi::default();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let window = video_subsystem
        .window("Job HUD demo", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(LOGICAL_WIDTH, LOGICAL_HEIGHT)
        .map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    info!("Demo running, {} jobs available", jobs.len());
    let mut last_frame = Instant::now();

    'running: loop {
        let mut click = None;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::Tab),
                    ..
                } => world.cycle_target(),
                Event::KeyDown {
                    keycode: Some(Keycode::F1),
                    ..
                } => {
                    overlay.toggle_manual_override();
                }
                Event::KeyDown {
                    keycode: Some(Keycode::H),
                    ..
                } => {
                    let hide = !overlay.config().snapshot().hide_hud;
                    if let Err(err) = overlay.set_hide_hud(hide) {
                        warn!("Could not save config: {err}");
                    }
                }
                Event::KeyDown {
                    keycode: Some(Keycode::P),
                    ..
                } => ui.status_panel_hidden = !ui.status_panel_hidden,
                Event::KeyDown {
                    keycode: Some(Keycode::F),
                    ..
                } => ui.fade_ms_left = FADE_MS,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(descriptor) = job_for_key(key).and_then(|index| jobs.get(index)) {
                        world.set_job(descriptor.job);
                    }
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => click = Some(Vec2::new(x as f32, y as f32)),
                _ => {}
            }
        }

        let delta_ms = last_frame.elapsed().as_millis().min(u128::from(u32::MAX)) as u32;
        last_frame = Instant::now();
        world.tick(delta_ms);
        ui.fade_ms_left = ui.fade_ms_left.saturating_sub(delta_ms);

        canvas.set_draw_color(Color::RGB(28, 32, 44));
        canvas.clear();

        let snapshot = overlay.config().snapshot();
        let help = [
            "1-7 JOB  TAB TARGET  F1 OVERRIDE  H HIDE  P PANEL  F FADE  ESC QUIT".to_string(),
            format!(
                "OVERRIDE {}  HIDE {}  PANEL {}  FADE {}",
                if overlay.manual_override() { "ON" } else { "OFF" },
                if snapshot.hide_hud { "ON" } else { "OFF" },
                if ui.status_panel_hidden { "HIDDEN" } else { "SHOWN" },
                if ui.fade_ms_left > 0 { "ON" } else { "OFF" },
            ),
        ];
        draw_help(&mut canvas, &help)?;

        let mut pending = PendingTarget::default();
        let mut draw = SdlDrawList::new(&mut canvas, click)?;
        overlay.draw_frame(&mut draw, &world, &ui, &mut pending);
        draw.finish()?;

        if let Some(id) = pending.0 {
            world.set_target(id);
        }

        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    overlay.shutdown();
    Ok(())
}
