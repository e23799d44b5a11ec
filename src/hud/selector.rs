//! Which job window is active
//!
//! The registry maps job ids to window descriptors and never changes after
//! startup. The selector holds at most one live [`HudWindow`] and replaces
//! it when the player's job changes to another supported job.

use super::jobs::{self, JobKind};
use super::window::{HudWindow, WindowId};
use crate::actor::JobId;
use crate::config::GaugeLayout;
use log::{debug, info};

/// Static description of one supported job's window
#[derive(Debug)]
pub struct JobWindowDescriptor {
    pub job: JobId,
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub kind: JobKind,
    /// Default gauge geometry, overridable per job in the config
    pub gauge: GaugeLayout,
    /// Whether the window draws the primary resource bar
    pub resource_bar: bool,
}

static BUILTIN: [JobWindowDescriptor; 7] = [
    JobWindowDescriptor {
        job: jobs::bard::JOB_ID,
        name: "Bard",
        abbreviation: "BRD",
        kind: JobKind::Bard,
        gauge: jobs::bard::LAYOUT,
        resource_bar: true,
    },
    JobWindowDescriptor {
        job: jobs::white_mage::JOB_ID,
        name: "White Mage",
        abbreviation: "WHM",
        kind: JobKind::WhiteMage,
        gauge: jobs::white_mage::LAYOUT,
        resource_bar: true,
    },
    JobWindowDescriptor {
        job: jobs::summoner::JOB_ID,
        name: "Summoner",
        abbreviation: "SMN",
        kind: JobKind::Summoner,
        gauge: jobs::summoner::LAYOUT,
        resource_bar: true,
    },
    JobWindowDescriptor {
        job: jobs::dark_knight::JOB_ID,
        name: "Dark Knight",
        abbreviation: "DRK",
        kind: JobKind::DarkKnight,
        gauge: jobs::dark_knight::LAYOUT,
        resource_bar: true,
    },
    JobWindowDescriptor {
        job: jobs::red_mage::JOB_ID,
        name: "Red Mage",
        abbreviation: "RDM",
        kind: JobKind::RedMage,
        gauge: jobs::red_mage::LAYOUT,
        resource_bar: true,
    },
    JobWindowDescriptor {
        job: jobs::gunbreaker::JOB_ID,
        name: "Gunbreaker",
        abbreviation: "GNB",
        kind: JobKind::Gunbreaker,
        gauge: jobs::gunbreaker::LAYOUT,
        resource_bar: false,
    },
    JobWindowDescriptor {
        job: jobs::dancer::JOB_ID,
        name: "Dancer",
        abbreviation: "DNC",
        kind: JobKind::Dancer,
        gauge: jobs::dancer::LAYOUT,
        resource_bar: true,
    },
];

/// Read-only job id to descriptor table
#[derive(Debug, Clone, Copy)]
pub struct JobRegistry {
    descriptors: &'static [JobWindowDescriptor],
}

impl JobRegistry {
    pub fn builtin() -> Self {
        JobRegistry { descriptors: &BUILTIN }
    }

    pub fn find(&self, job: JobId) -> Option<&'static JobWindowDescriptor> {
        self.descriptors.iter().find(|descriptor| descriptor.job == job)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static JobWindowDescriptor> {
        self.descriptors.iter()
    }
}

impl Default for JobRegistry {
    fn default() -> Self {
        JobRegistry::builtin()
    }
}

/// Outcome of [`WindowSelector::on_frame`]
#[derive(Debug)]
pub enum Swap {
    /// Same job, or no player this frame
    Kept,
    /// Job without a window; the previous window stays active
    Unrecognized,
    /// A new window took over; the old one (if any) comes back hidden
    Replaced { evicted: Option<HudWindow> },
}

#[derive(Debug)]
pub struct WindowSelector {
    registry: JobRegistry,
    active: Option<HudWindow>,
    next_id: u64,
    initial_visibility: bool,
    /// Last unsupported job logged, so a job without a window logs once
    last_unrecognized: Option<JobId>,
}

impl WindowSelector {
    pub fn new(registry: JobRegistry) -> Self {
        WindowSelector {
            registry,
            active: None,
            next_id: 1,
            initial_visibility: false,
            last_unrecognized: None,
        }
    }

    /// Manual override flag given to windows created from now on
    pub fn set_initial_visibility(&mut self, visible: bool) {
        self.initial_visibility = visible;
    }

    pub fn active(&self) -> Option<&HudWindow> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut HudWindow> {
        self.active.as_mut()
    }

    /// Matches the active window to the player's current job
    pub fn on_frame(&mut self, job: Option<JobId>) -> Swap {
        let Some(job) = job else {
            return Swap::Kept;
        };

        if self.active.as_ref().is_some_and(|window| window.job() == job) {
            return Swap::Kept;
        }

        let Some(descriptor) = self.registry.find(job) else {
            if self.last_unrecognized != Some(job) {
                debug!("No HUD window for job {}, keeping the current one", job.0);
                self.last_unrecognized = Some(job);
            }
            return Swap::Unrecognized;
        };
        self.last_unrecognized = None;

        let id = WindowId(self.next_id);
        self.next_id += 1;

        info!(
            "HUD switched to {} ({}), window {}",
            descriptor.name, descriptor.abbreviation, id.0
        );

        let window = HudWindow::new(id, descriptor, self.initial_visibility);
        let evicted = self.active.replace(window).map(|mut old| {
            old.set_visible(false);
            old
        });

        Swap::Replaced { evicted }
    }

    /// Hides and drops the active window
    pub fn shutdown(&mut self) {
        if let Some(mut window) = self.active.take() {
            window.set_visible(false);
            info!("HUD window {} closed", window.id().0);
        }
    }
}

impl Default for WindowSelector {
    fn default() -> Self {
        WindowSelector::new(JobRegistry::builtin())
    }
}
