//! Whether the overlay is composited this frame
//!
//! Recomputed from scratch every frame; nothing is remembered between frames
//! apart from the manual override flag, which lives on the HUD window.
//!
//! # Fail-open
//!
//! The host UI probes can fail to resolve (addon not loaded yet, UI rebuilt
//! after a zone change). When either probe is unresolvable the HUD renders
//! anyway. Only a fully resolved "status panel hidden and no fade running"
//! hides it.

/// Host UI elements consulted for auto-hiding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addon {
    /// The game's own HP/MP parameter panel
    ParameterWidget,
    /// Full-screen fade used by zone transitions and cutscenes
    FadeMiddle,
}

impl Addon {
    /// Name the host registers the addon under
    pub fn host_name(self) -> &'static str {
        match self {
            Addon::ParameterWidget => "_ParameterWidget",
            Addon::FadeMiddle => "FadeMiddle",
        }
    }
}

/// Host UI visibility probe
pub trait UiProbe {
    /// `None` when the addon can't be resolved this frame
    fn addon_visible(&self, addon: Addon) -> Option<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    ForcedVisible,
    ForcedHidden,
    AutoHidden,
    AutoVisible,
}

impl VisibilityState {
    pub fn renders(self) -> bool {
        matches!(self, VisibilityState::ForcedVisible | VisibilityState::AutoVisible)
    }
}

/// Everything the visibility decision looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityInputs {
    pub manual_override: bool,
    pub hide_hud: bool,
    pub player_present: bool,
    pub parameter_widget: Option<bool>,
    pub fade_middle: Option<bool>,
}

impl VisibilityInputs {
    pub fn probe(
        manual_override: bool,
        hide_hud: bool,
        player_present: bool,
        ui: &dyn UiProbe,
    ) -> Self {
        VisibilityInputs {
            manual_override,
            hide_hud,
            player_present,
            parameter_widget: ui.addon_visible(Addon::ParameterWidget),
            fade_middle: ui.addon_visible(Addon::FadeMiddle),
        }
    }
}

pub fn compute_visibility(inputs: &VisibilityInputs) -> VisibilityState {
    if inputs.manual_override {
        return VisibilityState::ForcedVisible;
    }

    if inputs.hide_hud {
        return VisibilityState::ForcedHidden;
    }

    if !inputs.player_present {
        return VisibilityState::AutoHidden;
    }

    match (inputs.parameter_widget, inputs.fade_middle) {
        (Some(false), Some(false)) => VisibilityState::AutoHidden,
        _ => VisibilityState::AutoVisible,
    }
}
