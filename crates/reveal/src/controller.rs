//! Reveal state machine with a cancellable settle timer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::RevealConfig;

/// Lifecycle stage of the progressive heavy-visual loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    /// Not mounted yet.
    Hidden,
    /// Lightweight static poster is on screen.
    PosterShown,
    /// Region is visible; resources load in the background while the
    /// settle timer runs. The poster stays up.
    Warming,
    /// Heavy visual is mounted. Terminal for the life of the mount.
    Revealed,
}

impl RevealState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// Load state of the heavy visual's resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceState {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Identifies one arming of the settle timer.
///
/// A fired timer whose generation no longer matches is stale and must be
/// ignored: bumping the generation *is* the cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerGeneration(pub u64);

/// A settle timer the host must schedule.
///
/// The host calls [`RevealController::timer_fired`] with the generation
/// after `delay`; firing a stale generation is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub generation: TimerGeneration,
    pub delay: Duration,
}

/// Governs when the heavy hero visual replaces the poster.
///
/// One instance per hero mount; dropping the controller drops all of its
/// state, so a late host callback for a dead controller has nothing to
/// transition.
#[derive(Debug, Clone)]
pub struct RevealController {
    config: RevealConfig,
    state: RevealState,
    resource: ResourceState,
    visible: bool,
    timer_generation: u64,
    settle_elapsed: bool,
}

impl RevealController {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            state: RevealState::Hidden,
            resource: ResourceState::Idle,
            visible: false,
            timer_generation: 0,
            settle_elapsed: false,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn resource_state(&self) -> ResourceState {
        self.resource
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Mount the hero region: the poster goes up immediately.
    pub fn mount(&mut self) {
        if self.state != RevealState::Hidden {
            tracing::debug!(state = ?self.state, "ignoring mount of already-mounted hero");
            return;
        }
        self.state = RevealState::PosterShown;
    }

    /// Viewport signal: is the region currently intersecting (with the
    /// host-configured lookahead margin)?
    ///
    /// Entering the viewport from `PosterShown` starts `Warming` and arms
    /// the settle timer; the returned request must be scheduled by the
    /// host. Leaving during `Warming` invalidates the timer and falls back
    /// to `PosterShown` — re-entry restarts `Warming` from scratch.
    pub fn set_visible(&mut self, intersecting: bool) -> Option<TimerRequest> {
        self.visible = intersecting;

        match self.state {
            RevealState::PosterShown if intersecting => Some(self.start_warming()),
            RevealState::Warming if !intersecting => {
                // Generation bump is the cancel; the fired timer will be
                // stale. Background resource loading continues untouched.
                self.timer_generation += 1;
                self.settle_elapsed = false;
                self.state = RevealState::PosterShown;
                tracing::debug!("left viewport during warming, settle timer cancelled");
                None
            }
            _ => None,
        }
    }

    /// Host callback: a previously requested settle timer elapsed.
    pub fn timer_fired(&mut self, generation: TimerGeneration) {
        if generation.0 != self.timer_generation {
            tracing::debug!(
                fired = generation.0,
                current = self.timer_generation,
                "ignoring stale settle timer"
            );
            return;
        }
        if self.state != RevealState::Warming {
            return;
        }

        self.settle_elapsed = true;
        self.try_reveal();
    }

    /// Host callback: the heavy visual's resources finished loading.
    pub fn resource_ready(&mut self) {
        self.resource = ResourceState::Ready;
        if self.state == RevealState::Warming && self.settle_elapsed {
            self.try_reveal();
        }
    }

    /// Host callback: the heavy visual's resources failed to load.
    ///
    /// Non-fatal: the controller stays in `Warming` (poster still visible)
    /// rather than reaching a broken `Revealed`. Presentation surfaces the
    /// fallback; a later `resource_ready` (host retry) can still promote.
    pub fn resource_failed(&mut self) {
        tracing::warn!("hero resources failed to load, staying on poster");
        self.resource = ResourceState::Failed;
    }

    /// Idle motion angle for the revealed visual.
    ///
    /// Pure in elapsed time since reveal; see [`crate::motion::idle_angle`].
    pub fn idle_angle(&self, elapsed: Duration) -> f32 {
        crate::motion::idle_angle(elapsed)
    }

    fn start_warming(&mut self) -> TimerRequest {
        self.state = RevealState::Warming;
        self.settle_elapsed = false;
        if self.resource == ResourceState::Idle {
            self.resource = ResourceState::Loading;
        }
        self.timer_generation += 1;

        TimerRequest {
            generation: TimerGeneration(self.timer_generation),
            delay: self.config.settle_delay,
        }
    }

    fn try_reveal(&mut self) {
        if self.visible && self.resource != ResourceState::Failed {
            self.state = RevealState::Revealed;
            tracing::info!("hero revealed");
        }
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}
