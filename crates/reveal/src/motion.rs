//! Idle motion for the revealed visual.

use std::time::Duration;

/// Peak rotation, radians. Low amplitude: the motion should read as a
/// gentle drift, not an animation.
const AMPLITUDE_RAD: f32 = 0.035;

/// Angular frequency, radians per second of elapsed time.
const FREQUENCY: f32 = 0.1;

/// Idle rotation angle at `elapsed` time since reveal.
///
/// A pure function of elapsed time — no per-frame accumulated state — so
/// the motion is bounded and trivially resumable after a pause.
pub fn idle_angle(elapsed: Duration) -> f32 {
    AMPLITUDE_RAD * (FREQUENCY * elapsed.as_secs_f32()).sin()
}
