//! `neokicks-reveal` — progressive reveal of the heavy hero visual.
//!
//! A small state machine that keeps a lightweight poster on screen until
//! the hero region is visible and has settled, then promotes to the
//! expensive interactive visual exactly once per mount. All waiting is a
//! pending state plus a future host event; the settle timer is cancelled
//! deterministically by bumping its generation.

pub mod config;
pub mod controller;
pub mod motion;

pub use config::RevealConfig;
pub use controller::{ResourceState, RevealController, RevealState, TimerGeneration, TimerRequest};
pub use motion::idle_angle;
