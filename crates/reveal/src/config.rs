//! Reveal controller configuration.

use std::time::Duration;

/// Tuning knobs for the progressive reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealConfig {
    /// Lookahead margin for the host's viewport observer: loading starts
    /// this many pixels before the region fully scrolls into view.
    pub lookahead_margin_px: u32,
    /// Settle delay between entering the viewport and mounting the heavy
    /// visual, so the intro text animation is perceived as instant.
    pub settle_delay: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            lookahead_margin_px: 200,
            settle_delay: Duration::from_millis(400),
        }
    }
}

impl RevealConfig {
    pub fn with_lookahead_margin_px(mut self, margin: u32) -> Self {
        self.lookahead_margin_px = margin;
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}
