// File: crates/figure-core/src/axis.rs
// Summary: Axis model with labels, ranges, and tick spacing.

use crate::grid;

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Fixed tick spacing; `None` falls back to six evenly spaced ticks.
    pub tick_step: Option<f64>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, tick_step: None }
    }

    pub fn with_tick_step(mut self, step: f64) -> Self {
        self.tick_step = Some(step);
        self
    }

    pub fn ticks(&self) -> Vec<f64> {
        match self.tick_step {
            Some(step) => grid::ticks(self.min, self.max, step),
            None => grid::linspace(self.min, self.max, 6),
        }
    }
}
