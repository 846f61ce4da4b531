// File: crates/wto-winrate/src/lib.rs
// Summary: Library entry point; dataset generation and figure assembly.

pub mod dataset;
pub mod figure;

pub use dataset::{generate, crossover_gdp, SamplePoint};
pub use figure::{render_options, win_rate_figure};
