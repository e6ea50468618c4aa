//! # pq-sim — Day-by-day award simulation.
//!
//! Holds an ordered collection of awards, advances every award once per
//! simulated day, and keeps the collection ranked by quality (highest
//! first, ties keep their previous order). Rendering writes the ranked list
//! as console text or JSON Lines.

pub mod prompt;
pub mod render;
pub mod simulation;

pub use prompt::should_stop;
pub use render::{render_day, render_json, render_text, OutputFormat};
pub use simulation::{DaySnapshot, Simulation, SimulationStats};
