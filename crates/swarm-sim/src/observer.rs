//! Simulation observer trait for progress reporting and data collection.

use swarm_agent::Swarm;
use swarm_core::Tick;

/// Callbacks invoked by [`Sim`][crate::Sim] around each step and on
/// re-initialization.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: energy printer
///
/// ```rust,ignore
/// struct EnergyPrinter;
///
/// impl SimObserver for EnergyPrinter {
///     fn on_tick_end(&mut self, tick: Tick, swarm: &Swarm) {
///         println!("{tick}: mean energy {:.1}", swarm.mean_energy());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the step that produces `tick`.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every step with the freshly produced swarm.
    fn on_tick_end(&mut self, _tick: Tick, _swarm: &Swarm) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks), after `on_tick_end`.
    fn on_snapshot(&mut self, _tick: Tick, _swarm: &Swarm) {}

    /// Called whenever the swarm is rebuilt at tick 0 (selection change,
    /// resize, or explicit reset).
    fn on_reset(&mut self, _swarm: &Swarm) {}

    /// Called once by [`Sim::finish`][crate::Sim::finish].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
