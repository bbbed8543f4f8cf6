//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use swarm_agent::Swarm;
use swarm_core::{SwarmConfig, Tick};
use swarm_sim::SimObserver;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and tick summaries to an
/// [`OutputWriter`] backend.
///
/// Summaries are written every tick; snapshots follow the simulator's
/// `output_interval_ticks`.  A re-initialized swarm is recorded as a tick-0
/// snapshot and summary, so each run segment in the files starts with its
/// spawn positions.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  Check with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    snapshots:  bool,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.  Tick-0 snapshots are skipped
    /// when `config.output_interval_ticks` is 0.
    pub fn new(writer: W, config: &SwarmConfig) -> Self {
        Self {
            writer,
            snapshots:  config.output_interval_ticks > 0,
            last_error: None,
        }
    }

    /// Record `swarm` as-is, typically the freshly built tick-0 state.
    pub fn record_initial(&mut self, swarm: &Swarm) {
        self.on_reset(swarm);
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_snapshot(&mut self, tick: Tick, swarm: &Swarm) {
        let rows: Vec<AgentSnapshotRow> = swarm
            .agents()
            .iter()
            .map(|agent| AgentSnapshotRow::from_agent(tick, agent))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, swarm: &Swarm) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from_swarm(swarm));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, swarm: &Swarm) {
        self.write_snapshot(tick, swarm);
    }

    fn on_reset(&mut self, swarm: &Swarm) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from_swarm(swarm));
        self.store_err(result);
        if self.snapshots {
            self.write_snapshot(swarm.tick(), swarm);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
