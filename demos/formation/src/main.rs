//! formation — headless demo of the swarm formation simulator.
//!
//! Spawns a preset swarm, drives it with synthetic 60 Hz host callbacks
//! (the simulator steps at its own 30 steps/s), pauses it for one second
//! mid-run, then writes CSV output and prints the final formation.
//!
//! ```text
//! formation [config.json] [preset-id]
//! RUST_LOG=swarm_sim=debug formation
//! ```

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use swarm_agent::Swarm;
use swarm_behavior::AlignmentSteering;
use swarm_core::{SwarmConfig, Tick, find_preset};
use swarm_output::{CsvWriter, OutputWriter, SimOutputObserver};
use swarm_schedule::FrameDecision;
use swarm_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_PRESET: &str = "meme-warfare";
const SEED:           u64  = 42;
const HOST_HZ:        u32  = 60;
const RUN_SECONDS:    u32  = 10;
/// Host-time window (seconds) during which the swarm is paused.
const PAUSE:          (u32, u32) = (4, 5);
const OUTPUT_DIR:     &str = "output/formation";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, swarm: &Swarm) {
        self.summary_rows += 1;
        self.inner.on_tick_end(tick, swarm);
    }

    fn on_snapshot(&mut self, tick: Tick, swarm: &Swarm) {
        self.snapshot_rows += swarm.len();
        self.inner.on_snapshot(tick, swarm);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Load a (partial) JSON config, or fall back to the defaults.
fn load_config(path: Option<&str>) -> Result<SwarmConfig> {
    let Some(path) = path else {
        return Ok(SwarmConfig { seed: SEED, ..SwarmConfig::default() });
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let config: SwarmConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    tracing::info!(path, seed = config.seed, "loaded config");
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let preset = find_preset(args.get(1).map_or(DEFAULT_PRESET, String::as_str))?;

    println!("=== formation — swarm formation simulator ===");
    println!(
        "Preset: {} [{}]  |  {}",
        preset.name, preset.category, preset.description
    );
    println!(
        "Neural capacity: {}  |  Cognitive variance: {:.1}",
        preset.neural_capacity, preset.cognitive_variance
    );
    println!(
        "Arena: {}x{}  |  Rate: {} steps/s  |  Host: {HOST_HZ} Hz  |  Seed: {}",
        config.width,
        config.height,
        config.frame_rate.steps_per_second(),
        config.seed
    );
    println!();

    // 1. Build sim.
    let mut sim = SimBuilder::new(config.clone(), AlignmentSteering)
        .preset(preset.id)?
        .build()?;

    // 2. Set up output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    tracing::info!(dir = OUTPUT_DIR, "writing CSV output");
    let mut inner_obs = SimOutputObserver::new(writer, &config);
    inner_obs.record_initial(&sim.snapshot());
    let mut obs = CountingObserver::new(inner_obs);

    // 3. Drive with synthetic host callbacks.
    let frame = Duration::from_secs(1) / HOST_HZ;
    let mut skipped = 0u64;
    let mut paused = 0u64;
    let t0 = Instant::now();
    for k in 0..HOST_HZ * RUN_SECONDS {
        let seconds = k / HOST_HZ;
        sim.set_active(!(PAUSE.0..PAUSE.1).contains(&seconds));
        match sim.on_frame(frame * k, &mut obs) {
            FrameDecision::Step => {}
            FrameDecision::Skip => skipped += 1,
            FrameDecision::Inactive => paused += 1,
        }
    }
    sim.finish(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        tracing::error!(error = %e, "output error");
    }
    tracing::info!(
        steps = sim.tick().0,
        skipped,
        paused,
        elapsed_ms = elapsed.as_millis() as u64,
        "run finished"
    );

    // 4. Summary.
    let swarm = sim.snapshot();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  host callbacks      : {} ({} skipped, {} paused)",
        HOST_HZ * RUN_SECONDS,
        skipped,
        paused
    );
    println!("  steps               : {}", swarm.tick().0);
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!("  collaboration links : {}", swarm.collaboration_edges().len());
    println!();

    // 5. Final formation table.
    println!(
        "{:<24} {:>8} {:>8} {:>8} {:>8} {:>6} {:>8}",
        "Agent", "x", "y", "heading", "energy", "links", "opacity"
    );
    println!("{}", "-".repeat(76));
    for agent in swarm.agents() {
        println!(
            "{:<24} {:>8.1} {:>8.1} {:>8.3} {:>8.1} {:>6} {:>8.2}",
            agent.label(),
            agent.position.x,
            agent.position.y,
            agent.heading,
            agent.energy,
            agent.neighbors.len(),
            agent.opacity(),
        );
    }

    Ok(())
}
