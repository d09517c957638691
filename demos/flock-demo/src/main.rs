//! flock-demo — headless run of the rust_flock boids framework.
//!
//! ```text
//! flock-demo [CONFIG.json] [TICKS]
//! ```
//!
//! Without a config file the default tuning is used (250 boids, seed 42).
//! A config file may set any subset of `FlockConfig`'s fields; the rest keep
//! their defaults.  Set `FLOCK_LOG=debug` (or `trace`) for more output.

use std::fs::File;
use std::io::BufReader;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use log::{LevelFilter, Metadata, Record};

use fl_agent::AgentStore;
use fl_core::{AgentId, Tick};
use fl_sim::{AgentFault, FlockBuilder, FlockConfig, FlockObserver, TickReport};
use fl_spatial::GridIndex;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_TICKS:     u64 = 1_800;
const DT:                f32 = 1.0 / 60.0; // fixed 60 Hz step
const SNAPSHOT_INTERVAL: u64 = 300;        // one summary line every 5 simulated seconds

// ── Logger ────────────────────────────────────────────────────────────────────

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() -> Result<()> {
    let level = std::env::var("FLOCK_LOG")
        .ok()
        .and_then(|s| LevelFilter::from_str(&s).ok())
        .unwrap_or(LevelFilter::Info);
    log::set_logger(&LOGGER).map_err(|e| anyhow!("installing logger: {e}"))?;
    log::set_max_level(level);
    Ok(())
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Tallies faults and prints a one-line flock summary at every snapshot.
#[derive(Default)]
struct SummaryObserver {
    ticks:          u64,
    faults:         usize,
    first_fault:    Option<(Tick, AgentId, AgentFault)>,
    neighbor_total: usize,
    moved_total:    usize,
}

impl FlockObserver for SummaryObserver {
    fn on_agent_fault(&mut self, tick: Tick, agent: AgentId, fault: AgentFault) {
        self.faults += 1;
        self.first_fault.get_or_insert((tick, agent, fault));
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.neighbor_total += report.neighbor_total;
        self.moved_total += report.moved;
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        let centroid = agents.centroid().unwrap_or_default();
        let polarization = agents.polarization().unwrap_or(0.0);
        println!(
            "{:>8}  centroid ({:>7.2}, {:>7.2})  polarization {:.3}",
            tick.to_string(),
            centroid.x,
            centroid.y,
            polarization,
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging()?;

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening {path}"))?;
            let config: FlockConfig = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing {path}"))?;
            log::info!("loaded configuration from {path}");
            config
        }
        None => FlockConfig { snapshot_interval_ticks: SNAPSHOT_INTERVAL, ..FlockConfig::default() },
    };
    let ticks = match args.next() {
        Some(s) => s.parse::<u64>().with_context(|| format!("invalid tick count {s:?}"))?,
        None => DEFAULT_TICKS,
    };

    println!("=== flock-demo — rust_flock boids ===");
    println!(
        "Agents: {}  |  Ticks: {ticks} @ {DT:.4}  |  Seed: {}  |  Order: {:?}",
        config.agent_count, config.seed, config.update_order,
    );
    println!();

    // Grid cells one vision radius wide: a query touches at most 3×3 cells.
    let index = GridIndex::new(config.steering.vision_radius.max(f32::EPSILON))?;
    log::debug!("grid index, cell size {}", index.cell_size());
    let mut flock = FlockBuilder::new(config, index).build()?;
    let mut obs = SummaryObserver::default();

    let t0 = Instant::now();
    flock.run_ticks(ticks, DT, &mut obs)?;
    let elapsed = t0.elapsed();

    let centroid = flock.agents.centroid().unwrap_or_default();
    let polarization = flock.agents.polarization().unwrap_or(0.0);
    let mean_neighbors = if obs.moved_total == 0 {
        0.0
    } else {
        obs.neighbor_total as f64 / obs.moved_total as f64
    };

    println!();
    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), flock.clock);
    println!("  ticks run        : {}", obs.ticks);
    println!("  mean dt          : {:.4}", flock.clock.mean_dt().unwrap_or(0.0));
    println!("  final centroid   : ({:.3}, {:.3})", centroid.x, centroid.y);
    println!("  polarization     : {polarization:.3}");
    println!("  mean neighbors   : {mean_neighbors:.2}");
    println!("  agent faults     : {}", obs.faults);
    if let Some((tick, agent, fault)) = obs.first_fault {
        log::warn!("first fault at {tick}: {agent}: {fault}");
    }

    Ok(())
}
