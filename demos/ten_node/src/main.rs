//! ten_node — reference scenario for the rust_aco colony simulator.
//!
//! 120 units explore a ten-node lattice from nest A for 1 000 rounds.  The
//! final pheromone table shows which routes the colony reinforced; set
//! `RUST_LOG=debug` to watch per-round counts.

mod network;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::info;

use aco_core::{ColonyConfig, Round};
use aco_output::{ColonyOutputObserver, CsvWriter, OutputWriter, pheromone_report};
use aco_sim::{ColonyBuilder, ColonyObserver, RoundSummary};
use aco_unit::Unit;

use network::{build_network, labels};

// ── Constants ─────────────────────────────────────────────────────────────────

const UNIT_COUNT:               usize = 120;
const TOTAL_ROUNDS:             u64   = 1_000;
const SEED:                     u64   = 42;
const SNAPSHOT_INTERVAL_ROUNDS: u64   = 100;
const OUTPUT_DIR:               &str  = "output/ten_node";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:          ColonyOutputObserver<W>,
    snapshot_rows:  usize,
    summary_rows:   usize,
    retreats:       usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: ColonyOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, retreats: 0 }
    }
}

impl<W: OutputWriter> ColonyObserver for CountingObserver<W> {
    fn on_round_end(&mut self, summary: &RoundSummary) {
        self.summary_rows += 1;
        self.retreats += summary.retreated;
        self.inner.on_round_end(summary);
    }

    fn on_snapshot(&mut self, round: Round, units: &[Unit]) {
        self.snapshot_rows += units.len();
        self.inner.on_snapshot(round, units);
    }

    fn on_run_end(&mut self, final_round: Round, graph: &aco_graph::PheromoneGraph) {
        self.inner.on_run_end(final_round, graph);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    println!("=== ten_node — rust_aco colony ===");
    println!("Units: {UNIT_COUNT}  |  Rounds: {TOTAL_ROUNDS}  |  Seed: {SEED}");
    println!();

    // 1. Graph.
    let labels = labels();
    let graph = build_network()?;
    println!("Lattice: {} nodes, {} edges", graph.node_count(), graph.edge_count());

    // 2. Colony.
    let config = ColonyConfig {
        num_threads:              None, // all logical cores
        snapshot_interval_rounds: SNAPSHOT_INTERVAL_ROUNDS,
        ..ColonyConfig::new(UNIT_COUNT, TOTAL_ROUNDS, SEED)
    };
    let mut colony = ColonyBuilder::new(config, graph).build()?;

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(ColonyOutputObserver::new(writer, labels.clone()));

    // 4. Run.
    let t0 = Instant::now();
    colony.run(&mut obs)?;
    let elapsed = t0.elapsed();
    info!(elapsed_ms = elapsed.as_millis() as u64, "run complete");

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  unit_paths.csv      : {} rows", obs.snapshot_rows);
    println!("  round_summaries.csv : {} rows", obs.summary_rows);
    println!("  retreats            : {}", obs.retreats);
    println!();

    // 6. Final pheromone table.
    for row in pheromone_report(colony.graph(), &labels) {
        println!("{row}");
    }

    Ok(())
}
