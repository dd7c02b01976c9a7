//! Grow a snowflake and print it as ASCII art.
//!
//! ```text
//! RUST_LOG=rime_engine=debug cargo run -p rime-engine --example grow -- 400 61
//! ```
//!
//! Arguments: iteration count (default 200), lattice size (default 51).

use rime_core::{CellReader, SnapshotError};
use rime_engine::{BackgroundSink, GrowthConfig, OwnedSnapshotSink, Simulation};
use rime_lattice::LatticeSnapshot;
use tracing_subscriber::EnvFilter;

/// Renders each snapshot to stdout, shading crystal cells by age.
struct AsciiSink;

impl OwnedSnapshotSink for AsciiSink {
    fn consume(&mut self, snapshot: LatticeSnapshot) -> Result<(), SnapshotError> {
        const SHADES: &[u8] = b"@#%*+=-:.";
        let now = snapshot.iteration().0.max(1);
        let mut out = format!("iteration {}\n", snapshot.iteration());
        for row in 0..snapshot.rows() {
            if row % 2 == 1 {
                out.push(' ');
            }
            for col in 0..snapshot.cols() {
                let idx = (row * snapshot.cols() + col) as usize;
                let cell = &snapshot.cells()[idx];
                let ch = if cell.in_crystal {
                    let age = cell.attachment.0 * (SHADES.len() as u64 - 1) / now;
                    SHADES[age as usize] as char
                } else {
                    ' '
                };
                out.push(ch);
                out.push(' ');
            }
            out.push('\n');
        }
        println!("{out}");
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let iterations = args.next().map(|s| s.parse()).transpose()?.unwrap_or(200);
    let size = args.next().map(|s| s.parse()).transpose()?.unwrap_or(51);

    let mut sim = Simulation::new(GrowthConfig {
        rows: size,
        cols: size,
        iterations,
        diffusion_window: 8,
        ..Default::default()
    })?;

    let mut sink = BackgroundSink::spawn(AsciiSink, 4)?;
    let summary = sim.run(&mut sink)?;
    let report = sink.finish()?;

    println!(
        "{} iterations, {} crystal cells, extent {}, {} snapshots written",
        summary.iterations, summary.crystal_cells, summary.max_extent, report.written
    );
    Ok(())
}
