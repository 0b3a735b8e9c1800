//! Placeholder experiment loop consuming the resolved constants.

use std::io::{self, Write};

use seedrun_config::Constants;
use seedrun_core::{RngHandle, RunProvenance};

/// Outcome of a single seeded run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub provenance: RunProvenance,
    pub draw: f64,
    pub mutated: bool,
}

/// Executes one run per configured seed, reporting mutation events to `out`.
pub fn run_all<W: Write>(
    constants: &Constants,
    config_path: &str,
    config_hash: &str,
    out: &mut W,
) -> io::Result<Vec<RunReport>> {
    let runs = constants.runs().max(0) as u64;
    let mut reports = Vec::with_capacity(runs as usize);
    for seed in 0..runs {
        let report = run_seed(constants, config_path, config_hash, seed);
        if report.mutated {
            writeln!(out, "A mutation occurred on seed: {seed}")?;
        }
        reports.push(report);
    }
    out.flush()?;
    Ok(reports)
}

fn run_seed(constants: &Constants, config_path: &str, config_hash: &str, seed: u64) -> RunReport {
    let provenance = RunProvenance::for_run(config_path, config_hash, seed);
    let mut rng = RngHandle::for_run(seed);
    let draw = rng.next_unit();
    let mutated = draw < constants.mutation_rate();
    RunReport {
        provenance,
        draw,
        mutated,
    }
}
