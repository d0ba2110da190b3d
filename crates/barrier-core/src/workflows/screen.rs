use crate::core::forcefield::params::GuestForcefield;
use crate::core::io::cif;
use crate::engine::config::ScreeningConfig;
use crate::engine::dimensionality::{DimensionalityClassifier, WindingClassifier};
use crate::engine::error::EngineError;
use crate::engine::fieldmap::{EnergyGridProvider, LjGridProvider};
use crate::engine::labeling::{ComponentLabeler, Labeling, PeriodicBfsLabeler};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::report::{BarrierRow, StructureDescriptors, assemble_rows};
use crate::engine::sweep::{PercolationSweep, SweepParams, SweepScratch};
use crate::engine::symmetry::{SignatureReducer, SymmetryReducer};
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Everything one run produces: the output rows in channel-visit order and
/// the symmetry soft-failure flag.
#[derive(Debug, Clone)]
pub struct ScreeningOutcome {
    pub structure_name: String,
    pub rows: Vec<BarrierRow>,
    pub symmetry_incomplete: bool,
}

/// Screens one structure end to end.
///
/// The configuration is validated before any computation; a validation
/// failure produces no output. Soft symmetry failures never abort the run,
/// they only set [`ScreeningOutcome::symmetry_incomplete`].
#[instrument(skip_all, name = "screening_workflow")]
pub fn run(
    config: &ScreeningConfig,
    reporter: &ProgressReporter,
) -> Result<ScreeningOutcome, EngineError> {
    config.validate()?;
    let started = Instant::now();

    reporter.report(Progress::Phase { name: "Input" });
    let structure = cif::load_structure(&config.structure_file)?;
    let forcefield = GuestForcefield::load(&config.forcefield_path)?;
    info!(
        structure = %structure.name,
        sites = structure.sites.len(),
        "Loaded structure and force field"
    );

    reporter.report(Progress::Phase { name: "Energy grid" });
    let (grid, sums) = LjGridProvider.build(&structure, &forcefield, config)?;

    reporter.report(Progress::Phase { name: "Channels" });
    let labeler = PeriodicBfsLabeler;
    let classifier = WindingClassifier;
    let mut loose = Labeling::with_len(grid.len());
    let all_cells = vec![true; grid.len()];
    labeler.label_into(&grid, &all_cells, config.energy_threshold, &mut loose);
    let spans = classifier.classify(&grid, &loose);
    // Pockets are dropped here; only periodically connected clusters are
    // candidate diffusion channels.
    let channels: Vec<u16> = (1..=loose.count)
        .map(|label| label as u16)
        .filter(|&label| spans[usize::from(label) - 1].is_percolating())
        .collect();
    info!(
        clusters = loose.count,
        channels = channels.len(),
        "Partitioned pore network at the loose cutoff"
    );

    let orbits = SignatureReducer::default().reduce(&grid, &loose, &channels);
    if orbits.incomplete {
        warn!("Symmetry reduction left ambiguous orbits; continuing best-effort");
    }

    reporter.report(Progress::SweepStart {
        channels: orbits.orbits.len() as u64,
    });
    let sweep = PercolationSweep::new(
        &labeler,
        &classifier,
        SweepParams {
            energy_threshold: config.energy_threshold,
            energy_step: config.energy_step,
        },
    );
    let mut scratch = SweepScratch::new(grid.len());
    let mut records = Vec::new();
    for orbit in &orbits.orbits {
        if let Some(record) = sweep.barrier_for_channel(&grid, &loose, orbit[0], &mut scratch) {
            records.push(record);
        }
        reporter.report(Progress::SweepAdvance);
    }
    reporter.report(Progress::SweepFinish);
    info!(
        orbits = orbits.orbits.len(),
        barriers = records.len(),
        "Percolation sweep finished"
    );

    let descriptors = StructureDescriptors::new(&grid, &sums, config.temperature);
    let rows = assemble_rows(
        &structure.name,
        &descriptors,
        &records,
        started.elapsed().as_secs_f64(),
    );
    Ok(ScreeningOutcome {
        structure_name: structure.name,
        rows,
        symmetry_incomplete: orbits.incomplete,
    })
}
