mod cli;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use porebarrier::engine::config::ScreeningConfigBuilder;
use porebarrier::engine::progress::{Progress, ProgressReporter};
use porebarrier::engine::report;
use porebarrier::workflows::screen;
use tracing::{debug, info};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;
    debug!("Full CLI arguments parsed: {:?}", &cli);

    // Validation happens inside build(), before any computation.
    let config = ScreeningConfigBuilder::new()
        .structure_file(cli.structure_file)
        .forcefield_path(cli.forcefield_path)
        .temperature(cli.temperature)
        .cutoff(cli.cutoff)
        .guest_element(cli.guest_element)
        .approx_spacing(cli.approx_spacing)
        .energy_threshold(cli.energy_threshold)
        .access_coeff(cli.access_coeff)
        .energy_step(cli.energy_step)
        .build()
        .map_err(porebarrier::engine::error::EngineError::from)?;

    let bar = sweep_bar(cli.no_progress || cli.quiet);
    let reporter = {
        let bar = bar.clone();
        ProgressReporter::with_callback(Box::new(move |event| match event {
            Progress::Phase { name } => bar.set_message(name),
            Progress::SweepStart { channels } => {
                bar.set_length(channels);
                bar.set_message("sweeping channels");
            }
            Progress::SweepAdvance => bar.inc(1),
            Progress::SweepFinish => bar.finish_and_clear(),
        }))
    };

    let outcome = screen::run(&config, &reporter)?;
    drop(reporter);
    bar.finish_and_clear();

    let stdout = std::io::stdout();
    report::write_rows(stdout.lock(), &outcome.rows)?;
    if outcome.symmetry_incomplete {
        report::write_symmetry_diagnostic(stdout.lock(), &outcome.structure_name)?;
    }
    info!(rows = outcome.rows.len(), "Screening finished");
    Ok(())
}

fn sweep_bar(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:30}] {pos}/{len}")
            .expect("static progress template must parse")
            .progress_chars("=> "),
    );
    bar
}
