use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use spl_rs::model::Model;
use spl_rs::report;
use spl_rs::search::ExhaustiveSearch;
use spl_rs::systems::Systems;
use spl_rs::taxonomy::Taxonomy;

#[derive(Debug, Parser)]
#[command(author, version, about = "Feature location by exhaustive set-difference search")]
struct Cli {
    /// Number of independent features.
    #[arg(value_name = "INT")]
    features: u16,

    /// Model id (1..=19).
    #[arg(value_name = "INT")]
    model: u16,

    /// Output file; defaults to `feature_differences_for_{F}_model_{M}.csv`.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();

    let model = Model::new(args.model)?;
    log::info!("building taxonomy for F = {} under {}", args.features, model);
    let taxonomy = Taxonomy::build(args.features, model)?;
    let systems = Systems::enumerate(&taxonomy);

    log::info!(
        "searching {} difference ids over {} systems",
        taxonomy.counts().d,
        systems.len()
    );
    let search = ExhaustiveSearch::new(&taxonomy, &systems)?;
    let differences = search.run()?;

    let path = args.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "feature_differences_for_{}_model_{}.csv",
            args.features, args.model
        ))
    });
    let mut output = File::create(&path)?;
    report::write_header(&taxonomy, &mut output)?;
    writeln!(output)?;
    report::write_systems(&systems, &mut output)?;
    writeln!(output)?;
    report::write_differences(&differences, &mut output)?;

    log::info!("results written to {}", path.display());
    Ok(())
}
