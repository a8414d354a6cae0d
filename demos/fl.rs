use std::fs::File;
use std::io::Write;

use clap::Parser;
use color_eyre::Result;

use spl_rs::closed_form::ClosedForm;
use spl_rs::model::Model;
use spl_rs::report;
use spl_rs::taxonomy::Taxonomy;

#[derive(Debug, Parser)]
#[command(author, version, about = "Feature location by closed-form bitmask arithmetic")]
struct Cli {
    /// Number of independent features.
    #[arg(value_name = "INT")]
    features: u16,

    /// Model id (1..=19).
    #[arg(value_name = "INT", default_value = "19")]
    model: u16,

    /// File name prefix for the output.
    #[arg(long, value_name = "STR", default_value = "fl_")]
    prefix: String,

    /// Additionally dump the independent features via the constant-space
    /// arithmetic membership query (no bitstrings materialized).
    #[arg(long)]
    alt: bool,
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
    let taxonomy = Taxonomy::build(args.features, model)?;
    log::info!(
        "computing {} bitstrings of {} bits each",
        taxonomy.counts().t,
        taxonomy.counts().s
    );
    let closed_form = ClosedForm::new(&taxonomy);

    let path = format!("{}{}_model_{}.csv", args.prefix, args.features, args.model);
    let mut output = File::create(&path)?;
    report::write_header(&taxonomy, &mut output)?;
    writeln!(output)?;
    report::write_bitstrings(&closed_form, &mut output)?;

    if args.alt {
        let alt_path = format!("{}{}_F.csv", args.prefix, args.features);
        let mut alt_output = File::create(&alt_path)?;
        report::write_independent_bitstrings(&taxonomy, &mut alt_output)?;
        log::info!("independent features written to {}", alt_path);
    }

    log::info!("results written to {}", path);
    Ok(())
}
