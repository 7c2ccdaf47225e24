use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_config, open_source, DatatypeArg, OutputFormat};
use crate::core::types::Verdict;
use crate::formats::detection::{detect_format, FormatError};
use crate::formats::{Datatype, FileFormat, Registry};

#[derive(Args)]
pub struct SniffArgs {
    /// Input files, or '-' for stdin
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Only test the inputs against this datatype
    #[arg(long, value_enum)]
    pub datatype: Option<DatatypeArg>,

    /// Bound on lines inspected by the Connectivity Table sniffer (0 = no bound)
    #[arg(long)]
    pub ct_max_lines: Option<usize>,
}

/// Result of sniffing one input
struct SniffOutcome {
    path: String,
    format: Option<FileFormat>,
    verdict: Verdict,
}

pub fn run(
    args: SniffArgs,
    config_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let mut config = load_config(config_path.as_deref())?;
    if let Some(max) = args.ct_max_lines {
        config.ct_max_lines = (max > 0).then_some(max);
    }
    let registry = Registry::new(&config);

    let mut outcomes = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        let source = open_source(input)?;
        let filename = input.to_str();

        let outcome = match args.datatype {
            Some(selected) => {
                let selected = FileFormat::from(selected);
                let datatype = registry
                    .get(selected)
                    .ok_or_else(|| anyhow::anyhow!("Datatype '{selected}' is not registered"))?;
                let verdict = datatype.sniff(source.as_ref())?;
                SniffOutcome {
                    path: input.display().to_string(),
                    format: verdict.is_accepted().then_some(selected),
                    verdict,
                }
            }
            None => match detect_format(&registry, source.as_ref(), filename) {
                Ok(detected) => SniffOutcome {
                    path: input.display().to_string(),
                    format: Some(detected),
                    verdict: Verdict::Accepted,
                },
                Err(FormatError::UnknownFormat) => SniffOutcome {
                    path: input.display().to_string(),
                    format: None,
                    verdict: Verdict::Rejected,
                },
                Err(e) => return Err(e.into()),
            },
        };

        if verbose {
            eprintln!("{}: {}", outcome.path, outcome.verdict);
        }
        outcomes.push(outcome);
    }

    match format {
        OutputFormat::Text => print_text(&outcomes),
        OutputFormat::Json => print_json(&outcomes)?,
        OutputFormat::Tsv => print_tsv(&outcomes),
    }

    Ok(())
}

fn print_text(outcomes: &[SniffOutcome]) {
    for outcome in outcomes {
        match outcome.format {
            Some(format) => println!(
                "{}: {} ({}, {})",
                outcome.path,
                format.display_name(),
                format.extension(),
                format.edam_format()
            ),
            None => println!("{}: unrecognized", outcome.path),
        }
    }
}

fn print_json(outcomes: &[SniffOutcome]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|outcome| {
            serde_json::json!({
                "path": outcome.path,
                "verdict": outcome.verdict,
                "extension": outcome.format.map(FileFormat::extension),
                "edam_format": outcome.format.map(FileFormat::edam_format),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(outcomes: &[SniffOutcome]) {
    println!("path\tverdict\textension\tedam_format");
    for outcome in outcomes {
        println!(
            "{}\t{}\t{}\t{}",
            outcome.path,
            outcome.verdict,
            outcome.format.map_or("", FileFormat::extension),
            outcome.format.map_or("", FileFormat::edam_format),
        );
    }
}
