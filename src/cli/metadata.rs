use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_config, open_source, DatatypeArg, OutputFormat};
use crate::core::source::TextSource;
use crate::formats::detection::detect_format;
use crate::formats::{Datatype, FileFormat, Registry};

#[derive(Args)]
pub struct MetadataArgs {
    /// Input file, or '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Datatype of the input (auto-detected by default)
    #[arg(long, value_enum)]
    pub datatype: Option<DatatypeArg>,

    /// Skip optional metadata for files larger than this many bytes
    #[arg(long)]
    pub max_metadata_size: Option<u64>,
}

pub fn run(
    args: MetadataArgs,
    config_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let config = load_config(config_path.as_deref())?;
    let registry = Registry::new(&config);
    let source = open_source(&args.input)?;

    let file_format = match args.datatype {
        Some(selected) => FileFormat::from(selected),
        None => detect_format(&registry, source.as_ref(), args.input.to_str())?,
    };
    let datatype = registry
        .get(file_format)
        .ok_or_else(|| anyhow::anyhow!("Datatype '{file_format}' is not registered"))?;

    let limit = args
        .max_metadata_size
        .or(config.max_optional_metadata_filesize);

    let mut fields: BTreeMap<String, Option<u64>> = BTreeMap::new();
    datatype.set_meta(source.as_ref(), &mut fields, limit)?;

    if verbose {
        eprintln!(
            "{}: {} bytes, metadata limit {}",
            args.input.display(),
            source.size()?,
            limit.map_or_else(|| "none".to_string(), |l| l.to_string())
        );
    }

    match format {
        OutputFormat::Text => print_text(&args.input, file_format, &fields),
        OutputFormat::Json => print_json(&args.input, file_format, &fields)?,
        OutputFormat::Tsv => print_tsv(&fields),
    }

    Ok(())
}

fn display_value(value: Option<u64>) -> String {
    value.map_or_else(|| "omitted".to_string(), |v| v.to_string())
}

fn print_text(input: &std::path::Path, format: FileFormat, fields: &BTreeMap<String, Option<u64>>) {
    println!("File: {}", input.display());
    println!("Format: {} ({})", format.display_name(), format.extension());
    if fields.is_empty() {
        println!("No metadata for this format");
    }
    for (name, value) in fields {
        println!("{name}: {}", display_value(*value));
    }
}

fn print_json(
    input: &std::path::Path,
    format: FileFormat,
    fields: &BTreeMap<String, Option<u64>>,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "path": input.display().to_string(),
        "extension": format.extension(),
        "edam_format": format.edam_format(),
        "metadata": fields,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(fields: &BTreeMap<String, Option<u64>>) {
    println!("field\tvalue");
    for (name, value) in fields {
        println!("{name}\t{}", value.map_or_else(String::new, |v| v.to_string()));
    }
}
