use crate::cli::OutputFormat;
use crate::formats::{Datatype, Registry};

pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    let registry = Registry::default();

    match format {
        OutputFormat::Text => print_text(&registry),
        OutputFormat::Json => print_json(&registry)?,
        OutputFormat::Tsv => print_tsv(&registry),
    }

    Ok(())
}

fn field_names(datatype: &dyn Datatype) -> Vec<&'static str> {
    datatype
        .metadata_fields()
        .iter()
        .map(|field| field.name())
        .collect()
}

fn print_text(registry: &Registry) {
    println!("{:<24} {:<10} {:<12} Metadata", "Datatype", "Extension", "EDAM");
    println!("{}", "-".repeat(60));
    for datatype in registry.iter() {
        let format = datatype.format();
        println!(
            "{:<24} {:<10} {:<12} {}",
            format.display_name(),
            format.extension(),
            format.edam_format(),
            field_names(datatype).join(", ")
        );
        if let Some(columns) = datatype.columns() {
            let described: Vec<String> = columns
                .iter()
                .map(|c| format!("{} ({})", c.name, c.column_type))
                .collect();
            println!("    columns: {}", described.join(", "));
        }
    }
}

fn print_json(registry: &Registry) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = registry
        .iter()
        .map(|datatype| {
            let format = datatype.format();
            serde_json::json!({
                "name": format.display_name(),
                "extension": format.extension(),
                "edam_format": format.edam_format(),
                "metadata": field_names(datatype),
                "columns": datatype.columns(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(registry: &Registry) {
    println!("extension\tedam_format\tname\tcolumns");
    for datatype in registry.iter() {
        let format = datatype.format();
        let columns = datatype
            .columns()
            .map(|cols| cols.iter().map(|c| c.name).collect::<Vec<_>>().join(","))
            .unwrap_or_default();
        println!(
            "{}\t{}\t{}\t{}",
            format.extension(),
            format.edam_format(),
            format.display_name(),
            columns
        );
    }
}
