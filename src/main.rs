use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use owo_colors::OwoColorize;
use serde_json::Value;

use celltrim::cli::{Args, OutputFormat};
use celltrim::error::Result;
use celltrim::output::{
    format_table_html, format_table_json, format_table_text, format_value, format_value_json,
};
use celltrim::render::Ellipsis;
use celltrim::table::Table;

fn main() {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Some(ref text) = args.value {
        // Single value mode
        let value = if args.number {
            serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.clone()))
        } else {
            Value::String(text.clone())
        };
        let context = args.render_context();
        let config = args.ellipsis_config();
        if args.verbose {
            eprintln!(
                "{}",
                format!("Rendering for the {} pass (cutoff {})", context, config.cutoff).dimmed()
            );
        }
        match args.format {
            OutputFormat::Json => println!("{}", format_value_json(&value, context, &config)),
            OutputFormat::Html | OutputFormat::Text => {
                println!("{}", format_value(&value, context, &config))
            }
        }
        return;
    }

    if let Err(e) = run_table(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_table(args: &Args) -> Result<()> {
    let mut table = match args.input_path() {
        Some(path) => Table::from_json(BufReader::new(File::open(path)?))?,
        None => Table::from_json(io::stdin().lock())?,
    };

    if args.verbose {
        eprintln!(
            "{}",
            format!(
                "Loaded {} row(s), {} column(s)",
                table.len(),
                table.columns().len()
            )
            .dimmed()
        );
    }

    // Ellipsis applies to the named columns, or every column that is not a link
    let targets: Vec<String> = if args.columns.is_empty() {
        table
            .column_names()
            .filter(|name| !args.links.iter().any(|l| l == name))
            .map(str::to_string)
            .collect()
    } else {
        args.columns.clone()
    };
    let renderer = Ellipsis::new(args.ellipsis_config());
    for column in &targets {
        table.set_renderer(column, renderer)?;
    }
    for column in &args.links {
        table.set_renderer(column, args.link())?;
    }

    if args.verbose {
        for column in table.columns() {
            eprintln!(
                "{}",
                format!("  {} -> {}", column.name(), column.renderer_name()).dimmed()
            );
        }
    }

    if let Some(ref needle) = args.filter {
        let before = table.len();
        table.filter(needle);
        if args.verbose {
            eprintln!(
                "{}",
                format!("Filter '{}' kept {} of {} row(s)", needle, table.len(), before).dimmed()
            );
        }
    }

    if let Some(ref column) = args.sort {
        table.sort_by(column, args.sort_order())?;
        if args.verbose {
            eprintln!(
                "{}",
                format!("Sorted by {} ({:?})", column, args.sort_order()).dimmed()
            );
        }
    }

    match args.format {
        OutputFormat::Html => print!("{}", format_table_html(&table)),
        OutputFormat::Text => print!("{}", format_table_text(&table)),
        OutputFormat::Json => println!("{}", format_table_json(&table)),
    }

    Ok(())
}
