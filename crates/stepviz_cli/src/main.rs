use std::fs;
use std::io::{Read, Write};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use serde_json::Value;
use stepviz_algorithms::catalog;

#[derive(Parser, Debug)]
#[command(name = "stepviz", about = "Algorithm step-trace generator", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every algorithm in the catalog
    List,
    /// Show metadata and the sample input for one algorithm
    Describe {
        /// Catalog id, e.g. "binary-search"
        id: String,
    },
    /// Run an algorithm and print its trace as JSON
    Run {
        /// Catalog id, e.g. "binary-search"
        id: String,

        /// Inline JSON input; the sample input is used when neither
        /// --input nor --input-file is given
        #[arg(long, conflicts_with = "input_file")]
        input: Option<String>,

        /// Read the JSON input from a file ("-" for stdin)
        #[arg(long)]
        input_file: Option<String>,

        /// Print the human-readable narration instead of JSON
        #[arg(long)]
        narrate: bool,

        /// Pretty-print the JSON trace
        #[arg(long, conflicts_with = "narrate")]
        pretty: bool,
    },
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::List => list(),
        Command::Describe { id } => describe(&id),
        Command::Run {
            id,
            input,
            input_file,
            narrate,
            pretty,
        } => run_algorithm(&id, input, input_file, narrate, pretty),
    }
}

fn lookup(id: &str) -> anyhow::Result<&'static catalog::AlgorithmEntry> {
    match catalog::find(id) {
        Some(entry) => Ok(entry),
        None => bail!("unknown algorithm \"{id}\" (try `stepviz list`)"),
    }
}

fn list() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for entry in catalog::all() {
        let info = &entry.info;
        writeln!(
            out,
            "{:<24} {:<20} {:<7} {}",
            info.id,
            info.category.as_str(),
            info.difficulty.as_str(),
            info.name
        )?;
    }
    Ok(())
}

fn describe(id: &str) -> anyhow::Result<()> {
    let info = &lookup(id)?.info;
    println!("{} ({})", info.name, info.id);
    println!("  category:   {}", info.category.as_str());
    println!("  difficulty: {}", info.difficulty.as_str());
    println!("  time:       {}", info.time_complexity);
    println!("  space:      {}", info.space_complexity);
    println!("  reference:  {}", info.reference);
    println!();
    println!("{}", info.description);
    println!();
    println!("sample input:");
    let sample: Value = serde_json::from_str(info.sample_input)?;
    println!("{}", serde_json::to_string_pretty(&sample)?);
    Ok(())
}

fn run_algorithm(
    id: &str,
    input: Option<String>,
    input_file: Option<String>,
    narrate: bool,
    pretty: bool,
) -> anyhow::Result<()> {
    let entry = lookup(id)?;

    let raw = match (input, input_file) {
        (Some(inline), None) => inline,
        (None, Some(path)) if path == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
        (None, Some(path)) => {
            fs::read_to_string(&path).with_context(|| format!("reading {path}"))?
        }
        (None, None) => entry.info.sample_input.to_string(),
        (Some(_), Some(_)) => unreachable!("clap rejects --input with --input-file"),
    };

    let value: Value =
        serde_json::from_str(&raw).with_context(|| format!("input for \"{id}\" is not JSON"))?;
    let trace = entry
        .run(value)
        .with_context(|| format!("running \"{id}\""))?;

    if narrate {
        print!("{}", trace.narrate());
    } else if pretty {
        println!("{}", serde_json::to_string_pretty(&trace)?);
    } else {
        println!("{}", serde_json::to_string(&trace)?);
    }
    Ok(())
}
