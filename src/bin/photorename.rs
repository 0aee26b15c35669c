extern crate photorename;
use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;
use photorename::cli::Cli;
use photorename::listing::{self, ListingResult};
use photorename::name::Renamed;

fn print_renamed(renamed: &[Renamed], mapping: bool) {
    for r in renamed {
        if mapping {
            println!("{} -> {}", r.original_name, r.new_name);
        } else {
            println!("{}", r.new_name);
        }
    }
}

fn init_logging(cli: &Cli) {
    dotenvy::dotenv().ok();
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run_pattern(pattern: &str, mapping: bool) -> Result<()> {
    let results = listing::rename_matching(pattern)?;
    if results.is_empty() {
        bail!("no listing files match {}", pattern);
    }
    let mut failed = 0;
    for ListingResult { path, renamed } in &results {
        println!("==> {} <==", path.display());
        match renamed {
            Ok(renamed) => print_renamed(renamed, mapping),
            Err(e) => {
                println!("{}", e);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{}/{} listings failed", failed, results.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(&args);

    if let Some(pattern) = &args.pattern {
        return run_pattern(pattern, args.mapping);
    }

    let renamed = match &args.input {
        Some(path) if !args.reads_stdin() => listing::rename_listing(path)
            .with_context(|| format!("Failed to rename {}", path.display()))?,
        _ => listing::rename_stdin().context("Failed to rename listing from stdin")?,
    };
    print_renamed(&renamed, args.mapping);
    Ok(())
}
