//! work-value CLI
//!
//! Compare two years' wages and prices from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Compare 1980 with the current year
//! work-value compare --data ./data
//!
//! # Pick both years and print JSON
//! work-value compare --data ./data --year-a 1970 --year-b 2020 --format json
//!
//! # Look up the record answering a single query
//! work-value resolve --data ./data --dataset averageTuitionPrice --year 1999 --field public_4yr,private_nonprofit_4yr
//!
//! # Generate sparse synthetic datasets
//! work-value generate --output ./synthetic --coverage 0.5
//! ```

use std::fs;
use std::path::PathBuf;
use std::process;

use work_value::core::record::DatasetName;
use work_value::core::year::{current_year, EngineConfig, Year};
use work_value::presentation::dashboard::Dashboard;
use work_value::presentation::sink::TableSink;
use work_value::provider::{write_dataset, DataProvider, DirectoryProvider};
use work_value::resolution::resolver::{FieldQuery, YearResolver};
use work_value::simulation::synthetic::{generate_catalog, SyntheticConfig};

fn print_usage() {
    eprintln!(
        r#"work-value — compare what an hour of work buys in two different years

USAGE:
    work-value <COMMAND> [OPTIONS]

COMMANDS:
    compare     Compare indicators and hours of work between two years
    resolve     Show the record answering a query for one dataset and year
    years       List selectable years and the default selection
    generate    Write synthetic datasets (for testing)
    help        Show this message

OPTIONS (compare):
    --data <DIR>        Directory holding the dataset JSON files
    --year-a <YEAR>     First year (default from config, 1980)
    --year-b <YEAR>     Second year (default: current year)
    --config <FILE>     JSON engine configuration
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (resolve):
    --data <DIR>        Directory holding the dataset JSON files
    --dataset <NAME>    minimumWage, medianPersonalIncome, averageSalary,
                        averageHomePrice or averageTuitionPrice
    --year <YEAR>       Target year
    --field <LIST>      Comma-separated field names
    --config <FILE>     JSON engine configuration

OPTIONS (years):
    --config <FILE>     JSON engine configuration

OPTIONS (generate):
    --output <DIR>      Directory to write the dataset files into
    --start <YEAR>      First year (default: 1950)
    --end <YEAR>        Last year (default: 2024)
    --coverage <P>      Probability a year has a record (default: 0.6)
    --seed <N>          Seed for reproducible output

ENVIRONMENT:
    RUST_LOG            Log level (e.g. debug) for diagnostics on stderr

EXAMPLES:
    work-value compare --data ./data
    work-value compare --data ./data --year-a 1970 --year-b 2020 --format json
    work-value resolve --data ./data --dataset minimumWage --year 1968 --field min_wage
    work-value generate --output ./synthetic --seed 42"#
    );
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Parsed `--flag value` pairs, rejecting anything not in `allowed`.
fn parse_flags(args: &[String], allowed: &[&str]) -> Vec<(String, String)> {
    let mut flags = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        if !allowed.contains(&flag) {
            eprintln!("Unknown option: {}", flag);
            process::exit(1);
        }
        i += 1;
        let value = args
            .get(i)
            .cloned()
            .unwrap_or_else(|| fail(format!("{} requires a value", flag)));
        flags.push((flag.to_string(), value));
        i += 1;
    }
    flags
}

fn flag<'a>(flags: &'a [(String, String)], name: &str) -> Option<&'a str> {
    flags
        .iter()
        .rev()
        .find(|(f, _)| f == name)
        .map(|(_, v)| v.as_str())
}

fn parse_number<T: std::str::FromStr>(flags: &[(String, String)], name: &str) -> Option<T> {
    flag(flags, name).map(|v| {
        v.parse()
            .unwrap_or_else(|_| fail(format!("{} requires a number, got '{}'", name, v)))
    })
}

fn load_config(flags: &[(String, String)]) -> EngineConfig {
    match flag(flags, "--config") {
        Some(path) => EngineConfig::from_json_file(path).unwrap_or_else(|e| fail(e)),
        None => EngineConfig::default(),
    }
}

fn require_data_dir(flags: &[(String, String)]) -> DirectoryProvider {
    let dir = flag(flags, "--data").unwrap_or_else(|| fail("--data <DIR> is required"));
    DirectoryProvider::new(dir)
}

fn check_selectable(config: &EngineConfig, year: Year, now: Year) {
    if !config.is_selectable(year, now) {
        let range = config.selectable_years(now);
        fail(format!(
            "year {} is outside the selectable range {}..={}",
            year,
            range.start(),
            range.end()
        ));
    }
}

fn cmd_compare(args: &[String]) {
    let flags = parse_flags(
        args,
        &["--data", "--year-a", "--year-b", "--config", "--format"],
    );
    let config = load_config(&flags);
    let provider = require_data_dir(&flags);
    let format = flag(&flags, "--format").unwrap_or("text");
    if format != "text" && format != "json" {
        fail("--format requires 'text' or 'json'");
    }

    let now = current_year();
    let (default_a, default_b) = config.default_years(now);
    let year_a = parse_number(&flags, "--year-a").unwrap_or(default_a);
    let year_b = parse_number(&flags, "--year-b").unwrap_or(default_b);
    check_selectable(&config, year_a, now);
    check_selectable(&config, year_b, now);

    let catalog = provider.load_all();
    for missing in catalog.missing() {
        eprintln!("Warning: no data loaded for {}", missing);
    }

    let mut dashboard = Dashboard::new(catalog, &config);
    let mut sink = TableSink::new();
    dashboard.initialize(year_a, year_b, &mut sink);
    let report = dashboard.report();

    if format == "json" {
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|e| fail(e));
        println!("{}", json);
    } else {
        print!("{}", report);
    }
}

fn cmd_resolve(args: &[String]) {
    let flags = parse_flags(
        args,
        &["--data", "--dataset", "--year", "--field", "--config"],
    );
    let config = load_config(&flags);
    let provider = require_data_dir(&flags);
    let name: DatasetName = flag(&flags, "--dataset")
        .unwrap_or_else(|| fail("--dataset <NAME> is required"))
        .parse()
        .unwrap_or_else(|e: String| fail(e));
    let year: Year =
        parse_number(&flags, "--year").unwrap_or_else(|| fail("--year <YEAR> is required"));
    let fields: Vec<&str> = flag(&flags, "--field")
        .unwrap_or_else(|| fail("--field <LIST> is required"))
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();
    let query = match fields.as_slice() {
        [single] => FieldQuery::from(*single),
        many => FieldQuery::from(many),
    };

    let dataset = match provider.load(name) {
        Ok(dataset) => Some(dataset),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    };

    let resolver = YearResolver::from_config(&config);
    match resolver.resolve(dataset.as_ref(), year, &query) {
        Some(record) => {
            println!("{} @ {}: record from {}", name, year, record.year);
            for value in &record.values {
                let shown = value
                    .value
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "No Data".to_string());
                println!("  {}: {}", value.field, shown);
            }
        }
        None => println!(
            "{} @ {}: no record between {} and {}",
            name,
            year,
            resolver.floor_year(),
            year
        ),
    }
}

fn cmd_years(args: &[String]) {
    let flags = parse_flags(args, &["--config"]);
    let config = load_config(&flags);
    let now = current_year();
    let range = config.selectable_years(now);
    let (year_a, year_b) = config.default_years(now);
    println!("Selectable years: {}..={}", range.start(), range.end());
    println!("Data lookup floor: {}", config.floor_year);
    println!("Default selection: {} vs {}", year_a, year_b);
}

fn cmd_generate(args: &[String]) {
    let flags = parse_flags(
        args,
        &["--output", "--start", "--end", "--coverage", "--seed"],
    );
    let output = PathBuf::from(
        flag(&flags, "--output").unwrap_or_else(|| fail("--output <DIR> is required")),
    );
    let defaults = SyntheticConfig::default();
    let config = SyntheticConfig {
        start_year: parse_number(&flags, "--start").unwrap_or(defaults.start_year),
        end_year: parse_number(&flags, "--end").unwrap_or(defaults.end_year),
        coverage: parse_number(&flags, "--coverage").unwrap_or(defaults.coverage),
        seed: parse_number(&flags, "--seed"),
        ..defaults
    };
    if !(0.0..=1.0).contains(&config.coverage) {
        fail("--coverage must be between 0 and 1");
    }
    if config.start_year > config.end_year {
        fail("--start must not be after --end");
    }

    fs::create_dir_all(&output)
        .unwrap_or_else(|e| fail(format!("creating '{}': {}", output.display(), e)));
    let catalog = generate_catalog(&config);
    for name in DatasetName::ALL {
        if let Some(dataset) = catalog.get(name) {
            let path = write_dataset(&output, dataset)
                .unwrap_or_else(|e| fail(format!("writing {}: {}", name, e)));
            eprintln!("Generated {} records → {}", dataset.len(), path.display());
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "compare" => cmd_compare(rest),
        "resolve" => cmd_resolve(rest),
        "years" => cmd_years(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
