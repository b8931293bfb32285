//! `kra-dashboard` command-line tool
//!
//! Renders exported KRA records as a text or JSON dashboard, and prints
//! deterministic sample data.

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use kra_core::sample;
use kra_core::{load_kras, render_text, Dashboard, DashboardConfig};
use kra_timeline::{parse_date, Clock, FixedClock, SystemClock, ViewGranularity};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Command::new("kra-dashboard")
        .version(kra_core::VERSION)
        .about("Render KRA/KPI dashboards from exported records")
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("render")
                .about("Render a dashboard from a JSON array of KRAs")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("KRA records (JSON)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .value_parser(value_parser!(PathBuf))
                        .help("Dashboard config (TOML, YAML or JSON)"),
                )
                .arg(
                    Arg::new("granularity")
                        .long("granularity")
                        .short('g')
                        .help("Override zoom level: quarters, months or weeks"),
                )
                .arg(
                    Arg::new("today")
                        .long("today")
                        .help("Pin today's date (YYYY-MM-DD)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the view model as JSON"),
                ),
        )
        .subcommand(
            Command::new("sample")
                .about("Print sample KRA records as JSON")
                .arg(
                    Arg::new("count")
                        .long("count")
                        .default_value("6")
                        .value_parser(value_parser!(usize))
                        .help("Number of KRAs to generate"),
                )
                .arg(
                    Arg::new("today")
                        .long("today")
                        .help("Pin today's date (YYYY-MM-DD)"),
                ),
        );

    let matches = cli.get_matches();
    init_tracing(matches.get_flag("log-json"));

    match matches.subcommand() {
        Some(("render", args)) => render(args),
        Some(("sample", args)) => print_sample(args),
        _ => Ok(()),
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn clock_from(args: &ArgMatches) -> anyhow::Result<Box<dyn Clock>> {
    match args.get_one::<String>("today") {
        Some(raw) => {
            let today = parse_date(raw).with_context(|| format!("invalid --today date: {raw}"))?;
            Ok(Box::new(FixedClock::new(today)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

fn render(args: &ArgMatches) -> anyhow::Result<()> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => DashboardConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(raw) = args.get_one::<String>("granularity") {
        config = config.with_granularity(raw.parse::<ViewGranularity>()?);
    }

    let input = args
        .get_one::<PathBuf>("input")
        .context("missing --input")?;
    let kras = load_kras(input).with_context(|| format!("loading KRAs from {}", input.display()))?;

    let dashboard = Dashboard::with_clock(config, clock_from(args)?);
    let view = dashboard.render(&kras);

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}

fn print_sample(args: &ArgMatches) -> anyhow::Result<()> {
    let count = args.get_one::<usize>("count").copied().unwrap_or(6);
    let clock = clock_from(args)?;
    let kras = sample::generate(clock.as_ref(), count);
    tracing::info!("generated {} sample KRAs", kras.len());
    println!("{}", serde_json::to_string_pretty(&kras)?);
    Ok(())
}
