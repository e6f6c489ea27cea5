//! Plant simulator entry point — CLI wiring and config-driven generation.

use std::path::Path;
use std::process;

use plant_sim::config::PlantConfig;
use plant_sim::io::export::export_csv;
use plant_sim::sim::generator::ReadingGenerator;
use plant_sim::sim::stats::DailyStats;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    preset: Option<String>,
    seed_override: Option<u64>,
    hours_override: Option<usize>,
    export_path: Option<String>,
    #[cfg(feature = "tui")]
    tui: bool,
}

fn print_help() {
    eprintln!("plant-sim — Renewable plant dashboard simulator");
    eprintln!();
    eprintln!("Usage: plant-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>    Load plant configuration from TOML file");
    eprintln!("  --preset <name>    Use a built-in preset (baseline)");
    eprintln!("  --seed <u64>       Override random seed");
    eprintln!("  --hours <n>        Override hours of history to generate");
    eprintln!("  --export <path>    Export the hourly series to CSV");
    #[cfg(feature = "tui")]
    eprintln!("  --tui              Launch the live terminal dashboard");
    eprintln!("  --help             Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        preset: None,
        seed_override: None,
        hours_override: None,
        export_path: None,
        #[cfg(feature = "tui")]
        tui: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--hours" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --hours requires a positive integer argument");
                    process::exit(1);
                }
                match args[i].parse::<usize>() {
                    Ok(h) if h > 0 => cli.hours_override = Some(h),
                    _ => {
                        eprintln!(
                            "error: --hours value \"{}\" is not a positive integer",
                            args[i]
                        );
                        process::exit(1);
                    }
                }
            }
            "--export" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export requires a path argument");
                    process::exit(1);
                }
                cli.export_path = Some(args[i].clone());
            }
            #[cfg(feature = "tui")]
            "--tui" => {
                cli.tui = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --config takes priority, then --preset, then baseline
    let mut config = if let Some(ref path) = cli.config_path {
        match PlantConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match PlantConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        PlantConfig::baseline()
    };

    // Apply overrides
    if let Some(seed) = cli.seed_override {
        config.plant.seed = seed;
    }
    if let Some(hours) = cli.hours_override {
        config.plant.history_hours = hours;
    }

    // Validate
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    #[cfg(feature = "tui")]
    if cli.tui {
        // Hand the dashboard the config we just loaded and validated, so
        // --config and the --seed/--hours overrides all apply there too
        let name = cli.preset.as_deref().unwrap_or(if cli.config_path.is_some() {
            "custom"
        } else {
            "baseline"
        });
        if let Err(e) = plant_sim::tui::run(config, name) {
            eprintln!("error: dashboard failed: {e}");
            process::exit(1);
        }
        return;
    }

    let mut generator = ReadingGenerator::from_config(&config);

    let current = generator.current_reading();
    println!("Current reading:\n{current}\n");

    let series = generator.hourly_series(config.plant.history_hours);
    println!("Last {} hours:", config.plant.history_hours);
    for r in &series {
        println!("{r}");
    }

    let stats = series.last().map_or_else(
        || generator.daily_stats(),
        |last| DailyStats::from_series(last.timestamp.date_naive(), &series, config.plant.capacity_kw),
    );
    println!("\n{stats}");

    // Export CSV if requested
    if let Some(ref path) = cli.export_path {
        if let Err(e) = export_csv(&series, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Series written to {path}");
    }
}
