use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use repsmith_core::*;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repsmith")]
#[command(about = "Workout program generator for coaches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a multi-week program
    Generate(GenerateArgs),

    /// Show the exercise catalog and selection lists
    Catalog,
}

#[derive(Args)]
struct GenerateArgs {
    /// Number of weeks in the program
    #[arg(long, default_value_t = 8)]
    weeks: u32,

    /// Training days per week
    #[arg(long, default_value_t = 3)]
    days_per_week: u32,

    /// Weekly set target for a muscle group, as "Name=sets" (repeatable)
    #[arg(long = "muscle", value_name = "NAME=SETS")]
    muscle_targets: Vec<String>,

    /// Weekly set target for a movement pattern, as "Name=sets" (repeatable)
    #[arg(long = "pattern", value_name = "NAME=SETS")]
    pattern_targets: Vec<String>,

    /// Warm-up style
    #[arg(long, default_value = "Dynamic Warm-Up + Activation")]
    warm_style: String,

    /// WOD style
    #[arg(long, default_value = "AMRAP")]
    wod_style: String,

    /// Accessory style
    #[arg(long, default_value = "AMRAP")]
    acc_style: String,

    /// Base volume level (Low/Medium/High Volume)
    #[arg(long, default_value = "Low Volume")]
    volume: String,

    /// Base intensity level (Low/Medium/High Intensity)
    #[arg(long, default_value = "Low Intensity")]
    intensity: String,

    /// Progression model (Linear, Undulating, Block, Conjugate)
    #[arg(long, default_value = "Linear")]
    progression: String,

    /// Exercises per WOD section (default from config)
    #[arg(long)]
    wod_exercises: Option<usize>,

    /// Exercises per accessory section (default from config)
    #[arg(long)]
    acc_exercises: Option<usize>,

    /// Free-form AMRAP format label, used for every AMRAP session row
    #[arg(long)]
    amrap_format: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Write the program to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn main() -> Result<()> {
    // Initialize logging
    repsmith_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Generate(args) => cmd_generate(args, &config),
        Commands::Catalog => cmd_catalog(&config),
    }
}

fn cmd_generate(args: GenerateArgs, config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;

    let params = ProgramParams {
        num_weeks: args.weeks,
        days_per_week: args.days_per_week,
        muscle_targets: parse_targets(&args.muscle_targets)?,
        pattern_targets: parse_targets(&args.pattern_targets)?,
        warm_style: args.warm_style,
        wod_style: args.wod_style,
        acc_style: args.acc_style,
        volume_level: args.volume,
        intensity_level: args.intensity,
        progression: args.progression,
        num_wod_exercises: args.wod_exercises.unwrap_or(config.generator.wod_exercises),
        num_acc_exercises: args
            .acc_exercises
            .unwrap_or(config.generator.accessory_exercises),
        amrap_format: args.amrap_format,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let rows = generate_program(&catalog, &params, &mut rng)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            match args.format {
                OutputFormat::Csv => write_csv(&rows, file)?,
                OutputFormat::Json => write_json(&rows, file)?,
            }
            println!(
                "✓ Generated {}-week program ({} rows)",
                params.num_weeks,
                rows.len()
            );
            println!("  Output: {}", path.display());
            println!(
                "  Generated: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M")
            );
        }
        None => {
            let stdout = io::stdout();
            match args.format {
                OutputFormat::Csv => write_csv(&rows, stdout.lock())?,
                OutputFormat::Json => write_json(&rows, stdout.lock())?,
            }
        }
    }

    Ok(())
}

fn cmd_catalog(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;

    println!("Exercise catalog ({} entries):", catalog.len());
    for entry in catalog.entries() {
        println!(
            "  {} / {}: {}",
            entry.muscle_group,
            entry.movement_pattern,
            entry.exercises.join(", ")
        );
    }
    println!();
    println!("Muscle groups: {}", MUSCLE_GROUPS.join(", "));
    println!("Movement patterns: {}", MOVEMENT_PATTERNS.join(", "));
    println!("Warm-up styles: {}", WARM_UP_TYPES.join(", "));
    println!("WOD styles: {}", WOD_STYLES.join(", "));
    println!("Progression types: {}", PROGRESSION_TYPES.join(", "));

    Ok(())
}

/// Built-in catalog plus any custom entries from config, validated.
fn load_catalog(config: &Config) -> Result<ExerciseCatalog> {
    let mut catalog = build_default_catalog();
    catalog.extend(config.catalog.custom.iter().cloned());

    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("invalid catalog".into()));
    }

    Ok(catalog)
}

/// Parse repeated "Name=sets" flags into a target collection.
///
/// Zero-set entries are dropped here, before the engine runs.
fn parse_targets(specs: &[String]) -> Result<Targets> {
    let mut targets = Targets::new();

    for spec in specs {
        let (name, sets) = spec
            .split_once('=')
            .ok_or_else(|| Error::Params(format!("target '{}' is not in NAME=SETS form", spec)))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Params(format!("target '{}' has an empty name", spec)));
        }

        let sets: u32 = sets.trim().parse().map_err(|_| {
            Error::Params(format!("target '{}' has a non-numeric set count", spec))
        })?;

        if sets == 0 {
            tracing::warn!("Ignoring zero-set target '{}'", name);
            continue;
        }

        targets.set(name, sets);
    }

    Ok(targets)
}
