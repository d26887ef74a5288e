use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use hybrid_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hyplan")]
#[command(about = "Hybrid strength and endurance training planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: <config dir>/hyplan/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// TOML catalog to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the weekly strength + cardio schedule
    Week {
        /// Athlete profile (TOML)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Date the week is planned from (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate the strength program
    Strength {
        /// Athlete profile (TOML)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the cardio scheduled for one day of the week
    Today {
        /// Athlete profile (TOML)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Day to look up (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Validate the active catalog
    Catalog,
}

fn main() -> Result<()> {
    hybrid_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.path.clone());
    let loaded;
    let catalog: &Catalog = match catalog_path {
        Some(ref path) => {
            loaded = Catalog::load_from(path)?;
            &loaded
        }
        None => get_default_catalog(),
    };

    match cli.command {
        Commands::Week {
            profile,
            date,
            json,
        } => {
            let profile = read_profile(profile.as_deref(), &config)?;
            ensure_valid(catalog)?;
            cmd_week(catalog, &profile, date.unwrap_or_else(local_today), wants_json(json, &config))
        }
        Commands::Strength { profile, json } => {
            let profile = read_profile(profile.as_deref(), &config)?;
            ensure_valid(catalog)?;
            cmd_strength(catalog, &profile, wants_json(json, &config))
        }
        Commands::Today { profile, date } => {
            let profile = read_profile(profile.as_deref(), &config)?;
            ensure_valid(catalog)?;
            cmd_today(catalog, &profile, date.unwrap_or_else(local_today))
        }
        Commands::Catalog => cmd_catalog(catalog),
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn wants_json(flag: bool, config: &Config) -> bool {
    flag || config.output.format == OutputFormat::Json
}

fn read_profile(path: Option<&Path>, config: &Config) -> Result<AthleteProfile> {
    let path = path.unwrap_or(config.profile.path.as_path());
    if !path.exists() {
        return Err(Error::Config(format!(
            "Athlete profile not found at {} (pass --profile)",
            path.display()
        )));
    }
    load_profile(path)
}

fn ensure_valid(catalog: &Catalog) -> Result<()> {
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation(format!("{} problem(s)", errors.len())));
    }
    Ok(())
}

fn cmd_week(
    catalog: &Catalog,
    profile: &AthleteProfile,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let plan = generate_hybrid_week(catalog, &profile.hybrid_input(), today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{}", weekly_summary(&plan));
    }
    Ok(())
}

fn cmd_strength(catalog: &Catalog, profile: &AthleteProfile, json: bool) -> Result<()> {
    let plan = generate_plan(catalog, &profile.plan_input());

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", plan.summary());
    }
    Ok(())
}

fn cmd_today(catalog: &Catalog, profile: &AthleteProfile, today: NaiveDate) -> Result<()> {
    let plan = generate_hybrid_week(catalog, &profile.hybrid_input(), today)?;
    let weekday = today.weekday();
    let day = &plan.days[weekday.num_days_from_monday() as usize];

    if let Some(ref label) = day.strength_label {
        println!("{} strength: {}", day.day, label);
    }

    match cardio_for_weekday(&plan, weekday) {
        Some(cardio) => {
            println!(
                "{} cardio: {} ({} min, {})",
                day.day, cardio.title, cardio.duration, cardio.intensity
            );
            if let Some(ref note) = day.note {
                println!("  {}", note);
            }
        }
        None if day.is_rest => println!("{}: rest day", day.day),
        None => println!("{}: no cardio scheduled", day.day),
    }
    Ok(())
}

fn cmd_catalog(catalog: &Catalog) -> Result<()> {
    ensure_valid(catalog)?;
    println!(
        "✓ Catalog OK: {} cardio templates, {} exercises",
        catalog.cardio.len(),
        catalog.exercises.len()
    );
    Ok(())
}
