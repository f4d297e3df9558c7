use clap::{Parser, Subcommand};
use crowdcheck::api::{JsonFormatter, TextFormatter};
use crowdcheck::catalog::{RewardCatalog, RewardCategory, VenueCatalog};
use crowdcheck::core::{CrowdnessLevel, GeoPoint};
use crowdcheck::reporting::{CrowdnessRefresher, PointsLedger, ReportService};
use crowdcheck::sensing::{FixedLocationSource, LocationSource, MockLocationSource, SAMPLE_READINGS};
use crowdcheck::utils::{logging, AppConfig, ConfigurationManager};
use crowdcheck::{estimate_distance, LocationValidator, MapProjector};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Half-width of the map view around the user (m)
const MAP_HALF_EXTENT_M: f64 = 1_000.0;
const DEFAULT_USER_ID: &str = "local-user";

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Crowdedness reporting with a proximity-gated report flow",
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON configuration file; defaults are used when absent
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
}

/// Where the user's position comes from. All three values select a fixed
/// reading; otherwise the mock source picks one of its samples.
#[derive(Debug, Clone, clap::Args)]
struct PositionArgs {
    #[arg(long, requires_all = ["lng", "accuracy"], allow_hyphen_values = true)]
    lat: Option<f64>,

    #[arg(long, requires_all = ["lat", "accuracy"], allow_hyphen_values = true)]
    lng: Option<f64>,

    /// Accuracy radius of the reading (m)
    #[arg(long, requires_all = ["lat", "lng"])]
    accuracy: Option<f64>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List venues with their current crowdness
    Venues {
        /// Only show venues at this level
        #[arg(long)]
        level: Option<CrowdnessLevel>,

        /// Simulate this many refresh intervals before listing
        #[arg(long, default_value = "0")]
        refresh_ticks: u32,

        /// Show each venue's position on the map view
        #[arg(long)]
        map: bool,
    },

    /// Great-circle distance between two points
    Distance {
        #[arg(allow_hyphen_values = true)]
        from_lat: f64,
        #[arg(allow_hyphen_values = true)]
        from_lng: f64,
        #[arg(allow_hyphen_values = true)]
        to_lat: f64,
        #[arg(allow_hyphen_values = true)]
        to_lng: f64,
    },

    /// Check whether a report about a venue would be accepted
    Validate {
        #[arg(long)]
        venue: String,

        #[command(flatten)]
        position: PositionArgs,
    },

    /// Report a venue's crowdness
    Report {
        #[arg(long)]
        venue: String,

        #[arg(long)]
        level: CrowdnessLevel,

        #[command(flatten)]
        position: PositionArgs,
    },

    /// List the reward store
    Rewards {
        #[arg(long)]
        category: Option<RewardCategory>,
    },

    /// Exchange points for a reward
    Redeem {
        #[arg(long)]
        item: String,
    },

    /// Print the effective configuration, or write it to a file
    Config {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn rng_for(config: &AppConfig) -> StdRng {
    match config.sensing.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn location_source(args: &PositionArgs, config: &AppConfig) -> Result<Box<dyn LocationSource>, Box<dyn Error>> {
    if let (Some(lat), Some(lng), Some(accuracy)) = (args.lat, args.lng, args.accuracy) {
        return Ok(Box::new(FixedLocationSource::new(lat, lng, accuracy)?));
    }

    // Offset the seed so the mock reading is independent of the venue levels
    let rng = match config.sensing.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };
    Ok(Box::new(MockLocationSource::new(rng).with_latency(config.acquisition_delay())))
}

fn build_service(
    config: &AppConfig,
    source: Box<dyn LocationSource>,
) -> ReportService<Box<dyn LocationSource>> {
    let venues = VenueCatalog::seeded(&mut rng_for(config), now_ms());
    ReportService::new(
        LocationValidator::new(config.admission),
        source,
        venues,
        RewardCatalog::standard(),
        PointsLedger::new(DEFAULT_USER_ID, config.points.initial_points),
        config.points.points_per_report,
    )
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", JsonFormatter::pretty().format_json(value)?);
    Ok(())
}

#[derive(Serialize)]
struct DistanceOutput {
    from: GeoPoint,
    to: GeoPoint,
    distance_m: f64,
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let manager = match &cli.config {
        Some(path) if path.exists() => ConfigurationManager::from_file(path)?,
        _ => ConfigurationManager::new(),
    };
    let config = manager.config().clone();
    let text = TextFormatter::new();

    match cli.command {
        Command::Venues { level, refresh_ticks, map } => {
            let mut rng = rng_for(&config);
            let start = now_ms();
            let mut catalog = VenueCatalog::seeded(&mut rng, start);

            let mut refresher = CrowdnessRefresher::new(config.refresh_interval(), start);
            for _ in 0..refresh_ticks {
                let due = refresher.next_due_ms();
                refresher.poll(due, &mut catalog, &mut rng);
            }
            debug!(ticks = refresher.ticks(), "venue list prepared");

            let venues = match level {
                Some(level) => catalog.by_level(level),
                None => catalog.nearest_first(),
            };

            if cli.json {
                return print_json(&venues);
            }

            println!("{}", text.format_counts(&catalog.counts()));
            let projector = MapProjector::new(SAMPLE_READINGS[0].point, MAP_HALF_EXTENT_M);
            for venue in venues {
                println!("{}", text.format_venue(venue));
                if map {
                    let pin = projector.pin(venue.location);
                    println!(
                        "    map: {:.1}% from left, {:.1}% from top{}",
                        pin.left_pct,
                        pin.top_pct,
                        if pin.clamped { " (edge)" } else { "" }
                    );
                }
            }
        }

        Command::Distance { from_lat, from_lng, to_lat, to_lng } => {
            let from = GeoPoint::new(from_lat, from_lng);
            let to = GeoPoint::new(to_lat, to_lng);
            let distance_m = estimate_distance(from, to);

            if cli.json {
                return print_json(&DistanceOutput { from, to, distance_m });
            }
            println!("{} -> {}: {:.1} m", from, to, distance_m);
        }

        Command::Validate { venue, position } => {
            let source = location_source(&position, &config)?;
            let mut service = build_service(&config, source);
            let result = service.check_location(&venue)?;

            if cli.json {
                return print_json(&result);
            }
            println!("{}", text.format_validation(&result));
        }

        Command::Report { venue, level, position } => {
            let source = location_source(&position, &config)?;
            let mut service = build_service(&config, source);
            let at_ms = now_ms();
            let receipt = service.submit_report(&venue, level, at_ms)?;

            if cli.json {
                return print_json(&receipt);
            }
            let name = &service.venues().get(&venue)?.name;
            println!("{}: {} 제보 완료 (+{}P)", name, receipt.level, receipt.points_earned);
            println!("{}", text.format_validation(&receipt.validation));
            print!("{}", text.format_points(service.ledger(), at_ms));
        }

        Command::Rewards { category } => {
            let catalog = RewardCatalog::standard();
            let items = catalog.filter(category);

            if cli.json {
                return print_json(&items);
            }
            for item in items {
                println!("{}", text.format_reward(item));
            }
        }

        Command::Redeem { item } => {
            let source: Box<dyn LocationSource> = Box::new(MockLocationSource::new(rng_for(&config)));
            let mut service = build_service(&config, source);
            let at_ms = now_ms();
            let redemption = service.redeem_reward(&item, at_ms)?;

            if cli.json {
                return print_json(&redemption);
            }
            println!("Redeemed {} for {}P", redemption.item_id, redemption.points_spent);
            print!("{}", text.format_points(service.ledger(), at_ms));
        }

        Command::Config { output } => {
            let report = ConfigurationManager::validate_config(&config);
            for warning in &report.warnings {
                eprintln!("warning: {}", warning);
            }

            match output {
                Some(path) => {
                    let mut manager = manager;
                    manager.save_to_file(&path)?;
                    info!(path = %path.display(), "configuration written");
                }
                None => print_json(&config)?,
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
