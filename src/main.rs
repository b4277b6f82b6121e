use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use talent_discovery::config::Settings;
use talent_discovery::models::{
    AvailabilityFilter, ExperienceLevel, FilterCriteria, PaginationState, ProfileId, SortKey,
};
use talent_discovery::{BookmarkSet, Catalog, DiscoveryEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "talent-discovery")]
#[command(about = "Search a freelancer catalog and print one page of results as JSON")]
struct Cli {
    /// Catalog JSON file (defaults to catalog.path from config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Settings file (defaults to config/default.toml + config/local.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Free text matched against name, title, tagline and skills
    #[arg(long, default_value = "")]
    search: String,

    #[arg(long, default_value = "")]
    location: String,

    /// Required skill; repeat to accept any of several
    #[arg(long = "skill")]
    skills: Vec<String>,

    #[arg(long, default_value_t = 20.0)]
    min_rate: f64,

    #[arg(long, default_value_t = 200.0)]
    max_rate: f64,

    /// all, immediate, full-time, part-time or contract
    #[arg(long, default_value = "all")]
    availability: AvailabilityFilter,

    /// all, entry, mid or senior
    #[arg(long, default_value = "all")]
    experience: ExperienceLevel,

    /// rating, rate, experience, jobs or responseTime
    #[arg(long, default_value = "rating")]
    sort: SortKey,

    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Overrides discovery.page_size from config
    #[arg(long)]
    page_size: Option<usize>,

    /// Profile id to mark as saved; repeatable
    #[arg(long = "saved")]
    saved: Vec<String>,

    /// Print the catalog's skills instead of running a query
    #[arg(long)]
    list_skills: bool,
}

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("failed to load configuration")?;

    init_logging(&settings.logging.level, &settings.logging.format);

    let catalog_path = cli.catalog.clone().unwrap_or_else(|| settings.catalog.path.clone());
    let catalog = Catalog::load(&catalog_path)
        .with_context(|| format!("failed to load catalog {}", catalog_path.display()))?;

    if cli.list_skills {
        println!("{}", serde_json::to_string_pretty(&catalog.skills())?);
        return Ok(());
    }

    let criteria = cli
        .skills
        .iter()
        .fold(FilterCriteria::default(), |criteria, skill| {
            criteria.with_skill_toggled(skill.as_str())
        })
        .with_search_text(cli.search.as_str())
        .with_location_text(cli.location.as_str())
        .with_rate_range(cli.min_rate, cli.max_rate)
        .with_availability(cli.availability)
        .with_experience_level(cli.experience);

    let page_size = cli.page_size.unwrap_or_else(|| settings.discovery.page_size());
    let pagination = PaginationState::new(page_size, cli.page);

    let bookmarks: BookmarkSet = cli
        .saved
        .iter()
        .map(|id| ProfileId::from(id.as_str()))
        .collect();

    let engine = DiscoveryEngine::new(settings.discovery.engine_options());

    info!(
        "Querying {} profiles (sort: {}, page: {}, page size: {})",
        catalog.len(),
        cli.sort,
        pagination.current_page,
        pagination.page_size
    );

    let result = engine.query(catalog.profiles(), &criteria, cli.sort, pagination, &bookmarks);

    info!(
        "Returning {} of {} matching profiles (page {}/{})",
        result.items.len(),
        result.result_count(),
        result.page,
        result.total_pages
    );

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
