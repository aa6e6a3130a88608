use anyhow::{Context, Result};
use clap::Parser;
use family_registry_graph::{data, storage, viz, Config, RegistryAnalyzer};

#[derive(Parser, Debug)]
#[clap(
    name = "family-registry-graph",
    about = "Family cluster and relationship analysis of registry data"
)]
struct Cli {
    /// Path to the members JSON file
    #[clap(long)]
    members: String,

    /// Path to the relationships JSON file
    #[clap(long)]
    relationships: String,

    /// Output directory for results
    #[clap(long, default_value = "registry_results")]
    output_dir: String,

    /// Member whose extended (second-degree) connections are reported
    #[clap(long)]
    focal_member: Option<u64>,

    /// Minimum cluster size
    #[clap(long, default_value = "2")]
    min_cluster_size: usize,

    /// Maximum number of extended connections per member
    #[clap(long, default_value = "10")]
    max_extended: usize,

    /// Skip visualizations
    #[clap(long)]
    skip_viz: bool,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    log::info!("Starting registry analysis");
    log::info!("Members: {}", args.members);
    log::info!("Relationships: {}", args.relationships);
    log::info!("Output: {}", args.output_dir);

    let config = Config::new(args.min_cluster_size, args.max_extended, !args.skip_viz);

    // 1. Load data
    let members = data::json::load_members(&args.members)
        .with_context(|| format!("loading members from {}", args.members))?;
    let relationships = data::json::load_relationships(&args.relationships)
        .with_context(|| format!("loading relationships from {}", args.relationships))?;

    // 2. Analyze
    let mut analyzer = RegistryAnalyzer::new(config);
    let analysis = analyzer.analyze(&members, &relationships);

    log::info!(
        "Found {} family clusters across {} relationships",
        analysis.clusters.len(),
        analysis.stats.total
    );
    if !analysis.unknown_types.is_empty() {
        log::warn!("Unrecognized relationship types: {}", analysis.unknown_types.join(", "));
    }
    if !analysis.unreciprocated.is_empty() {
        log::warn!(
            "{} relationships have no reverse relationship recorded",
            analysis.unreciprocated.len()
        );
    }
    if analysis.dangling > 0 {
        log::warn!("{} relationships reference unknown members", analysis.dangling);
    }

    // 3. Save results
    storage::save_results(&analysis, &args.output_dir)?;

    // 4. Extended connections for the requested member
    if let Some(focal) = args.focal_member {
        let connections = analyzer.extended_connections(&members, &relationships, focal)?;
        storage::save_extended(focal, &connections, &args.output_dir)?;
    }

    // 5. Generate visualizations if requested
    if analyzer.config().write_visualizations {
        viz::generate_visualizations(&analysis, &args.output_dir)?;
    }

    log::info!("Analysis complete. Results saved to {}", args.output_dir);

    Ok(())
}
