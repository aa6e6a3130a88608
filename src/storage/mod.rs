//! Results persistence module

use anyhow::{Context, Result};
use crate::analysis::NetworkAnalysis;
use crate::cluster::FamilyCluster;
use crate::graph::ExtendedConnection;
use crate::registry::MemberId;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use serde_json::{json, to_string_pretty};

/// Save analysis results to the specified directory
pub fn save_results(analysis: &NetworkAnalysis, output_dir: &str) -> Result<()> {
    log::info!("Saving {} clusters to {}", analysis.clusters.len(), output_dir);

    // Ensure output directory exists
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir))?;

    save_summary(analysis, output_dir)?;
    save_clusters(&analysis.clusters, output_dir)?;
    save_stats(analysis, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save a focal member's extended connections as `extended_{id}.json`
pub fn save_extended(
    focal: MemberId,
    connections: &[ExtendedConnection],
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving {} extended connections for member {}", connections.len(), focal);

    let path = Path::new(output_dir).join(format!("extended_{}.json", focal));
    let mut file = File::create(&path)?;

    let extended_json = json!({
        "memberId": focal,
        "connections": connections,
    });

    file.write_all(to_string_pretty(&extended_json)?.as_bytes())?;

    Ok(())
}

/// Save summary information
fn save_summary(analysis: &NetworkAnalysis, output_dir: &str) -> Result<()> {
    log::info!("Saving summary information");

    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let clusters = &analysis.clusters;
    let clustered_members: usize = clusters.iter().map(|c| c.size).sum();

    let summary = json!({
        "registry": {
            "member_count": analysis.member_count,
            "relationship_count": analysis.stats.total,
            "avg_connections": analysis.stats.avg_connections,
            "unclustered_members": analysis.member_count.saturating_sub(clustered_members),
        },
        "cluster_stats": {
            "cluster_count": clusters.len(),
            "total_clustered_members": clustered_members,
            "largest_cluster_size": clusters.first().map_or(0, |c| c.size),
            "smallest_cluster_size": clusters.last().map_or(0, |c| c.size),
            "max_generation_span": clusters.iter().map(|c| c.generation_span).max().unwrap_or(0),
        },
        "data_quality": {
            "unknown_types": analysis.unknown_types,
            "unreciprocated_relationships": analysis.unreciprocated,
            "dangling_relationships": analysis.dangling,
        }
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save individual cluster information
fn save_clusters(clusters: &[FamilyCluster], output_dir: &str) -> Result<()> {
    log::info!("Saving individual cluster information");

    let clusters_dir = Path::new(output_dir).join("clusters");
    fs::create_dir_all(&clusters_dir)?;

    for cluster in clusters {
        let path = clusters_dir.join(format!("cluster_{}.json", cluster.id));
        let mut file = File::create(path)?;
        file.write_all(to_string_pretty(cluster)?.as_bytes())?;
    }

    // One overview file listing every cluster without member records
    let all_clusters_path = Path::new(output_dir).join("all_clusters.json");
    let mut all_clusters_file = File::create(all_clusters_path)?;

    let clusters_json = json!({
        "clusters": clusters.iter().map(|c| {
            json!({
                "id": c.id,
                "size": c.size,
                "connectionCount": c.connection_count,
                "generationSpan": c.generation_span,
                "locations": c.locations,
            })
        }).collect::<Vec<_>>()
    });

    all_clusters_file.write_all(to_string_pretty(&clusters_json)?.as_bytes())?;

    Ok(())
}

/// Save network statistics and relationship groups
fn save_stats(analysis: &NetworkAnalysis, output_dir: &str) -> Result<()> {
    log::info!("Saving network statistics");

    let path = Path::new(output_dir).join("stats.json");
    let mut file = File::create(path)?;

    let stats = json!({
        "stats": analysis.stats,
        "groups": analysis.sections.iter().map(|s| {
            json!({
                "group": s.label,
                "priority": s.priority,
                "color": s.color,
                "count": s.items.len(),
            })
        }).collect::<Vec<_>>()
    });

    file.write_all(to_string_pretty(&stats)?.as_bytes())?;

    Ok(())
}
