//! Visualization generation module

use anyhow::Result;
use crate::analysis::NetworkAnalysis;
use crate::cluster::FamilyCluster;
use crate::classify::classify;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Generate visualizations from analysis results
pub fn generate_visualizations(analysis: &NetworkAnalysis, output_dir: &str) -> Result<()> {
    log::info!("Generating visualizations for {} clusters", analysis.clusters.len());

    let viz_dir = Path::new(output_dir).join("visualizations");
    fs::create_dir_all(&viz_dir)?;

    generate_html_report(analysis, &viz_dir)?;
    generate_stats_files(analysis, &viz_dir)?;

    log::info!("Visualizations generated successfully");

    Ok(())
}

/// Escape text for HTML element content and attribute values
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Quote a CSV field when it contains a separator or quote
fn csv_field(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

fn write_cluster_card(file: &mut File, cluster: &FamilyCluster) -> Result<()> {
    writeln!(file, "    <div class=\"cluster-card\">")?;
    writeln!(file, "      <h3>Family Cluster {}</h3>", cluster.id)?;
    writeln!(file, "      <p>Members: {}</p>", cluster.size)?;
    writeln!(file, "      <p>Connections: {}</p>", cluster.connection_count)?;
    writeln!(file, "      <p>Generations: {}</p>", cluster.generation_span)?;
    if !cluster.locations.is_empty() {
        writeln!(file, "      <p>Locations: {}</p>", escape_html(&cluster.locations.join("; ")))?;
    }
    writeln!(file, "      <ul>")?;
    for member in &cluster.members {
        writeln!(file, "        <li>{}</li>", escape_html(&member.full_name))?;
    }
    writeln!(file, "      </ul>")?;
    writeln!(file, "    </div>")?;
    Ok(())
}

/// Generate the HTML overview page
fn generate_html_report(analysis: &NetworkAnalysis, viz_dir: &Path) -> Result<()> {
    log::info!("Generating HTML report");

    let index_path = viz_dir.join("index.html");
    let mut index_file = File::create(index_path)?;

    writeln!(index_file, "<!DOCTYPE html>")?;
    writeln!(index_file, "<html lang=\"en\">")?;
    writeln!(index_file, "<head>")?;
    writeln!(index_file, "  <meta charset=\"UTF-8\">")?;
    writeln!(index_file, "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">")?;
    writeln!(index_file, "  <title>Family Network</title>")?;
    writeln!(index_file, "  <style>")?;
    writeln!(index_file, "    body {{ font-family: Arial, sans-serif; margin: 20px; }}")?;
    writeln!(index_file, "    h1, h2 {{ color: #333; }}")?;
    writeln!(index_file, "    .cluster-list {{ display: flex; flex-wrap: wrap; }}")?;
    writeln!(index_file, "    .cluster-card {{ border: 1px solid #ddd; margin: 10px; padding: 15px; border-radius: 5px; width: 300px; }}")?;
    writeln!(index_file, "    .cluster-card h3 {{ margin-top: 0; }}")?;
    writeln!(index_file, "    .group {{ border-left: 6px solid; padding-left: 10px; margin: 10px 0; }}")?;
    writeln!(index_file, "    .tag {{ color: #fff; padding: 2px 6px; border-radius: 3px; }}")?;
    writeln!(index_file, "    .stats {{ margin-top: 20px; background-color: #f9f9f9; padding: 15px; border-radius: 5px; }}")?;
    writeln!(index_file, "  </style>")?;
    writeln!(index_file, "</head>")?;
    writeln!(index_file, "<body>")?;
    writeln!(index_file, "  <h1>Family Network</h1>")?;

    let stats = &analysis.stats;
    writeln!(index_file, "  <div class=\"stats\">")?;
    writeln!(index_file, "    <h2>Summary Statistics</h2>")?;
    writeln!(index_file, "    <p>Total Relationships: {}</p>", stats.total)?;
    writeln!(index_file, "    <p>Family Clusters: {}</p>", analysis.clusters.len())?;
    writeln!(index_file, "    <p>Average Connections: {:.2}</p>", stats.avg_connections)?;
    if let Some(most) = &stats.most_connected {
        writeln!(
            index_file,
            "    <p>Most Connected: {} ({} relationships)</p>",
            escape_html(&most.member.full_name),
            most.connections
        )?;
    }
    writeln!(index_file, "  </div>")?;

    writeln!(index_file, "  <h2>Relationship Groups</h2>")?;
    for section in &analysis.sections {
        writeln!(index_file, "  <div class=\"group\" style=\"border-color: {}\">", section.color)?;
        writeln!(index_file, "    <h3>{} ({})</h3>", escape_html(section.label), section.items.len())?;
        for relationship in &section.items {
            let color = classify(&relationship.relationship_type).color;
            writeln!(
                index_file,
                "    <span class=\"tag\" style=\"background-color: {}\">{}</span> {} &rarr; {}<br>",
                color,
                escape_html(&relationship.relationship_type),
                relationship.member_id,
                relationship.related_member_id
            )?;
        }
        writeln!(index_file, "  </div>")?;
    }

    writeln!(index_file, "  <h2>Family Clusters</h2>")?;
    writeln!(index_file, "  <div class=\"cluster-list\">")?;
    for cluster in analysis.clusters.iter().take(50) {
        write_cluster_card(&mut index_file, cluster)?;
    }
    writeln!(index_file, "  </div>")?;
    writeln!(index_file, "</body>")?;
    writeln!(index_file, "</html>")?;

    Ok(())
}

/// Generate CSV files for external charting
fn generate_stats_files(analysis: &NetworkAnalysis, viz_dir: &Path) -> Result<()> {
    log::info!("Generating statistics files");

    let stats_path = viz_dir.join("cluster_stats.csv");
    let mut stats_file = File::create(stats_path)?;

    writeln!(stats_file, "cluster_id,size,connection_count,generation_span,location_count")?;
    for cluster in &analysis.clusters {
        writeln!(
            stats_file,
            "{},{},{},{},{}",
            cluster.id,
            cluster.size,
            cluster.connection_count,
            cluster.generation_span,
            cluster.locations.len()
        )?;
    }

    let groups_path = viz_dir.join("relationship_groups.csv");
    let mut groups_file = File::create(groups_path)?;

    writeln!(groups_file, "priority,group,color,count")?;
    for section in &analysis.sections {
        writeln!(
            groups_file,
            "{},{},{},{}",
            section.priority,
            csv_field(section.label),
            section.color,
            section.items.len()
        )?;
    }

    Ok(())
}
