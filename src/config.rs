//! Configuration management for the registry analyzer

/// Smallest family cluster that is reported
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 2;

/// Maximum number of extended connections returned for one member
pub const DEFAULT_MAX_EXTENDED_CONNECTIONS: usize = 10;

/// Default configuration for the registry analyzer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Minimum number of members for a cluster to be kept
    pub min_cluster_size: usize,

    /// Cap on second-degree relatives returned per focal member
    pub max_extended_connections: usize,

    /// Whether the CSV/HTML exports are written alongside the JSON results
    pub write_visualizations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_cluster_size: DEFAULT_MIN_CLUSTER_SIZE,
            max_extended_connections: DEFAULT_MAX_EXTENDED_CONNECTIONS,
            write_visualizations: true,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        min_cluster_size: usize,
        max_extended_connections: usize,
        write_visualizations: bool,
    ) -> Self {
        Self {
            min_cluster_size,
            max_extended_connections,
            write_visualizations,
        }
    }
}
