use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library: LibraryConfig::default(),
        }
    }
}

/// Library storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Catalog data file read at startup and written on save.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Fixed maximum number of games.
    #[serde(default = "default_max_games")]
    pub max_games: usize,
    /// Fixed maximum number of members.
    #[serde(default = "default_max_members")]
    pub max_members: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            max_games: default_max_games(),
            max_members: default_max_members(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("games.csv")
}

fn default_max_games() -> usize {
    1000
}

fn default_max_members() -> usize {
    100
}
