use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "members_data.json";
pub const DEFAULT_EXPORT_FILE: &str = "members_export.csv";

/// Where the store keeps its files. Paths are relative to the working directory
/// unless given absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub backup_dir: PathBuf,
    pub export_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            backup_dir: PathBuf::from("."),
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl Config {
    /// Defaults overridden by `MPM_DATA_FILE`, `MPM_BACKUP_DIR` and `MPM_EXPORT_FILE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(path) = non_empty("MPM_DATA_FILE") {
            config.data_file = PathBuf::from(path);
        }
        if let Some(dir) = non_empty("MPM_BACKUP_DIR") {
            config.backup_dir = PathBuf::from(dir);
        }
        if let Some(path) = non_empty("MPM_EXPORT_FILE") {
            config.export_file = PathBuf::from(path);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_well_known_names() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("members_data.json"));
        assert_eq!(config.backup_dir, PathBuf::from("."));
    }

    #[test]
    fn lookup_overrides_defaults() {
        let vars: HashMap<&str, &str> =
            [("MPM_DATA_FILE", "/srv/mpm/data.json"), ("MPM_BACKUP_DIR", "  ")].into();
        let config = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.data_file, PathBuf::from("/srv/mpm/data.json"));
        assert_eq!(config.backup_dir, PathBuf::from("."));
        assert_eq!(config.export_file, PathBuf::from("members_export.csv"));
    }
}
