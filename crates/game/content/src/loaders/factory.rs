//! Content factory for building a rules catalog from data files.

use std::path::{Path, PathBuf};

use realm_core::{CatalogSnapshot, RulesConfig, SnapshotCatalogOracle};
use tracing::info;

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};
use crate::validate::check_config;

/// Everything the rules engine needs, loaded from one data directory.
#[derive(Clone, Debug, Default)]
pub struct RulesContent {
    pub catalog: CatalogSnapshot,
    pub config: RulesConfig,
}

impl RulesContent {
    /// Oracle adapter over the loaded catalog.
    pub fn oracle(&self) -> SnapshotCatalogOracle<'_> {
        self.catalog.oracle()
    }
}

/// Content factory that loads rule content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── catalog.ron
/// └── rules.toml     (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CATALOG_FILE: &'static str = "catalog.ron";
    pub const CONFIG_FILE: &'static str = "rules.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Loads and validates everything under `data_dir`.
    pub fn load_dir(data_dir: impl Into<PathBuf>) -> LoadResult<RulesContent> {
        Self::new(data_dir).load()
    }

    /// Load the rule catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<CatalogSnapshot> {
        CatalogLoader::load(&self.data_dir.join(Self::CATALOG_FILE))
    }

    /// Load rules configuration from `rules.toml`, or defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            info!(path = %path.display(), "no rules config, using defaults");
            return Ok(RulesConfig::default());
        }
        ConfigLoader::load(&path)
    }

    pub fn load(&self) -> LoadResult<RulesContent> {
        let catalog = self.load_catalog()?;
        let config = self.load_config()?;
        check_config(&catalog, &config);

        info!(data_dir = %self.data_dir.display(), "rule content ready");
        Ok(RulesContent { catalog, config })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
