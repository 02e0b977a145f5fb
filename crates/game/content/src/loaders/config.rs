//! Rules configuration loader.

use std::path::Path;

use realm_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rules configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys left out of the file keep their [`RulesConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU8;

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("reputation_loss_divisor = 3\n").unwrap();
        assert_eq!(config.reputation_loss_divisor, NonZeroU8::new(3).unwrap());
        assert_eq!(config.hero_magic_realm.as_str(), RulesConfig::DEFAULT_HERO_MAGIC_REALM);
    }

    #[test]
    fn zero_divisor_is_rejected() {
        assert!(ConfigLoader::parse("reputation_loss_divisor = 0\n").is_err());
    }
}
