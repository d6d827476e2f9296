//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_cache::FileStore;
use storefront_commerce::cart::CartStore;
use storefront_commerce::config::StorefrontConfig;

use crate::output::Output;

/// Config file names searched for, in order, in each directory.
const CONFIG_NAMES: [&str; 2] = ["storefront.toml", ".storefront.toml"];

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_in(cwd, config_path, output)
    }

    pub(crate) fn load_in(cwd: PathBuf, config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = if let Some(path) = config_path {
            StorefrontConfig::load(path)
                .with_context(|| format!("Failed to load config file: {}", path))?
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some(path) => {
                    output.debug(&format!("Using config {}", path.display()));
                    StorefrontConfig::load(&path)
                        .with_context(|| format!("Failed to load config file: {}", path.display()))?
                }
                None => StorefrontConfig::default(),
            }
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Directory of the file-backed store.
    pub fn data_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.data_dir)
    }

    /// Open the cart stored in the data directory.
    pub fn open_cart(&self) -> Result<CartStore<FileStore>> {
        let dir = self.data_dir();
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open storage at {}", dir.display()))?;
        self.output.debug(&format!("Cart data in {}", store.dir().display()));
        Ok(CartStore::open(store, &self.config.cart))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx =
            Context::load_in(dir.path().to_path_buf(), None, Output::new(false, true)).unwrap();
        assert_eq!(ctx.config, StorefrontConfig::default());
        assert_eq!(ctx.data_dir(), dir.path().join(".storefront"));
    }

    #[test]
    fn test_finds_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("storefront.toml"),
            "[storage]\ndata_dir = \"carts\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = Context::load_in(nested.clone(), None, Output::new(false, true)).unwrap();
        assert_eq!(ctx.data_dir(), nested.join("carts"));
    }

    #[test]
    fn test_cart_persists_between_contexts() {
        let dir = tempfile::tempdir().unwrap();
        let ctx =
            Context::load_in(dir.path().to_path_buf(), None, Output::new(false, true)).unwrap();

        let mut cart = ctx.open_cart().unwrap();
        cart.add_item(&storefront_commerce::catalog::ProductSnapshot::new(
            storefront_commerce::ProductId::new(1),
            "Lamp",
            1000,
        ));

        let reopened = ctx.open_cart().unwrap();
        assert_eq!(reopened.total_items(), 1);
        assert_eq!(reopened.cache().store().dir(), ctx.data_dir().as_path());
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = Context::load_in(
            dir.path().to_path_buf(),
            missing.to_str(),
            Output::new(false, true),
        );
        assert!(result.is_err());
    }
}
