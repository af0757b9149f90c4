//! Loading the registry a command works on.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{resolve_settings, Settings};
use crate::error::{RecipedexError, Result};
use crate::pack::{find_pack_file, load_pack, PACK_FILE_NAMES};
use crate::registry::RecipeRegistry;
use crate::ui::UserInterface;

use super::dispatcher::CommandResult;

/// Where the pack and settings come from.
#[derive(Debug, Clone)]
pub struct RegistrySource {
    working_dir: PathBuf,
    pack: Option<PathBuf>,
    config: Option<PathBuf>,
    debug: bool,
}

impl RegistrySource {
    /// Discover the pack and settings in `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self {
            working_dir,
            pack: None,
            config: None,
            debug: false,
        }
    }

    pub fn with_pack(mut self, pack: Option<PathBuf>) -> Self {
        self.pack = pack;
        self
    }

    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config = config;
        self
    }

    /// Force `debug_mode` on regardless of the settings file.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// The pack path in use, explicit or discovered.
    pub fn pack_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.pack {
            return Ok(path.clone());
        }
        find_pack_file(&self.working_dir).ok_or_else(|| RecipedexError::ConfigNotFound {
            path: self.working_dir.join(PACK_FILE_NAMES[0]),
        })
    }

    pub fn settings(&self) -> Result<Settings> {
        let mut settings = resolve_settings(self.config.as_deref(), &self.working_dir)?;
        settings.debug_mode |= self.debug;
        Ok(settings)
    }

    /// Load the pack and build its registry.
    pub fn load(&self) -> Result<RecipeRegistry> {
        let path = self.pack_path()?;
        debug!("Loading pack from {}", path.display());
        let settings = self.settings()?;
        load_pack(&path)?.into_registry(settings)
    }

    /// Load the registry, reporting a missing pack or settings file on the UI.
    ///
    /// `Err(result)` carries the exit result for the command to return.
    pub fn load_or_report(
        &self,
        ui: &mut dyn UserInterface,
    ) -> Result<std::result::Result<RecipeRegistry, CommandResult>> {
        match self.load() {
            Ok(registry) => Ok(Ok(registry)),
            Err(RecipedexError::ConfigNotFound { path }) => {
                ui.error(&format!("File not found: {}", path.display()));
                ui.show_hint("Pass a pack with --pack or create recipedex-pack.yml");
                Ok(Err(CommandResult::failure(2)))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_pack_reports_and_fails() {
        let temp = TempDir::new().unwrap();
        let source = RegistrySource::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();

        match source.load_or_report(&mut ui).unwrap() {
            Ok(_) => panic!("no pack should be found"),
            Err(result) => assert_eq!(result.exit_code, 2),
        }
        assert!(ui.errors()[0].contains("recipedex-pack.yml"));
    }

    #[test]
    fn discovers_pack_and_settings() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("recipedex-pack.yml"),
            "categories:\n  - uid: smelting\n    title: Smelting\n",
        )
        .unwrap();
        fs::write(temp.path().join("recipedex.yml"), "slow_lookup_threshold_ms: 40\n").unwrap();

        let source = RegistrySource::new(temp.path().to_path_buf());
        let registry = source.load().unwrap();
        assert!(registry.recipe_category("smelting").is_some());
        assert_eq!(registry.settings().slow_lookup_threshold_ms, 40);
    }

    #[test]
    fn debug_flag_overrides_settings() {
        let temp = TempDir::new().unwrap();
        let source = RegistrySource::new(temp.path().to_path_buf()).with_debug(true);
        assert!(source.settings().unwrap().debug_mode);
    }
}
