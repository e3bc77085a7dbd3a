//! # Test Helper
//!
//! The facade test suites use: tool lookup, availability and versions, the
//! command probe, fixture images, temp directories and the skip guard.
//!
//! ```rust,no_run
//! use media_toolcheck::{skip_unless_tool_available, FixtureColor, ImageSize, TestHelper};
//!
//! fn thumbnails_are_small() {
//!     skip_unless_tool_available!("imagemagick");
//!
//!     let helper = TestHelper::from_env().unwrap();
//!     let dir = helper.create_temp_dir("thumbs").unwrap();
//!     let path = dir.join("thumb.png");
//!     helper
//!         .create_test_image(&path, "20x20".parse().unwrap(), FixtureColor::Red)
//!         .unwrap();
//! }
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::fixtures::{FixtureColor, FixtureSet, ImageSize};
use crate::platform::PlatformCommands;
use crate::registry::{Tool, ToolRegistry};
use crate::tool_resolver::ToolPathResolver;

/// Tool name -> availability, for test-run summaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AvailableTools(BTreeMap<String, bool>);

impl AvailableTools {
    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, available)| (name.as_str(), *available))
    }
}

/// Entry point for tests that depend on external tools
#[derive(Debug, Clone)]
pub struct TestHelper {
    config: Config,
    resolver: ToolPathResolver,
    fixtures: FixtureSet,
    platform: PlatformCommands,
}

impl TestHelper {
    pub fn new(config: Config) -> Self {
        let resolver = ToolPathResolver::new(config.tools_dir.clone());
        let fixtures = FixtureSet::new(config.fixtures_dir.clone(), resolver.clone());
        Self {
            config,
            resolver,
            fixtures,
            platform: PlatformCommands::current(),
        }
    }

    /// Helper configured from the user config file and environment
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(Config::load()?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn resolver(&self) -> &ToolPathResolver {
        &self.resolver
    }

    pub fn fixtures(&self) -> &FixtureSet {
        &self.fixtures
    }

    /// Registry lookup; unknown names fail with `ToolError::NotFound`
    pub fn get_tool(&self, name: &str) -> Result<&'static Tool> {
        ToolRegistry::instance().get(name)
    }

    /// `false` for unknown tools as well as missing ones
    pub fn tool_available(&self, name: &str) -> bool {
        match self.get_tool(name) {
            Ok(tool) => tool.is_available(&self.resolver),
            Err(e) => {
                debug!("{}", e);
                false
            }
        }
    }

    pub fn tool_version(&self, name: &str) -> Option<String> {
        self.get_tool(name).ok()?.version(&self.resolver)
    }

    /// Availability of every registered tool, computed now
    pub fn available_tools(&self) -> AvailableTools {
        AvailableTools(
            ToolRegistry::instance()
                .names()
                .map(|name| (name.to_string(), self.tool_available(name)))
                .collect(),
        )
    }

    /// Probe `cmd` with `where`/`which`
    pub fn command_exists(&self, cmd: &str) -> bool {
        self.platform.command_exists(cmd)
    }

    pub fn create_test_image(&self, path: &Path, size: ImageSize, color: FixtureColor) -> Result<()> {
        self.fixtures.create_test_image(path, size, color)
    }

    /// New uniquely-named directory under the system temp dir, named `<prefix>XXXXXX`.
    ///
    /// The directory is left on disk; removing it is up to the caller.
    pub fn create_temp_dir(&self, prefix: &str) -> Result<PathBuf> {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir()?.keep();
        debug!("Created temp dir {}", dir.display());
        Ok(dir)
    }

    /// `create_temp_dir` with `Config::temp_prefix`
    pub fn create_default_temp_dir(&self) -> Result<PathBuf> {
        self.create_temp_dir(&self.config.temp_prefix)
    }

    /// Message explaining the skip, or `None` when the tool is usable
    pub fn skip_message(&self, name: &str) -> Option<String> {
        if self.tool_available(name) {
            None
        } else {
            Some(format!("{} not available, skipping", display_name(name)))
        }
    }
}

impl Default for TestHelper {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Name shown in skip messages: capitalized, except `ffmpeg` which is kept as is.
pub fn display_name(name: &str) -> String {
    if name == "ffmpeg" {
        return name.to_string();
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Returns from the enclosing test when the named tool is unavailable.
///
/// Uses `TestHelper::from_env()`, or the helper passed as first argument.
#[macro_export]
macro_rules! skip_unless_tool_available {
    ($helper:expr, $name:expr) => {
        if let ::std::option::Option::Some(message) = $helper.skip_message($name) {
            ::std::eprintln!("{}", message);
            return;
        }
    };
    ($name:expr) => {
        let helper = match $crate::TestHelper::from_env() {
            ::std::result::Result::Ok(helper) => helper,
            ::std::result::Result::Err(_) => $crate::TestHelper::default(),
        };
        $crate::skip_unless_tool_available!(helper, $name);
    };
}
