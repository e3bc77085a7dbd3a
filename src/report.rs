//! # Tool Report Module
//!
//! Summary of every registered tool for humans (text) and scripts (JSON).
//!
//! ## Text example:
//! ```text
//! Tool availability (linux x86_64 (unix))
//!   ✅ ImageMagick 7.1.1-15 -> "/usr/bin/magick"
//!   ❌ FFmpeg (install with: sudo apt-get install ffmpeg)
//! ```
//!
//! ## JSON example:
//! ```json
//! {
//!   "system": { "os": "linux", "arch": "x86_64", "family": "unix" },
//!   "tools": [
//!     { "name": "ffmpeg", "display_name": "FFmpeg", "available": false,
//!       "path": null, "version": null, "install_hint": "sudo apt-get install ffmpeg" }
//!   ]
//! }
//! ```

use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::helper::TestHelper;
use crate::platform::{PlatformCommands, SystemInfo};
use crate::registry::ToolRegistry;

/// One registered tool, as seen right now
#[derive(Debug, Clone, Serialize)]
pub struct ToolStatus {
    pub name: &'static str,
    pub display_name: &'static str,
    pub available: bool,
    pub path: Option<PathBuf>,
    pub version: Option<String>,
    pub install_hint: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolReport {
    pub system: SystemInfo,
    pub tools: Vec<ToolStatus>,
}

impl ToolReport {
    /// Resolve and version-check every registered tool
    pub fn collect(helper: &TestHelper) -> Self {
        let resolver = helper.resolver();
        let tools = ToolRegistry::instance()
            .tools()
            .iter()
            .map(|tool| {
                let path = tool.resolve(resolver);
                let version = path.as_ref().and_then(|_| tool.version(resolver));
                ToolStatus {
                    name: tool.name,
                    display_name: tool.display_name,
                    available: path.is_some(),
                    path,
                    version,
                    install_hint: tool.install_hint,
                }
            })
            .collect();

        Self {
            system: PlatformCommands::system_info(),
            tools,
        }
    }

    pub fn missing(&self) -> impl Iterator<Item = &ToolStatus> {
        self.tools.iter().filter(|status| !status.available)
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "Tool availability ({})", self.system);

        for status in &self.tools {
            match (&status.path, &status.version) {
                (Some(path), Some(version)) => {
                    let _ = writeln!(report, "  ✅ {} {} -> {:?}", status.display_name, version, path);
                }
                (Some(path), None) => {
                    let _ = writeln!(report, "  ✅ {} -> {:?}", status.display_name, path);
                }
                (None, _) => {
                    let _ = writeln!(
                        report,
                        "  ❌ {} (install with: {})",
                        status.display_name, status.install_hint
                    );
                }
            }
        }

        report
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
