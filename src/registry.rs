//! # Tool Registry
//!
//! The fixed table of external tools the test suite cares about, keyed by a
//! short lowercase name.
//!
//! | Name          | Executables (preference order) | Version flag |
//! |---------------|--------------------------------|--------------|
//! | `imagemagick` | `magick`, `convert`            | `-version`   |
//! | `ffmpeg`      | `ffmpeg`                       | `-version`   |
//! | `libreoffice` | `soffice`, `libreoffice`       | `--version`  |
//! | `pngquant`    | `pngquant`                     | `--version`  |
//! | `jpegoptim`   | `jpegoptim`                    | `--version`  |
//!
//! Nothing here is cached: every availability or version query hits the
//! filesystem (and for versions, spawns the tool) again.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::OnceLock;
use tracing::debug;

use crate::error::{Result, ToolError};
use crate::tool_resolver::ToolPathResolver;

/// An external command-line tool known to the registry
#[derive(Debug, Clone)]
pub struct Tool {
    pub name: &'static str,
    pub display_name: &'static str,
    /// Executable names, tried in order
    pub executables: &'static [&'static str],
    pub version_flag: &'static str,
    pub install_hint: &'static str,
}

impl Tool {
    /// First candidate executable that resolves
    pub fn resolve(&self, resolver: &ToolPathResolver) -> Option<PathBuf> {
        self.executables
            .iter()
            .find_map(|exe| resolver.resolve_tool(exe))
    }

    pub fn is_available(&self, resolver: &ToolPathResolver) -> bool {
        self.resolve(resolver).is_some()
    }

    /// Runs `<exe> <version_flag>` and parses the first line of output.
    pub fn version(&self, resolver: &ToolPathResolver) -> Option<String> {
        let path = self.resolve(resolver)?;
        debug!("Querying version: {:?} {}", path, self.version_flag);

        let output = Command::new(&path)
            .arg(self.version_flag)
            .stdin(Stdio::null())
            .output()
            .ok()?;

        if !output.status.success() {
            debug!("{} exited with {}", self.name, output.status);
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        // some tools print their banner on stderr
        let text = if stdout.trim().is_empty() { stderr } else { stdout };

        text.lines().next().and_then(parse_version)
    }
}

/// Extracts the first version-looking token from a banner line.
///
/// `"Version: ImageMagick 7.1.1-15 Q16-HDRI"` -> `"7.1.1-15"`,
/// `"jpegoptim v1.5.5  x86_64-pc-linux-gnu"` -> `"1.5.5"`,
/// `"ffmpeg version n6.1.1 Copyright"` -> `"6.1.1"`.
pub fn parse_version(line: &str) -> Option<String> {
    line.split_whitespace()
        .map(|token| token.trim_end_matches([',', ';']))
        .map(|token| token.strip_prefix(['v', 'n']).unwrap_or(token))
        .find(|token| {
            token.starts_with(|c: char| c.is_ascii_digit())
                && token.contains('.')
        })
        .map(str::to_string)
}

const TOOLS: &[Tool] = &[
    Tool {
        name: "imagemagick",
        display_name: "ImageMagick",
        executables: &["magick", "convert"],
        version_flag: "-version",
        install_hint: "sudo apt-get install imagemagick",
    },
    Tool {
        name: "ffmpeg",
        display_name: "FFmpeg",
        executables: &["ffmpeg"],
        version_flag: "-version",
        install_hint: "sudo apt-get install ffmpeg",
    },
    Tool {
        name: "libreoffice",
        display_name: "LibreOffice",
        executables: &["soffice", "libreoffice"],
        version_flag: "--version",
        install_hint: "sudo apt-get install libreoffice",
    },
    Tool {
        name: "pngquant",
        display_name: "pngquant",
        executables: &["pngquant"],
        version_flag: "--version",
        install_hint: "sudo apt-get install pngquant",
    },
    Tool {
        name: "jpegoptim",
        display_name: "jpegoptim",
        executables: &["jpegoptim"],
        version_flag: "--version",
        install_hint: "sudo apt-get install jpegoptim",
    },
];

/// Lookup table of known tools
#[derive(Debug)]
pub struct ToolRegistry {
    tools: &'static [Tool],
}

impl ToolRegistry {
    /// Get the singleton instance
    pub fn instance() -> &'static Self {
        static INSTANCE: OnceLock<ToolRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| Self { tools: TOOLS })
    }

    /// Fails with `ToolError::NotFound` for names outside the table
    pub fn get(&self, name: &str) -> Result<&Tool> {
        self.tools
            .iter()
            .find(|tool| tool.name == name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tools.iter().map(|tool| tool.name)
    }

    pub fn tools(&self) -> &[Tool] {
        self.tools
    }
}
