//! # Image Resize Module
//!
//! Resizes images by shelling out to ImageMagick. The `image` crate is only
//! used elsewhere to read dimensions back; decoding and encoding stay with
//! the external tool so tests exercise the same binary the product uses.
//!
//! ## Tool strategy
//! 1. **magick** (ImageMagick 7.x): resolved path from the tools dir or `PATH`,
//!    else the bare name if the existence probe finds it
//! 2. **convert** (ImageMagick 6.x): resolved path, else the bare name
//!
//! The command is always `<tool> <input> -resize <W>x<H>! <output>`, so the
//! aspect ratio is never preserved.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

use crate::error::{Result, ToolError};
use crate::platform::PlatformCommands;
use crate::tool_resolver::ToolPathResolver;
use crate::utils::to_string_vec;

/// ImageMagick geometry forcing exact dimensions
pub fn stretch_geometry(width: u32, height: u32) -> String {
    format!("{}x{}!", width, height)
}

/// Runs ImageMagick resizes
#[derive(Debug, Clone, Default)]
pub struct ImageResizer {
    resolver: ToolPathResolver,
    platform: PlatformCommands,
}

impl ImageResizer {
    pub fn new(resolver: ToolPathResolver) -> Self {
        Self {
            resolver,
            platform: PlatformCommands::current(),
        }
    }

    /// Executable to spawn: `magick` before `convert`, resolved paths first
    pub fn select_tool(&self) -> PathBuf {
        if let Some(path) = self.resolver.resolve_tool("magick") {
            return path;
        }
        if self.platform.command_exists("magick") {
            return PathBuf::from("magick");
        }
        self.resolver
            .resolve_tool("convert")
            .unwrap_or_else(|| PathBuf::from("convert"))
    }

    pub fn build_args(&self, input: &Path, output: &Path, width: u32, height: u32) -> Vec<String> {
        let geometry = stretch_geometry(width, height);
        let input = input.to_string_lossy();
        let output = output.to_string_lossy();
        to_string_vec([&*input, "-resize", geometry.as_str(), &*output])
    }

    /// Resize `input` into `output`.
    ///
    /// # Errors
    /// - `ToolError::Spawn` if the selected tool could not be started
    /// - `ToolError::CommandFailed` with the tool's stderr on non-zero exit
    pub fn resize(&self, input: &Path, output: &Path, width: u32, height: u32) -> Result<()> {
        let tool = self.select_tool();
        let args = self.build_args(input, output, width, height);
        let command_line = format!("{} {}", tool.display(), args.join(" "));
        debug!("Command: {}", command_line);

        let result = Command::new(&tool)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ToolError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            warn!("Resize failed with {}: {}", tool.display(), stderr);
            return Err(ToolError::CommandFailed {
                command: command_line,
                stderr,
            });
        }

        debug!("Resized {} to {}x{} with {}", output.display(), width, height, tool.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_stretch_geometry() {
        assert_eq!(stretch_geometry(50, 20), "50x20!");
    }

    #[test]
    fn test_build_args_order() {
        let resizer = ImageResizer::default();
        let args = resizer.build_args(
            &PathBuf::from("fixtures/red.png"),
            &PathBuf::from("out/small.png"),
            50,
            50,
        );
        assert_eq!(args, vec!["fixtures/red.png", "-resize", "50x50!", "out/small.png"]);
    }

    #[test]
    fn test_select_tool_is_imagemagick() {
        let tool = ImageResizer::default().select_tool();
        let stem = tool.file_stem().unwrap().to_string_lossy().into_owned();
        assert!(stem == "magick" || stem == "convert");
    }

    #[cfg(unix)]
    #[test]
    fn test_tools_dir_convert_is_preferred_over_bare_name() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let convert = temp_dir.path().join("convert");
        std::fs::write(&convert, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&convert, std::fs::Permissions::from_mode(0o755)).unwrap();

        let resolver = ToolPathResolver::new(Some(temp_dir.path().to_path_buf()));
        let selected = ImageResizer::new(resolver.clone()).select_tool();
        // a system magick still wins over a tools-dir convert
        if resolver.resolve_tool("magick").is_none() && !PlatformCommands::current().command_exists("magick") {
            assert_eq!(selected, convert);
        }
    }
}
