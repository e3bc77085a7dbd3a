//! # Tool Path Resolver
//!
//! Finds executables on disk without spawning anything:
//! - an optional tools directory (`Config::tools_dir` / `TOOLS_DIR`), checked first
//! - every directory of `PATH`

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::platform::PlatformCommands;

/// Resolves bare tool names to executable paths
#[derive(Debug, Clone, Default)]
pub struct ToolPathResolver {
    /// Searched before `PATH`
    tools_dir: Option<PathBuf>,
    platform: PlatformCommands,
}

impl ToolPathResolver {
    pub fn new(tools_dir: Option<PathBuf>) -> Self {
        Self {
            tools_dir,
            platform: PlatformCommands::current(),
        }
    }

    pub fn tools_dir(&self) -> Option<&Path> {
        self.tools_dir.as_deref()
    }

    /// Resolve the path to a specific executable
    pub fn resolve_tool(&self, tool_name: &str) -> Option<PathBuf> {
        let file_name = self.platform.executable_name(tool_name);

        if let Some(ref tools_dir) = self.tools_dir {
            let candidate = tools_dir.join(&file_name);
            if is_executable(&candidate) {
                debug!("Using tool from tools dir: {} -> {:?}", tool_name, candidate);
                return Some(candidate);
            }
        }

        let found = self.find_in_system_path(&file_name);
        match found {
            Some(ref path) => debug!("Using system tool: {} -> {:?}", tool_name, path),
            None => debug!("Tool not on PATH: {}", tool_name),
        }
        found
    }

    fn find_in_system_path(&self, file_name: &str) -> Option<PathBuf> {
        let path = std::env::var_os("PATH")?;
        std::env::split_paths(&path)
            .map(|dir| dir.join(file_name))
            .find(|candidate| is_executable(candidate))
    }

    /// Check if a specific executable is available
    pub fn is_tool_available(&self, tool_name: &str) -> bool {
        self.resolve_tool(tool_name).is_some()
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fake_tool(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(PlatformCommands::current().executable_name(name));
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
        path
    }

    #[test]
    fn test_tools_dir_is_searched() {
        let temp_dir = TempDir::new().unwrap();
        let tool = fake_tool(temp_dir.path(), "fake-optimizer-xyz");

        let resolver = ToolPathResolver::new(Some(temp_dir.path().to_path_buf()));
        assert_eq!(resolver.resolve_tool("fake-optimizer-xyz"), Some(tool));
        assert!(resolver.is_tool_available("fake-optimizer-xyz"));
    }

    #[test]
    fn test_unknown_tool_is_not_resolved() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = ToolPathResolver::new(Some(temp_dir.path().to_path_buf()));
        assert!(resolver.resolve_tool("definitely-not-installed-3f9a").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_file_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("plain-file-tool"), "data").unwrap();

        let resolver = ToolPathResolver::new(Some(temp_dir.path().to_path_buf()));
        assert!(!resolver.is_tool_available("plain-file-tool"));
    }
}
