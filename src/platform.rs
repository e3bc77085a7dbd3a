//! # Platform-specific utilities
//!
//! Everything that differs between Windows and Unix-like systems: the command
//! used to look up executables, the executable suffix, and the existence probe
//! built on top of them.

use std::process::{Command, Stdio};
use tracing::debug;

/// Platform facts used by the probe and the resolver
#[derive(Debug, Clone, Copy)]
pub struct PlatformCommands {
    which_command: &'static str,
    exe_suffix: &'static str,
}

impl PlatformCommands {
    /// Commands for the platform this binary was compiled for
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self {
                which_command: "where",
                exe_suffix: ".exe",
            }
        } else {
            Self {
                which_command: "which",
                exe_suffix: "",
            }
        }
    }

    /// Get the command used to check if a program exists
    pub fn which_command(&self) -> &'static str {
        self.which_command
    }

    /// Platform executable file name for a bare tool name
    pub fn executable_name(&self, base_name: &str) -> String {
        if self.exe_suffix.is_empty() || base_name.ends_with(self.exe_suffix) {
            base_name.to_string()
        } else {
            format!("{}{}", base_name, self.exe_suffix)
        }
    }

    /// Runs `where`/`which` for `cmd` with all output discarded.
    ///
    /// Reports the probe's exit status. A probe that cannot be spawned counts
    /// as "does not exist"; this never returns an error.
    pub fn command_exists(&self, cmd: &str) -> bool {
        let status = Command::new(self.which_command)
            .arg(cmd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => {
                debug!("{} {} -> {}", self.which_command, cmd, status);
                status.success()
            }
            Err(e) => {
                debug!("Could not run {} for {}: {}", self.which_command, cmd, e);
                false
            }
        }
    }

    /// Get system information for debugging
    pub fn system_info() -> SystemInfo {
        SystemInfo {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            family: std::env::consts::FAMILY,
        }
    }
}

impl Default for PlatformCommands {
    fn default() -> Self {
        Self::current()
    }
}

/// `PlatformCommands::current().command_exists(cmd)`
pub fn command_exists(cmd: &str) -> bool {
    PlatformCommands::current().command_exists(cmd)
}

/// System information structure
#[derive(Debug, Clone, serde::Serialize)]
pub struct SystemInfo {
    pub os: &'static str,
    pub arch: &'static str,
    pub family: &'static str,
}

impl std::fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.os, self.arch, self.family)
    }
}
