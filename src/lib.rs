//! # Media Toolcheck Library
//!
//! Test support for code that drives external media tools.
//!
//! ## Modules:
//! - `config`: fixtures location, temp prefix, extra tools directory
//! - `error`: the `ToolError` enum
//! - `platform`: `which`/`where` existence probe
//! - `tool_resolver`: executable lookup in a tools dir and `PATH`
//! - `registry`: the known tools and their version queries
//! - `resize`: ImageMagick resize invocation
//! - `fixtures`: fixture images by color and size
//! - `helper`: `TestHelper` and the `skip_unless_tool_available!` macro
//! - `report`: availability report as text or JSON
//!
//! ## Usage:
//! ```rust
//! use media_toolcheck::TestHelper;
//!
//! let helper = TestHelper::default();
//! let tools = helper.available_tools();
//! assert_eq!(tools.len(), 5);
//! assert!(!helper.tool_available("not-a-tool"));
//! ```

pub mod config;
pub mod error;
pub mod fixtures;
pub mod helper;
pub mod platform;
pub mod registry;
pub mod report;
pub mod resize;
pub mod tool_resolver;
pub mod utils;

pub use config::Config;
pub use error::ToolError;
pub use fixtures::{FixtureColor, FixtureSet, ImageSize};
pub use helper::{AvailableTools, TestHelper};
pub use platform::command_exists;
pub use registry::{Tool, ToolRegistry};
pub use report::ToolReport;
