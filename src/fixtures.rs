//! # Fixture Images
//!
//! Two pre-built 100x100 PNGs live in the fixtures directory, `red.png` and
//! `blue.png`. Tests ask for a fixture by color and optional size:
//!
//! - default size: the fixture is copied byte-for-byte
//! - any other size: ImageMagick force-resizes the fixture (`WxH!`)
//!
//! Resizing an existing PNG instead of drawing a new image keeps tests
//! independent of which coders a given ImageMagick build was compiled with.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

use crate::error::{Result, ToolError};
use crate::resize::ImageResizer;
use crate::tool_resolver::ToolPathResolver;

/// Which fixture to start from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureColor {
    Red,
    #[default]
    Blue,
}

impl FixtureColor {
    pub fn file_name(&self) -> &'static str {
        match self {
            FixtureColor::Red => "red.png",
            FixtureColor::Blue => "blue.png",
        }
    }
}

impl FromStr for FixtureColor {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(FixtureColor::Red),
            "blue" => Ok(FixtureColor::Blue),
            other => Err(ToolError::Validation(format!(
                "Unknown fixture color: {} (expected red or blue)",
                other
            ))),
        }
    }
}

impl fmt::Display for FixtureColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureColor::Red => f.write_str("red"),
            FixtureColor::Blue => f.write_str("blue"),
        }
    }
}

/// Target image dimensions, written `WxH`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    /// Native size of the checked-in fixtures
    pub const FIXTURE: ImageSize = ImageSize {
        width: 100,
        height: 100,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::FIXTURE
    }
}

impl FromStr for ImageSize {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ToolError::InvalidSize(s.to_string());

        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width: u32 = w.parse().map_err(|_| invalid())?;
        let height: u32 = h.parse().map_err(|_| invalid())?;

        if width == 0 || height == 0 {
            return Err(invalid());
        }

        Ok(Self { width, height })
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The fixtures directory and the operations on it
#[derive(Debug, Clone)]
pub struct FixtureSet {
    dir: PathBuf,
    resizer: ImageResizer,
}

impl FixtureSet {
    /// `resolver` locates `magick`/`convert` for non-default sizes
    pub fn new(dir: impl Into<PathBuf>, resolver: ToolPathResolver) -> Self {
        Self {
            dir: dir.into(),
            resizer: ImageResizer::new(resolver),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the pre-built fixture for `color`
    pub fn fixture_path(&self, color: FixtureColor) -> PathBuf {
        self.dir.join(color.file_name())
    }

    /// Place a fixture image of `size` and `color` at `path`.
    ///
    /// The default size copies the fixture unchanged. Other sizes are
    /// produced by ImageMagick, ignoring aspect ratio.
    pub fn create_test_image(&self, path: &Path, size: ImageSize, color: FixtureColor) -> Result<()> {
        let source = self.fixture_path(color);

        if size == ImageSize::FIXTURE {
            std::fs::copy(&source, path)?;
        } else {
            self.resizer.resize(&source, path, size.width, size.height)?;
        }

        info!("Created {} {} test image at {}", size, color, path.display());
        Ok(())
    }
}

/// Width and height as stored in the image header
pub fn image_dimensions(path: &Path) -> Result<(u32, u32)> {
    Ok(image::image_dimensions(path)?)
}

/// Lowercase hex SHA-256 of a file's contents
pub fn file_digest(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}
