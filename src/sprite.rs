//! The avatar's text-art sprite.
//!
//! Loaded once at startup from `images/bird.txt`. Without it there is
//! nothing to draw the avatar with, so every failure here is fatal.

use crate::constants::{SPRITE_DIR, SPRITE_FILE};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    /// Rows of characters, right-padded with spaces to `width`.
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Sprite {
    /// Parse text art. Trailing blank lines are dropped; a sprite with no
    /// visible character is rejected.
    pub fn parse(text: &str) -> io::Result<Self> {
        let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end()).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        if lines.iter().all(|l| l.is_empty()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Sprite contains no visible characters",
            ));
        }

        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let rows = lines
            .iter()
            .map(|l| {
                let mut row: Vec<char> = l.chars().collect();
                row.resize(width, ' ');
                row
            })
            .collect();

        Ok(Self { rows, width })
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Could not read sprite {}: {}", path.display(), e),
            )
        })?;
        Self::parse(&text)
    }

    /// Find and load the sprite shipped with the game.
    pub fn load_default() -> io::Result<(Self, PathBuf)> {
        let path = locate(&candidate_dirs())?;
        let sprite = Self::load(&path)?;
        Ok((sprite, path))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Nearest-neighbour resample to `width` x `height` cells.
    pub fn scaled(&self, width: usize, height: usize) -> Vec<Vec<char>> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let source_height = self.rows.len();
        (0..height)
            .map(|i| {
                let row = &self.rows[(i * source_height / height).min(source_height - 1)];
                (0..width)
                    .map(|j| row[(j * self.width / width).min(self.width - 1)])
                    .collect()
            })
            .collect()
    }
}

/// Directories searched for `images/`: next to the executable. Debug builds
/// also fall back to the crate root so `cargo run` works from a checkout;
/// release builds never look outside the install.
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }
    #[cfg(debug_assertions)]
    dirs.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));
    dirs
}

fn locate(dirs: &[PathBuf]) -> io::Result<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(SPRITE_DIR).join(SPRITE_FILE))
        .find(|path| path.is_file())
        .ok_or_else(|| {
            let searched: Vec<String> = dirs.iter().map(|d| d.display().to_string()).collect();
            io::Error::new(
                io::ErrorKind::NotFound,
                format!(
                    "Sprite {}/{} not found (searched {})",
                    SPRITE_DIR,
                    SPRITE_FILE,
                    searched.join(", ")
                ),
            )
        })
}
