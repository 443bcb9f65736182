//! Problem instances and their text format.
//!
//! ```text
//! 3
//! 12.5 900.25
//! 0 0
//! 431.7 18.02
//! ```
//!
//! The first line holds the city count, each following line one `x y`
//! pair. Lines with fewer than two fields are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::{Result, TspError};
use crate::geometry::Point;

/// A set of cities.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub points: Vec<Point>,
}

impl Instance {
    /// Upper bound (exclusive) of generated coordinates.
    pub const COORD_MAX: f64 = 1000.0;

    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Draws `n` cities uniformly from `[0, 1000)²`.
    pub fn generate<R: Rng>(n: usize, rng: &mut R) -> Self {
        let points = (0..n)
            .map(|_| {
                Point::new(
                    rng.random_range(0.0..Self::COORD_MAX),
                    rng.random_range(0.0..Self::COORD_MAX),
                )
            })
            .collect();
        Self { points }
    }

    /// Conventional file name for an instance of `n` cities.
    pub fn file_name(n: usize) -> String {
        format!("tsp_{n}.txt")
    }

    /// Path of the `n`-city instance inside `dir`.
    pub fn path_in(dir: &Path, n: usize) -> PathBuf {
        dir.join(Self::file_name(n))
    }

    /// Parses the text format.
    ///
    /// # Errors
    ///
    /// [`TspError::Parse`] for a malformed header or coordinate,
    /// [`TspError::EmptyInstance`] if the text holds no cities.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().enumerate();

        let declared = match lines.find(|(_, l)| !l.trim().is_empty()) {
            Some((idx, header)) => {
                header
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| TspError::Parse {
                        line: idx + 1,
                        message: format!("invalid city count {:?}: {e}", header.trim()),
                    })?
            }
            None => return Err(TspError::EmptyInstance),
        };

        let mut points = Vec::with_capacity(declared);
        for (idx, line) in lines {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 2 {
                continue;
            }
            let coord = |s: &str| {
                s.parse::<f64>().map_err(|e| TspError::Parse {
                    line: idx + 1,
                    message: format!("invalid coordinate {s:?}: {e}"),
                })
            };
            points.push(Point::new(coord(fields[0])?, coord(fields[1])?));
        }

        if points.is_empty() {
            return Err(TspError::EmptyInstance);
        }
        if points.len() != declared {
            log::warn!(
                "instance declares {declared} cities but lists {}",
                points.len()
            );
        }
        Ok(Self { points })
    }

    /// Renders the text format.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n", self.points.len());
        for p in &self.points {
            out.push_str(&format!("{} {}\n", p.x, p.y));
        }
        out
    }

    /// Reads an instance file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    /// Writes an instance file, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_text())?;
        Ok(())
    }
}
