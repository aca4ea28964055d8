// File: crates/scatter-core/src/store.rs
// Summary: Owned working set of points with explicit mutation (add, clear, random seeding, CSV load).

use std::io::Read;
use std::path::Path;

use rand::Rng;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::point::Point;

/// Upper bound used when a caller seeds without choosing one.
pub const DEFAULT_SEED_MAX: f64 = 100.0;

/// Ordered point collection. Insertion order is kept; duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    pub fn new() -> Self { Self::default() }

    pub fn from_points(points: Vec<Point>) -> Self { Self { points } }

    /// Append `n` points sampled uniformly in `[0, max)` on both axes.
    pub fn seed_random(&mut self, n: usize, max: f64) -> Result<()> {
        self.seed_random_between(n, 0.0, max)
    }

    /// Append `n` points sampled uniformly in `[min, max)` on both axes.
    pub fn seed_random_between(&mut self, n: usize, min: f64, max: f64) -> Result<()> {
        self.seed_random_with(&mut rand::thread_rng(), n, min, max)
    }

    /// Same as [`seed_random_between`](Self::seed_random_between) with a caller-owned RNG.
    /// Each coordinate is drawn independently. The span `max - min` must itself be finite.
    pub fn seed_random_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        n: usize,
        min: f64,
        max: f64,
    ) -> Result<()> {
        if !(min.is_finite() && max.is_finite() && min < max && (max - min).is_finite()) {
            return Err(Error::InvalidRange { min, max });
        }
        self.points.reserve(n);
        for _ in 0..n {
            let x = rng.gen_range(min..max);
            let y = rng.gen_range(min..max);
            self.points.push(Point::new(x, y));
        }
        info!(n, min, max, total = self.points.len(), "seeded random points");
        Ok(())
    }

    pub fn add(&mut self, point: Point) {
        debug!(x = point.x, y = point.y, "add point");
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        info!(removed = self.points.len(), "clear points");
        self.points.clear();
    }

    pub fn points(&self) -> &[Point] { &self.points }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> { self.points.iter() }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Largest observed x, or NaN when the store is empty.
    pub fn max_x(&self) -> f64 {
        max_x(&self.points)
    }

    /// Load points from a CSV file with an `x,y` header.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let store = Self::from_csv_reader(file)?;
        info!(path = %path.display(), n = store.len(), "loaded points");
        Ok(store)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let points = rdr.deserialize::<Point>().collect::<Result<Vec<_>, csv::Error>>()?;
        Ok(Self { points })
    }
}

impl<'a> IntoIterator for &'a PointStore {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}

/// Largest x in `points`, NaN when empty.
pub fn max_x(points: &[Point]) -> f64 {
    points.iter().map(|p| p.x).fold(f64::NAN, f64::max)
}
