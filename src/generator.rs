//! Synthetic sample data: Gaussian blobs around randomly placed cluster centers.
//!
//! Cluster centers are drawn from `N(0, center_std)` per coordinate, and every point of a cluster
//! from `N(center, point_std)`. With the defaults (3 clusters of 20 points, center spread 3.0,
//! point spread 1.0) the clusters are mostly well separated, which makes them a convenient best-case
//! input for [`KMeans`](crate::KMeans).

use crate::{Error, Point, Result};
use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Parameters of the blob generator.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Amount of clusters, and of initial centroid guesses
    pub n_classes: usize,
    /// Amount of points drawn around each cluster center
    pub points_per_class: usize,
    /// Standard deviation of the cluster centers (and of the initial centroid guesses) around the origin
    pub center_std: f64,
    /// Standard deviation of the points around their cluster center
    pub point_std: f64,
}
impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            n_classes: 3,
            points_per_class: 20,
            center_std: 3.0,
            point_std: 1.0,
        }
    }
}
impl GeneratorConfig {
    /// Total amount of generated samples (`n_classes * points_per_class`).
    pub fn sample_cnt(&self) -> usize {
        self.n_classes * self.points_per_class
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.n_classes == 0 {
            return Err(Error::InvalidParameter("n_classes must be > 0".to_string()));
        }
        if self.points_per_class == 0 {
            return Err(Error::InvalidParameter("points_per_class must be > 0".to_string()));
        }
        for (name, std) in [("center_std", self.center_std), ("point_std", self.point_std)] {
            if !(std.is_finite() && std >= 0.0) {
                return Err(Error::InvalidParameter(format!("{} must be finite and >= 0, got {}", name, std)));
            }
        }
        Ok(())
    }
}

/// Output of [`generate`].
#[derive(Clone, Debug)]
pub struct Dataset {
    /// `n_classes` batches of `points_per_class` points each, batch after batch
    pub samples: Vec<Point<f64>>,
    /// Random first guess of the centroids, independent of the true centers
    pub initial_centroids: Vec<Point<f64>>,
    /// The centers the batches were drawn around. Not meant to be handed to the clustering.
    pub true_centers: Vec<Point<f64>>,
}

fn normal(mean: f64, std: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std)
        .map_err(|_| Error::InvalidParameter(format!("no normal distribution with mean {} and std {}", mean, std)))
}

/// Draw one point per coordinate from the two distributions, x first.
fn draw_point<R: Rng + ?Sized>(dist_x: &Normal<f64>, dist_y: &Normal<f64>, rng: &mut R) -> Point<f64> {
    let x = dist_x.sample(rng);
    let y = dist_y.sample(rng);
    Point::new(x, y)
}

/// Draw `k` points with both coordinates from `N(0, spread)`.
pub fn centroid_guess<R: Rng + ?Sized>(k: usize, spread: f64, rng: &mut R) -> Result<Vec<Point<f64>>> {
    let dist = normal(0.0, spread)?;
    Ok((0..k).map(|_| draw_point(&dist, &dist, rng)).collect())
}

/// Generate the sample set and an initial centroid guess.
///
/// For every class a center is drawn first, followed by all points of that class; the
/// `n_classes` initial centroids are drawn last. A seeded `rng` therefore always yields the
/// same dataset.
pub fn generate<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<Dataset> {
    config.validate()?;

    let mut samples = Vec::with_capacity(config.sample_cnt());
    let mut true_centers = Vec::with_capacity(config.n_classes);
    let center_dist = normal(0.0, config.center_std)?;
    for _ in 0..config.n_classes {
        let center = draw_point(&center_dist, &center_dist, rng);
        let (dist_x, dist_y) = (normal(center.x, config.point_std)?, normal(center.y, config.point_std)?);
        samples.extend((0..config.points_per_class).map(|_| draw_point(&dist_x, &dist_y, rng)));
        true_centers.push(center);
    }
    let initial_centroids = centroid_guess(config.n_classes, config.center_std, rng)?;
    debug!("generated {} samples around centers {:?}", samples.len(), true_centers);

    Ok(Dataset { samples, initial_centroids, true_centers })
}
