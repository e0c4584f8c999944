//! # blobmeans - API documentation
//!
//! Blobmeans generates synthetic 2-D sample data drawn from a fixed number of Gaussian clusters
//! ("blobs"), and recovers one representative point (centroid) per cluster using hard-assignment
//! k-means clustering with the euclidean distance.
//!
//! ## Design target
//! The clustering runs a fixed amount of iterations. There is no convergence detection, so a run
//! always costs the same and is fully deterministic for a given input. Everything runs on the
//! calling thread.
//!
//! ## Supported variants
//! Only the classic Lloyd variant is implemented, see [`KMeans::kmeans_lloyd`].
//! Each iteration assigns every sample to its nearest centroid (E-step), and then moves every centroid
//! to the mean of its assigned samples (M-step). How centroids without any samples are treated is
//! configured with [`EmptyClusterPolicy`].
//!
//! ## Supported centroid initializations
//! - [`KMeans::init_precomputed`]: Use given centroids, e.g. the random guess of [`generate`]
//! - [`KMeans::init_random_sample`]: Randomly choose k of the samples
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use blobmeans::*;
//! use rand::prelude::*;
//!
//! let mut rnd = StdRng::seed_from_u64(1337);
//! let dataset = generate(&GeneratorConfig::default(), &mut rnd).unwrap();
//!
//! let kmean = KMeans::new(dataset.samples, EuclideanDistance);
//! let result = kmean.kmeans_lloyd(3, 10, KMeans::init_precomputed(dataset.initial_centroids), &KMeansConfig::default()).unwrap();
//!
//! println!("Centroids: {:?}", result.centroids);
//! println!("Cluster-Assignments: {:?}", result.assignments);
//! println!("Error: {}", result.distsum);
//! ```
//!
//! ## Example (using the status event callbacks)
//! ```rust
//! use blobmeans::*;
//! use rand::prelude::*;
//!
//! let mut rnd = StdRng::seed_from_u64(1337);
//! let dataset = generate(&GeneratorConfig { n_classes: 5, points_per_class: 100, ..Default::default() }, &mut rnd).unwrap();
//!
//! let conf = KMeansConfig::<f64>::build()
//!     .init_done(&|_| println!("Initialization completed."))
//!     .iteration_done(&|s, nr, new_distsum|
//!         println!("Iteration {} - Error: {:.2} -> {:.2} | Improvement: {:.2}",
//!             nr, s.distsum, new_distsum, s.distsum - new_distsum))
//!     .random_generator(rnd)
//!     .build();
//!
//! let kmean = KMeans::new(dataset.samples, EuclideanDistance);
//! let result = kmean.kmeans_lloyd(5, 20, KMeans::init_random_sample, &conf).unwrap();
//! println!("Centroids: {:?}", result.centroids);
//! ```
//!
//! ## Short API-Overview / Description
//! The clustering entry-point is the [`KMeans`] struct, generic over the underlying primitive type and
//! the [`DistanceFunction`]. It takes over the samples into its ownership. Calling one of its
//! instance-methods does not mutate it; the state (and finally the result) of a calculation lives in
//! a new [`KMeansState`] instance.
//!
//! The [`pipeline`] module wires generation, clustering and the plain-text output files (see [`output`])
//! together; it is what the `blobmeans` binary runs.

#[macro_use] mod helpers;
mod primitive;
mod error;
mod point;
mod api;
mod variants;
mod inits;
mod distances;
mod empty_cluster_policy;
mod generator;
pub mod output;
pub mod pipeline;

pub use api::{DistanceFunction, KMeansState, KMeansConfig, KMeansConfigBuilder, KMeans};
pub use distances::EuclideanDistance;
pub use empty_cluster_policy::EmptyClusterPolicy;
pub use error::{Error, Result};
pub use generator::{centroid_guess, generate, Dataset, GeneratorConfig};
pub use point::Point;
pub use primitive::Primitive;
