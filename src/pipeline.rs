//! Generate blobs, cluster them and write both point files.

use crate::{
    generate, output, Dataset, EmptyClusterPolicy, EuclideanDistance, GeneratorConfig, KMeans, KMeansConfig,
    KMeansState, Result,
};
use log::{debug, info};
use rand::prelude::*;
use std::path::PathBuf;

/// Everything a complete run needs. The defaults reproduce the classic setup: 3 clusters of 20
/// points, 10 iterations, results in `sample.dat` and `repvec.dat`.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub generator: GeneratorConfig,
    /// Amount of k-means iterations, always run to the end
    pub iterations: usize,
    pub sample_file: PathBuf,
    pub centroid_file: PathBuf,
    /// Seed for the random number generator. Entropy from the OS is used when unset.
    pub seed: Option<u64>,
    pub empty_cluster_policy: EmptyClusterPolicy,
}
impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            iterations: 10,
            sample_file: PathBuf::from("sample.dat"),
            centroid_file: PathBuf::from("repvec.dat"),
            seed: None,
            empty_cluster_policy: EmptyClusterPolicy::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RunSummary {
    pub dataset: Dataset,
    pub result: KMeansState<f64>,
}

pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let mut rnd = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let dataset = generate(&config.generator, &mut rnd)?;
    info!("generated {} samples in {} clusters", dataset.samples.len(), config.generator.n_classes);

    let report = |s: &KMeansState<f64>, nr: usize, new_distsum: f64| {
        debug!("iteration {} - error: {:.4} -> {:.4} | improvement: {:.4}", nr, s.distsum, new_distsum, s.distsum - new_distsum)
    };
    let conf = KMeansConfig::build()
        .random_generator(rnd)
        .empty_cluster_policy(config.empty_cluster_policy)
        .iteration_done(&report)
        .build();
    let kmean = KMeans::new(dataset.samples.clone(), EuclideanDistance);
    let result = kmean.kmeans_lloyd(
        config.generator.n_classes,
        config.iterations,
        KMeans::init_precomputed(dataset.initial_centroids.clone()),
        &conf,
    )?;
    info!("clustered after {} iterations, error {:.4}", config.iterations, result.distsum);

    output::write_points(&config.sample_file, &dataset.samples)?;
    output::write_points(&config.centroid_file, &result.centroids)?;
    info!("wrote {} and {}", config.sample_file.display(), config.centroid_file.display());

    Ok(RunSummary { dataset, result })
}
