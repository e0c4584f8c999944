use blobmeans::pipeline::{self, RunConfig};
use blobmeans::{EmptyClusterPolicy, GeneratorConfig};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EmptyCluster {
    /// Leave the centroid where it was
    Keep,
    /// Divide by the zero count, turning the centroid into NaN
    Propagate,
}
impl From<EmptyCluster> for EmptyClusterPolicy {
    fn from(v: EmptyCluster) -> Self {
        match v {
            EmptyCluster::Keep => EmptyClusterPolicy::KeepPrevious,
            EmptyCluster::Propagate => EmptyClusterPolicy::Propagate,
        }
    }
}

/// Generate Gaussian blobs in the plane and cluster them with k-means.
#[derive(Parser, Debug)]
#[command(name = "blobmeans", version, about)]
struct Args {
    /// Number of clusters to generate and to search for
    #[arg(short = 'k', long, default_value_t = 3)]
    classes: usize,

    /// Number of points drawn around each cluster center
    #[arg(short = 'n', long, default_value_t = 20)]
    points_per_class: usize,

    /// Number of k-means iterations (always run to the end)
    #[arg(short, long, default_value_t = 10)]
    iterations: usize,

    /// Destination of the generated sample points
    #[arg(long, default_value = "sample.dat")]
    sample_file: PathBuf,

    /// Destination of the final centroids
    #[arg(long, default_value = "repvec.dat")]
    centroid_file: PathBuf,

    /// Standard deviation of the cluster centers around the origin
    #[arg(long, default_value_t = 3.0)]
    center_std: f64,

    /// Standard deviation of the points around their cluster center
    #[arg(long, default_value_t = 1.0)]
    point_std: f64,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// What happens to a centroid that lost all of its points
    #[arg(long, value_enum, default_value_t = EmptyCluster::Keep)]
    empty_cluster: EmptyCluster,
}
impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            generator: GeneratorConfig {
                n_classes: args.classes,
                points_per_class: args.points_per_class,
                center_std: args.center_std,
                point_std: args.point_std,
            },
            iterations: args.iterations,
            sample_file: args.sample_file,
            centroid_file: args.centroid_file,
            seed: args.seed,
            empty_cluster_policy: args.empty_cluster.into(),
        }
    }
}

fn main() -> Result<(), blobmeans::Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = RunConfig::from(Args::parse());
    let summary = pipeline::run(&config)?;
    for (i, c) in summary.result.centroids.iter().enumerate() {
        info!("centroid {}: ({}) with {} points", i, c, summary.result.centroid_frequency[i]);
    }
    Ok(())
}
