use blobmeans::*;

fn main() {
    let (n_classes, points_per_class, max_iter) = (6, 2000, 25);

    // Generate some random blobs
    let config = GeneratorConfig { n_classes, points_per_class, ..GeneratorConfig::default() };
    let dataset = generate(&config, &mut rand::thread_rng()).unwrap();

	let conf = KMeansConfig::<f64>::build()
		.init_done(&|_| println!("Initialization completed."))
		.iteration_done(&|s, nr, new_distsum|
			println!("Iteration {} - Error: {:.2} -> {:.2} | Improvement: {:.2}",
				nr, s.distsum, new_distsum, s.distsum - new_distsum))
		.empty_cluster_policy(EmptyClusterPolicy::Propagate)
		.build();

    // Calculate kmeans, using random samples as initial centroids
    let kmean = KMeans::new(dataset.samples, EuclideanDistance);
    let result = kmean.kmeans_lloyd(n_classes, max_iter, KMeans::init_random_sample, &conf).unwrap();

    println!("Centroids: {:?}", result.centroids);
    println!("Cluster-Assignments: {:?}", result.assignments);
    println!("Error: {}", result.distsum);
}
