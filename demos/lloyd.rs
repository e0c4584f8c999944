use blobmeans::*;

fn main() {
    let (n_classes, points_per_class, max_iter) = (4, 5000, 10);

    // Generate some random blobs
    let config = GeneratorConfig { n_classes, points_per_class, ..GeneratorConfig::default() };
    let dataset = generate(&config, &mut rand::thread_rng()).unwrap();

    // Calculate kmeans, starting from the generator's random guess
    let kmean = KMeans::new(dataset.samples, EuclideanDistance);
    let result = kmean
        .kmeans_lloyd(n_classes, max_iter, KMeans::init_precomputed(dataset.initial_centroids), &KMeansConfig::default())
        .unwrap();

    println!("True centers: {:?}", dataset.true_centers);
    println!("Centroids: {:?}", result.centroids);
    println!("Cluster sizes: {:?}", result.centroid_frequency);
    println!("Error: {}", result.distsum);
}
