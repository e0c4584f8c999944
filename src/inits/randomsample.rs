use crate::api::DistanceFunction;
use crate::{Error, KMeans, KMeansConfig, KMeansState, Primitive, Result};
use rand::prelude::*;
use std::ops::DerefMut;

#[inline(always)]
pub fn calculate<T, D>(kmean: &KMeans<T, D>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<()>
where
    T: Primitive,
    D: DistanceFunction<T>,
{
    if state.k > kmean.sample_cnt() {
        return Err(Error::InvalidParameter(format!(
            "cannot pick {} distinct samples out of {}", state.k, kmean.sample_cnt()
        )));
    }
    kmean.samples.iter().cloned()
        .choose_multiple(config.rnd.borrow_mut().deref_mut(), state.k)
        .into_iter()
        .enumerate()
        .for_each(|(ci, c)| state.set_centroid(ci, c)); // Copy randomly chosen samples into state.centroids
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::*;
    use rand::prelude::*;

    #[test]
    fn picks_distinct_samples() {
        let samples: Vec<Point<f64>> = (0..50).map(|i| Point::new(i as f64, -(i as f64))).collect();
        let kmean = KMeans::new(samples.clone(), EuclideanDistance);
        let conf = KMeansConfig::build().random_generator(StdRng::seed_from_u64(1337)).build();

        let result = kmean.kmeans_lloyd(5, 0, KMeans::init_random_sample, &conf).unwrap();

        assert_eq!(result.centroids.len(), 5);
        for (i, c) in result.centroids.iter().enumerate() {
            assert!(samples.contains(c));
            assert!(!result.centroids[..i].contains(c));
        }
    }

    #[test]
    fn seeded_generator_is_repeatable() {
        let samples: Vec<Point<f32>> = (0..30).map(|i| Point::new(i as f32, 1.0)).collect();
        let kmean = KMeans::new(samples, EuclideanDistance);
        let run = || {
            let conf = KMeansConfig::build().random_generator(StdRng::seed_from_u64(42)).build();
            kmean.kmeans_lloyd(3, 0, KMeans::init_random_sample, &conf).unwrap().centroids
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn more_clusters_than_samples() {
        let kmean = KMeans::new(vec![Point::new(0.0f64, 0.0)], EuclideanDistance);
        let result = kmean.kmeans_lloyd(2, 1, KMeans::init_random_sample, &KMeansConfig::default());
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }
}
