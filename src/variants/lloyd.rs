use crate::api::DistanceFunction;
use crate::{Error, KMeans, KMeansState, KMeansConfig, EmptyClusterPolicy, Point, Primitive, Result};
use log::{debug, warn};

pub(crate) struct Lloyd<T, D> {
	_p: std::marker::PhantomData<(T, D)>
}
impl<T: Primitive, D: DistanceFunction<T>> Lloyd<T, D> {
    /// Move every centroid to the mean of its currently assigned samples (M-step).
    /// ## Returns
    /// The sum of (squared) sample distances to the centroids they were assigned to.
    fn update_centroids(data: &KMeans<T, D>, state: &mut KMeansState<T>, policy: EmptyClusterPolicy) -> T {
        // Sum all samples in a cluster together into new_centroids
        let used_centroids_cnt = data.update_cluster_frequencies(&state.assignments, &mut state.centroid_frequency);
        let mut new_centroids = vec![Point::<T>::default(); state.k];
        data.samples.iter()
            .zip(state.assignments.iter().cloned())
            .for_each(|(s, centroid_id)| {
                let c = &mut new_centroids[centroid_id];
                c.x += s.x;
                c.y += s.y;
            });
        let new_distsum: T = state.centroid_distances.iter().cloned().sum();

        if used_centroids_cnt != state.k {
            let empty: Vec<usize> = (0..state.k).filter(|&i| state.centroid_frequency[i] == 0).collect();
            warn!("{} of {} clusters without samples {:?} ({:?})", empty.len(), state.k, empty, policy);
        }

        // Calculate new centroids from the summed up samples
        state.centroids.iter_mut()
            .zip(new_centroids.into_iter())
            .zip(state.centroid_frequency.iter().cloned())
            .for_each(|((c, sum), cfreq)| {
                policy.update_centroid(c, sum, cfreq);
            });
        new_distsum
    }

    #[inline(always)] pub fn calculate<'a, F>(data: &KMeans<T, D>, k: usize, max_iter: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>>
                where for<'c> F: FnOnce(&KMeans<T, D>, &mut KMeansState<T>, &KMeansConfig<'c, T>) -> Result<()> {
        if k == 0 {
            return Err(Error::InvalidParameter("k must be > 0".to_string()));
        }

        let mut state = KMeansState::new(data.sample_cnt(), k);
        state.distsum = T::infinity();

        // Initialize clusters and notify subscriber
        init(data, &mut state, config)?;
        (config.init_done)(&state);
        debug!("initialized {} centroids for {} samples", k, data.sample_cnt());

        for i in 1..=max_iter {
            data.update_cluster_assignments(&mut state);
            let new_distsum = Self::update_centroids(data, &mut state, config.empty_cluster_policy);

			// Notify subscriber about finished iteration
			(config.iteration_done)(&state, i, new_distsum);
            debug!("iteration {}/{} - error: {:.4e} -> {:.4e}", i, max_iter, state.distsum, new_distsum);
            state.distsum = new_distsum;
        }

        // Report assignments and distances against the final centroids, without moving them
        data.update_cluster_assignments(&mut state);
        data.update_cluster_frequencies(&state.assignments, &mut state.centroid_frequency);
        state.distsum = state.centroid_distances.iter().cloned().sum();
        Ok(state)
    }
}
