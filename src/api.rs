use crate::{EmptyClusterPolicy, EuclideanDistance, Point, Primitive, Result};
use std::cell::RefCell;
use rand::prelude::*;

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>);
pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>, usize, T);

/// This is a structure holding various configuration options for a k-means calculation, such as
/// the random number generator to use, the handling of empty clusters, or a couple of callbacks, that can
/// be set to get status information from a running k-means calculation.
///
/// For a more detailed information about all possible options, have a look at [`KMeansConfigBuilder`].
pub struct KMeansConfig<'a, T: Primitive> {
    /// Callback that is called, when the initialization phase finished
    /// ## Arguments
    /// - **state**: Current [`KMeansState`] after the initialization
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each iteration
    /// ## Arguments
    /// - **state**: Current [`KMeansState`] after the iteration
    /// - **iteration_id**: Number of the current iteration (starting at 1)
    /// - **distsum**: New distance sum (**state** contains the distsum from the previous iteration)
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Random number generator to use
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// What to do with centroids that did not get any samples assigned
    pub(crate) empty_cluster_policy: EmptyClusterPolicy,
}
impl<'a, T: Primitive> Default for KMeansConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_, _, _| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
            empty_cluster_policy: EmptyClusterPolicy::default(),
        }
    }
}
impl<'a, T: Primitive> KMeansConfig<'a, T> {
    /// Use the [`KMeansConfigBuilder`] to build a [`KMeansConfig`] instance.
    pub fn build() -> KMeansConfigBuilder<'a, T> {
        KMeansConfigBuilder { config: KMeansConfig::default() }
    }
}
impl<'a, T: Primitive> std::fmt::Debug for KMeansConfig<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KMeansConfig")
            .field("empty_cluster_policy", &self.empty_cluster_policy)
            .finish_non_exhaustive()
    }
}

pub struct KMeansConfigBuilder<'a, T: Primitive> {
    config: KMeansConfig<'a, T>,
}
impl<'a, T: Primitive> KMeansConfigBuilder<'a, T> {
    /// Set the callback that should be called after the centroid initialization, before the iteration starts.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback that should be called after each iteration during a running k-means calculation.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the random number generator that should be used by randomized initialization methods.
    /// Use a seeded generator for deterministically repeatable results.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Set the handling of centroids without any assigned samples. For more information,
    /// see documentation of [`EmptyClusterPolicy`].
    /// ## Default
    /// [`EmptyClusterPolicy::KeepPrevious`]
    pub fn empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        self.config.empty_cluster_policy = policy; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> KMeansConfig<'a, T> { self.config }
}


/// This is the internally used data-structure, storing the current state during calculation, as
/// well as the final result, as returned by the API.
/// All mutations are done in this structure, making [`KMeans`] immutable, so the same samples can
/// be clustered multiple times without being copied.
///
/// ## Generics
/// - **T**: Underlying primitive type that was used for the calculation
///
/// ## Fields
/// - **k**: The amount of clusters that were requested when calculating this k-means result
/// - **distsum**: The total sum of (squared) distances from all samples to their respective centroids
/// - **centroids**: Calculated cluster centers, in centroid index order
/// - **centroid_frequency**: Amount of samples in each centroid
/// - **assignments**: Vector mapping each sample to its respective nearest cluster
/// - **centroid_distances**: Vector containing each sample's (squared) distance to its centroid
#[derive(Clone, Debug)]
pub struct KMeansState<T: Primitive> {
    pub k: usize,
    pub distsum: T,
    pub centroids: Vec<Point<T>>,
    pub centroid_frequency: Vec<usize>,
    pub assignments: Vec<usize>,
    pub centroid_distances: Vec<T>,
}
impl<T: Primitive> KMeansState<T> {
    pub(crate) fn new(sample_cnt: usize, k: usize) -> Self {
        Self {
            k,
            distsum: T::zero(),
            centroids: vec![Point::default(); k],
            centroid_frequency: vec![0usize; k],
            assignments: vec![0usize; sample_cnt],
            centroid_distances: vec![T::infinity(); sample_cnt],
        }
    }
    pub(crate) fn set_centroid(&mut self, idx: usize, centroid: Point<T>) {
        self.centroids[idx] = centroid;
    }
}


/// Distance measure used to find the nearest centroid of a sample.
pub trait DistanceFunction<T: Primitive> {
    fn distance(&self, a: &Point<T>, b: &Point<T>) -> T;
}


/// Entrypoint of this crate's clustering API-Surface.
///
/// Create an instance of this struct, giving the samples you want to operate on. The primitive type
/// of the passed samples will be the type used internally for all calculations, as well as the result
/// as stored in the returned [`KMeansState`] structure.
///
/// ## Supported variants
/// - k-Means clustering (Lloyd) with a fixed iteration count [`KMeans::kmeans_lloyd`]
///
/// ## Supported initialization methods
/// - Precomputed centroids [`KMeans::init_precomputed`]
/// - Random-Sample [`KMeans::init_random_sample`]
pub struct KMeans<T: Primitive, D: DistanceFunction<T> = EuclideanDistance> {
    pub(crate) samples: Vec<Point<T>>,
    pub(crate) distance_fn: D,
}
impl<T: Primitive, D: DistanceFunction<T>> KMeans<T, D> {
    /// Create a new instance of the [`KMeans`] structure.
    ///
    /// ## Arguments
    /// - **samples**: The sample set, in the order that assignments are reported in
    /// - **distance_fn**: Distance measure to use, e.g. [`EuclideanDistance`]
    pub fn new(samples: Vec<Point<T>>, distance_fn: D) -> Self {
        Self { samples, distance_fn }
    }

    pub fn samples(&self) -> &[Point<T>] { &self.samples }

    pub fn sample_cnt(&self) -> usize { self.samples.len() }

    /// Assign every sample to its nearest centroid (E-step).
    ///
    /// The running minimum starts at infinity and is only replaced on a strictly smaller distance,
    /// so ties go to the lowest centroid index and a NaN distance never wins. A sample without any
    /// finite distance stays at centroid 0 with an infinite distance.
    pub(crate) fn update_cluster_assignments(&self, state: &mut KMeansState<T>) {
        let (centroids, distance_fn) = (&state.centroids, &self.distance_fn);
        self.samples.iter()
            .zip(state.assignments.iter_mut())
            .zip(state.centroid_distances.iter_mut())
            .for_each(|((s, assignment), centroid_dist)| {
                let (best_idx, best_dist) = centroids.iter()
                    .map(|c| distance_fn.distance(s, c))
                    .enumerate()
                    .fold((0, T::infinity()), |(bi, bd), (ci, d)| if d < bd { (ci, d) } else { (bi, bd) });
                *assignment = best_idx;
                *centroid_dist = best_dist;
            });
    }

    pub(crate) fn update_cluster_frequencies(&self, assignments: &[usize], centroid_frequency: &mut [usize]) -> usize {
        centroid_frequency.iter_mut().for_each(|v| *v = 0);
        let mut used_centroids_cnt = 0;
        assignments.iter().cloned()
            .for_each(|centroid_id| {
                if centroid_frequency[centroid_id] == 0 {
                    used_centroids_cnt += 1; // Count the amount of centroids with more than 0 samples
                }
                centroid_frequency[centroid_id] += 1;
            });
        used_centroids_cnt
    }


    /// Hard-assignment k-means (Lloyd), running exactly **max_iter** iterations.
    /// There is no convergence check: each iteration assigns all samples to their nearest centroid
    /// and then moves every centroid to the mean of its samples.
    ///
    /// ## Arguments
    /// - **k**: Amount of clusters to search for
    /// - **max_iter**: Amount of iterations to run (`0` returns the initial centroids untouched)
    /// - **init**: Initialization-Method to use for the initialization of the **k** centroids
    /// - **config**: [`KMeansConfig`] instance, containing several configuration options for the calculation.
    ///
    /// ## Returns
    /// Instance of [`KMeansState`], containing the final state (result). Its assignments and distances
    /// refer to the final centroids.
    ///
    /// ## Example
    /// ```rust
    /// use blobmeans::*;
    ///
    /// let samples = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(10.0, 0.0), Point::new(10.0, 1.0)];
    /// let initial = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    ///
    /// let kmean = KMeans::new(samples, EuclideanDistance);
    /// let result = kmean.kmeans_lloyd(2, 1, KMeans::init_precomputed(initial), &KMeansConfig::default()).unwrap();
    ///
    /// assert_eq!(result.centroids, vec![Point::new(0.0, 0.5), Point::new(10.0, 0.5)]);
    /// ```
    pub fn kmeans_lloyd<'a, F>(&self, k: usize, max_iter: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>>
                where for<'c> F: FnOnce(&KMeans<T, D>, &mut KMeansState<T>, &KMeansConfig<'c, T>) -> Result<()> {
        crate::variants::Lloyd::calculate(self, k, max_iter, init, config)
    }

    /// Precomputed initialization method
    ///
    /// ## Description
    /// Uses the given centroids as they are. Their amount has to match the requested `k`.
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass its result to an instance-method of [`KMeans`].
    pub fn init_precomputed(centroids: Vec<Point<T>>) -> impl FnOnce(&KMeans<T, D>, &mut KMeansState<T>, &KMeansConfig<'_, T>) -> Result<()> {
        move |kmean, state, config| crate::inits::precomputed::calculate(kmean, state, config, centroids)
    }

    /// Random sample initialization method (a.k.a. Forgy)
    ///
    /// ## Description
    /// This initialization method randomly selects k distinct samples as initial centroids.
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to an instance-method of [`KMeans`].
    pub fn init_random_sample(kmean: &KMeans<T, D>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<()> {
        crate::inits::randomsample::calculate(kmean, state, config)
    }
}
