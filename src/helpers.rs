#[cfg(test)]
macro_rules! assert_approx_eq {
	($left: expr, $right: expr, $tol: expr) => ({
		match ($left, $right, $tol) {
			(left_val , right_val, tol_val) => {
				let delta = (left_val - right_val).abs();
				if !(delta < tol_val) {
					panic!(
						"assertion failed: `(left ≈ right)` \
						(left: `{}`, right: `{}`) \
						with ∆={:1.1e} (allowed ∆={:e})",
						left_val , right_val, delta, tol_val
					)
				}
			}
		}
	});
	($left: expr, $right: expr) => (assert_approx_eq!(($left), ($right), 1e-15))
}

#[cfg(test)]
pub(crate) mod testing {
	use std::collections::HashMap;
	use crate::{KMeansState, Point, Primitive};

	pub struct KMeansShouldResult<T: Primitive> {
		pub distsum: T,
		pub assignments: Vec<usize>,
		pub centroid_distances: Vec<T>,
		pub centroids: Vec<Point<T>>
	}

	/// Compare a k-means result against the expected one, while allowing the centroids to be numbered differently.
	pub fn assert_kmeans_result_eq<T: Primitive>(should: KMeansShouldResult<T>, actual: &KMeansState<T>) {
		let cmp_epsilon = T::from(0.01).unwrap();
		assert_approx_eq!(should.distsum, actual.distsum, cmp_epsilon);

		// compare cluster assignments - and while doing so, generate the mapping between the centroid ids
		let mut should_freq: HashMap<usize, usize> = HashMap::new();
		let mut idmap = HashMap::new();
		let mut idrevmap = HashMap::new();
		assert_eq!(should.assignments.len(), actual.assignments.len());
		for idx in 0..should.assignments.len() {
			let (should_id, actual_id) = (should.assignments[idx], actual.assignments[idx]);
			if !idmap.contains_key(&should_id) {
				assert_eq!(idrevmap.contains_key(&actual_id), false);
				idmap.insert(should_id, actual_id);
				idrevmap.insert(actual_id, should_id);
			}
			if idmap[&should_id] != actual_id {
				panic!(
					"Cluster assignments different at idx {}.\nMapping(should -> actual): {:?}\nActual: {:?}\nShould: {:?}",
					idx, idmap, actual.assignments, should.assignments
				);
			}
			*should_freq.entry(actual_id).or_default() += 1;
		}
		// use idmap to compare should & actual in correct order
		for (should_idx, actual_idx) in idmap {
			assert_eq!(should_freq[&actual_idx], actual.centroid_frequency[actual_idx]);
			let (should_c, actual_c) = (should.centroids[should_idx], actual.centroids[actual_idx]);
			assert_approx_eq!(should_c.x, actual_c.x, cmp_epsilon);
			assert_approx_eq!(should_c.y, actual_c.y, cmp_epsilon);
		}
		for idx in 0..should.centroid_distances.len() {
			let (should_dist, actual_dist) = (should.centroid_distances[idx], actual.centroid_distances[idx]);
			if (should_dist - actual_dist).abs() > cmp_epsilon {
				panic!("Centroid distances mismatch at idx {}. Actual: {} but should have been: {}", idx, actual_dist, should_dist);
			}
		}
	}
}
