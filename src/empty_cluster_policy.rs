use crate::{primitive::count_as, Point, Primitive};

/// Enum with the possible handlings of empty clusters.
/// A cluster is empty, when the assignment step did not assign a single sample to its centroid,
/// which leaves the mean of its samples undefined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyClusterPolicy {
	/// The centroid of an empty cluster keeps its previous position. It may win samples again in
	/// a later iteration, once other centroids moved.
	#[default]
	KeepPrevious,
	/// The mean is calculated regardless, dividing the (zero) coordinate sums by a count of zero.
	/// The centroid becomes NaN and can never be assigned a sample again, for the rest of the run.
	/// This reproduces the behavior of the classic reference implementation.
	Propagate,
}
impl EmptyClusterPolicy {
	/// Move **centroid** to the mean of its samples, given as coordinate sums and sample count.
	/// ## Returns
	/// - **true** if the centroid was written
	/// - **false** if the centroid was left untouched
	pub(crate) fn update_centroid<T: Primitive>(&self, centroid: &mut Point<T>, sum: Point<T>, count: usize) -> bool {
		if count == 0 && *self == EmptyClusterPolicy::KeepPrevious {
			return false;
		}
		let count = count_as::<T>(count);
		*centroid = Point::new(sum.x / count, sum.y / count);
		true
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test] fn keep_previous_f32() { keep_previous::<f32>(); }
	#[test] fn keep_previous_f64() { keep_previous::<f64>(); }

	fn keep_previous<T: Primitive>() {
		let t = |v: f64| T::from(v).unwrap();
		let policy = EmptyClusterPolicy::KeepPrevious;
		{
			let mut centroid = Point::new(t(1.0), t(2.0));
			assert_eq!(policy.update_centroid(&mut centroid, Point::new(t(6.0), t(3.0)), 3), true);
			assert_eq!(centroid, Point::new(t(2.0), t(1.0)));
		}
		{
			let mut centroid = Point::new(t(1.0), t(2.0));
			assert_eq!(policy.update_centroid(&mut centroid, Point::new(T::zero(), T::zero()), 0), false);
			assert_eq!(centroid, Point::new(t(1.0), t(2.0)));
		}
	}

	#[test] fn propagate_f32() { propagate::<f32>(); }
	#[test] fn propagate_f64() { propagate::<f64>(); }

	fn propagate<T: Primitive>() {
		let t = |v: f64| T::from(v).unwrap();
		let policy = EmptyClusterPolicy::Propagate;
		{
			let mut centroid = Point::new(t(1.0), t(2.0));
			assert_eq!(policy.update_centroid(&mut centroid, Point::new(t(-4.0), t(4.0)), 2), true);
			assert_eq!(centroid, Point::new(t(-2.0), t(2.0)));
		}
		{
			let mut centroid = Point::new(t(1.0), t(2.0));
			assert_eq!(policy.update_centroid(&mut centroid, Point::new(T::zero(), T::zero()), 0), true);
			assert!(centroid.x.is_nan() && centroid.y.is_nan());
		}
	}

	#[test]
	fn default_keeps_previous() {
		assert_eq!(EmptyClusterPolicy::default(), EmptyClusterPolicy::KeepPrevious);
	}
}
