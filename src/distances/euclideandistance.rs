use crate::{DistanceFunction, Point, Primitive};

/// Squared euclidean distance. The square root is never taken, since the
/// engine only compares distances and sums them up.
pub struct EuclideanDistance;

impl<T: Primitive> DistanceFunction<T> for EuclideanDistance {
    #[inline(always)]
    fn distance(&self, a: &Point<T>, b: &Point<T>) -> T {
        let (dx, dy) = (a.x - b.x, a.y - b.y);
        dx * dx + dy * dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn squared_distance_f32() { squared_distance::<f32>(); }
    #[test] fn squared_distance_f64() { squared_distance::<f64>(); }

    fn squared_distance<T: Primitive>() {
        let p = |x: f64, y: f64| Point::new(T::from(x).unwrap(), T::from(y).unwrap());
        assert_eq!(EuclideanDistance.distance(&p(0.0, 0.0), &p(3.0, 4.0)), T::from(25.0).unwrap());
        assert_eq!(EuclideanDistance.distance(&p(-1.0, 2.0), &p(-1.0, 2.0)), T::zero());
        assert!(EuclideanDistance.distance(&p(0.0, 0.0), &Point::new(T::nan(), T::zero())).is_nan());
        assert!(EuclideanDistance.distance(&p(0.0, 0.0), &Point::new(T::infinity(), T::zero())).is_infinite());
    }
}
