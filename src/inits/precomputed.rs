use crate::api::DistanceFunction;
use crate::{Error, KMeans, KMeansConfig, KMeansState, Point, Primitive, Result};

#[inline(always)]
pub fn calculate<T, D>(
    _kmean: &KMeans<T, D>, state: &mut KMeansState<T>, _config: &KMeansConfig<'_, T>, computed: Vec<Point<T>>,
) -> Result<()>
where
    T: Primitive,
    D: DistanceFunction<T>,
{
    if computed.len() != state.k {
        return Err(Error::InvalidParameter(format!(
            "initialized with {} centroids, but k is {}", computed.len(), state.k
        )));
    }
    computed.into_iter().enumerate().for_each(|(ci, c)| state.set_centroid(ci, c));
    Ok(())
}
