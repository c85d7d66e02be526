use crate::distance_measure::DistanceMeasure;
use crate::utils::LibData;
use ndarray::ArrayView1;

/// `sqrt(sum_k (a[k] - b[k])^2)`, accumulated in the element type.
#[derive(Copy, Clone, Default)]
pub struct Euclidean;

impl<A: LibData> DistanceMeasure<A> for Euclidean {
    const NAME: &'static str = "euclidean";

    fn distance(point_a: ArrayView1<A>, point_b: ArrayView1<A>) -> A {
        point_a
            .iter()
            .zip(point_b.iter())
            .map(|(a_, b_)| {
                let diff = *a_ - *b_;
                diff * diff
            })
            .sum::<A>()
            .sqrt()
    }
}
