use crate::distance_measure::DistanceMeasure;
use crate::utils::LibData;
use ndarray::ArrayView1;

#[derive(Copy, Clone, Default)]
pub struct Manhattan;

impl<A: LibData> DistanceMeasure<A> for Manhattan {
    const NAME: &'static str = "manhattan";

    fn distance(point_a: ArrayView1<A>, point_b: ArrayView1<A>) -> A {
        point_a.iter()
            .zip(point_b.iter())
            .map(|(a_, b_)| a_.sub(*b_).abs())
            .sum()
    }
}
