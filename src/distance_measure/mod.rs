use crate::utils::LibData;
use anyhow::{anyhow, Error};
use ndarray::ArrayView1;
use std::fmt;
use std::str::FromStr;

pub mod euclidean;
pub mod manhattan;

pub use euclidean::Euclidean;
pub use manhattan::Manhattan;

/// Local cost between one timestep of each sequence, before weighting.
pub trait DistanceMeasure<A: LibData> where Self: Default + Copy + Clone + Send + Sync {
    const NAME: &'static str;

    fn distance(point_a: ArrayView1<A>, point_b: ArrayView1<A>) -> A;
}

/// Runtime choice of [`DistanceMeasure`], e.g. from a Python keyword argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Euclidean,
    Manhattan,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Euclidean => <Euclidean as DistanceMeasure<f32>>::NAME,
            Self::Manhattan => <Manhattan as DistanceMeasure<f32>>::NAME,
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Euclidean
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            <Euclidean as DistanceMeasure<f32>>::NAME => Ok(Self::Euclidean),
            <Manhattan as DistanceMeasure<f32>>::NAME => Ok(Self::Manhattan),
            _ => Err(anyhow!("Distance measure {} not known.", s)),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
