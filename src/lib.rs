pub mod distance_measure;
pub mod error;
pub mod ffi;
pub mod interface;
#[cfg(feature = "python")]
mod python_binding;
#[cfg(test)]
mod test_utils;
mod utils;
pub mod wdtw;
pub mod window;

pub use distance_measure::{DistanceMeasure, Metric};
pub use error::WdtwError;
pub use interface::Parameters;
pub use utils::LibData;
pub use wdtw::{compute, seed_cost_matrix, WeightedDtw};
pub use window::Window;
