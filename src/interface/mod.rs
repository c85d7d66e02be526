pub use crate::interface::parameters::Parameters;

mod parameters;
