use crate::distance_measure::Metric;
use crate::window::Window;

/// Configuration of a weighted DTW computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    /// Band radius; `None` covers the whole matrix.
    pub window: Option<usize>,
    pub metric: Metric,
}

impl Parameters {
    pub fn window(&self) -> Window {
        self.window.map_or_else(Window::unbounded, Window::new)
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            window: None,
            metric: Metric::default()
        }
    }
}
