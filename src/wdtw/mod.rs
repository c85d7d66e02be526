
use crate::distance_measure::{DistanceMeasure, Euclidean};
use crate::error::WdtwError;
use crate::interface::Parameters;
use crate::utils::{extent, LibData};
use crate::window::Window;
use log::{debug, trace};
use ndarray::{s, Array2, ArrayView1, ArrayView2, ArrayViewMut2};
use std::convert::TryFrom;
use std::marker::PhantomData;

/// Banded DTW over per-timestep weighted local costs.
///
/// For every row `i` in `1..m` and every column `j` in
/// [`Window::column_range`], the cost matrix receives
///
/// ```text
/// costs[i, j] = w[i] * w[j] * D(a[i, :], b[j, :])
///             + min(costs[i, j - 1], costs[i - 1, j], costs[i - 1, j - 1])
/// ```
///
/// Rows are swept in ascending order and columns left to right, so every
/// predecessor is final before it is read. Row 0, column 0 and all cells
/// outside the band are never written; seeding them is up to the caller (see
/// [`seed_cost_matrix`]).
#[derive(Clone, Copy)]
pub struct WeightedDtw<A: LibData, D: DistanceMeasure<A> = Euclidean> {
    window: Window,
    distance_measure: PhantomData<(A, D)>,
}

impl<A: LibData, D: DistanceMeasure<A>> WeightedDtw<A, D> {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            distance_measure: PhantomData::default(),
        }
    }

    /// Uses the window of `parameters`. The metric is fixed by `D`.
    pub fn from_parameters(parameters: &Parameters) -> Self {
        Self::new(parameters.window())
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// Fills the band of `costs` in place.
    ///
    /// `seq_a` defines `m` (rows) and `n` (columns). `seq_b` must have the same
    /// number of columns and at least `m` rows, `weights` at least `m` entries
    /// and `costs` at least `m × m` cells; only the leading part of oversized
    /// inputs is used. Nothing is written when validation fails.
    pub fn fill(
        &self,
        seq_a: ArrayView2<A>,
        seq_b: ArrayView2<A>,
        weights: ArrayView1<A>,
        mut costs: ArrayViewMut2<A>,
    ) -> Result<(), WdtwError> {
        let (m, n) = seq_a.dim();
        if m < 1 || n < 1 {
            return Err(WdtwError::InvalidDimension {
                rows: signed(m),
                cols: signed(n),
            });
        }
        if seq_b.ncols() != n {
            return Err(WdtwError::InvalidDimension {
                rows: signed(seq_b.nrows()),
                cols: signed(seq_b.ncols()),
            });
        }
        if seq_b.nrows() < m {
            return Err(WdtwError::BufferTooSmall {
                buffer: "seq_b",
                required: m * n,
                actual: seq_b.len(),
            });
        }
        if weights.len() < m {
            return Err(WdtwError::BufferTooSmall {
                buffer: "weights",
                required: m,
                actual: weights.len(),
            });
        }
        if costs.nrows() < m || costs.ncols() < m {
            return Err(WdtwError::BufferTooSmall {
                buffer: "costs",
                required: extent(m, m).unwrap_or(usize::MAX),
                actual: costs.len(),
            });
        }

        let cells = self.accumulate(
            seq_a,
            seq_b.slice(s![..m, ..]),
            weights.slice(s![..m]),
            costs.slice_mut(s![..m, ..m]),
        );
        debug!(
            "wdtw: filled {} cells of a {}x{} cost matrix (n = {}, window = {})",
            cells,
            m,
            m,
            n,
            self.window.radius()
        );
        Ok(())
    }

    /// Alignment cost of `seq_a` and `seq_b`: the last cell of a freshly
    /// seeded `m × m` matrix after [`fill`](Self::fill).
    ///
    /// Under canonical seeding timestep 0 is the alignment origin and does not
    /// contribute a local cost. The result is infinite when the band does not
    /// reach the last cell (window 0 with `m > 1`).
    pub fn distance(
        &self,
        seq_a: ArrayView2<A>,
        seq_b: ArrayView2<A>,
        weights: ArrayView1<A>,
    ) -> Result<A, WdtwError> {
        let m = seq_a.nrows();
        let mut costs = Array2::zeros((m, m));
        seed_cost_matrix(costs.view_mut());
        self.fill(seq_a, seq_b, weights, costs.view_mut())?;
        Ok(costs[[m - 1, m - 1]])
    }

    fn accumulate(
        &self,
        seq_a: ArrayView2<A>,
        seq_b: ArrayView2<A>,
        weights: ArrayView1<A>,
        mut costs: ArrayViewMut2<A>,
    ) -> usize {
        let m = seq_a.nrows();
        let mut cells = 0;

        for i in 1..m {
            let columns = self.window.column_range(i, m);
            trace!("wdtw: row {} columns {:?}", i, columns);

            let row_a = seq_a.row(i);
            let weight_i = weights[i];
            for j in columns {
                let cost = weight_i * weights[j] * D::distance(row_a, seq_b.row(j));
                let best = lesser(
                    costs[[i, j - 1]],
                    lesser(costs[[i - 1, j]], costs[[i - 1, j - 1]]),
                );
                costs[[i, j]] = cost + best;
                cells += 1;
            }
        }

        cells
    }
}

/// Canonical DTW seeding: every cell infinite, the origin `(0, 0)` zero.
pub fn seed_cost_matrix<A: LibData>(mut costs: ArrayViewMut2<A>) {
    for cell in costs.iter_mut() {
        *cell = A::INFINITY;
    }
    if let Some(origin) = costs.get_mut((0, 0)) {
        *origin = A::ZERO;
    }
}

/// Fills `costs` for two row-major `m × n` buffers with the Euclidean local
/// metric.
///
/// Dimensions, then the window, then the buffers (in argument order) are
/// validated before anything is written. Buffers longer than their logical
/// extent (`m * n`, `m`, `m * m`) are accepted and only their prefix is used.
pub fn compute<A: LibData>(
    seq_a: &[A],
    seq_b: &[A],
    weights: &[A],
    m: i64,
    n: i64,
    window: i64,
    costs: &mut [A],
) -> Result<(), WdtwError> {
    let (rows, cols) = dimensions(m, n)?;
    let window = Window::try_from(window)?;

    let seq_a = view2("seq_a", seq_a, rows, cols)?;
    let seq_b = view2("seq_b", seq_b, rows, cols)?;
    let weights = leading("weights", weights, Some(rows))?;
    let costs = view2_mut("costs", costs, rows, rows)?;

    WeightedDtw::<A, Euclidean>::new(window).fill(seq_a, seq_b, ArrayView1::from(weights), costs)
}

/// Validated `(m, n)` as sizes.
pub(crate) fn dimensions(m: i64, n: i64) -> Result<(usize, usize), WdtwError> {
    let invalid = || WdtwError::InvalidDimension { rows: m, cols: n };
    if m < 1 || n < 1 {
        return Err(invalid());
    }
    let rows = usize::try_from(m).map_err(|_| invalid())?;
    let cols = usize::try_from(n).map_err(|_| invalid())?;
    Ok((rows, cols))
}

fn leading<'a, A>(
    buffer: &'static str,
    data: &'a [A],
    required: Option<usize>,
) -> Result<&'a [A], WdtwError> {
    let actual = data.len();
    match required {
        Some(required) if required <= actual => Ok(&data[..required]),
        _ => Err(too_small(buffer, required.unwrap_or(usize::MAX), actual)),
    }
}

fn leading_mut<'a, A>(
    buffer: &'static str,
    data: &'a mut [A],
    required: Option<usize>,
) -> Result<&'a mut [A], WdtwError> {
    let actual = data.len();
    match required {
        Some(required) if required <= actual => Ok(&mut data[..required]),
        _ => Err(too_small(buffer, required.unwrap_or(usize::MAX), actual)),
    }
}

fn view2<'a, A>(
    buffer: &'static str,
    data: &'a [A],
    rows: usize,
    cols: usize,
) -> Result<ArrayView2<'a, A>, WdtwError> {
    let actual = data.len();
    let required = extent(rows, cols);
    let data = leading(buffer, data, required)?;
    ArrayView2::from_shape((rows, cols), data)
        .map_err(|_| too_small(buffer, required.unwrap_or(usize::MAX), actual))
}

fn view2_mut<'a, A>(
    buffer: &'static str,
    data: &'a mut [A],
    rows: usize,
    cols: usize,
) -> Result<ArrayViewMut2<'a, A>, WdtwError> {
    let actual = data.len();
    let required = extent(rows, cols);
    let data = leading_mut(buffer, data, required)?;
    ArrayViewMut2::from_shape((rows, cols), data)
        .map_err(|_| too_small(buffer, required.unwrap_or(usize::MAX), actual))
}

fn too_small(buffer: &'static str, required: usize, actual: usize) -> WdtwError {
    WdtwError::BufferTooSmall {
        buffer,
        required,
        actual,
    }
}

fn signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// `b` if it is strictly smaller than `a`, otherwise `a`.
fn lesser<A: LibData>(a: A, b: A) -> A {
    if b < a {
        b
    } else {
        a
    }
}
