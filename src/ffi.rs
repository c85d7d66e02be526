//! C entry point for callers that hand over raw `float` buffers.

use crate::error::WdtwError;
use crate::utils::extent;
use crate::wdtw::{compute, dimensions};
use crate::window::Window;
use log::warn;
use std::convert::TryFrom;
use std::mem::size_of;
use std::os::raw::c_int;
use std::slice;

/// Fills the band of the row-major `m × m` matrix `costs_out` from the
/// row-major `m × n` sequences `x1`, `x2` and the `m` weights `w`.
///
/// Returns `0` on success, otherwise [`WdtwError::code`] of the failure; the
/// matrix is left untouched on failure.
///
/// # Safety
///
/// Non-null pointers must address at least `m * n` (`x1`, `x2`), `m` (`w`) and
/// `m * m` (`costs_out`) initialised `f32` values, and `costs_out` must not
/// overlap any input for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn weighted_euclidean(
    x1: *const f32,
    x2: *const f32,
    w: *const f32,
    m: c_int,
    n: c_int,
    window: c_int,
    costs_out: *mut f32,
) -> c_int {
    match weighted_euclidean_checked(x1, x2, w, m, n, window, costs_out) {
        Ok(()) => 0,
        Err(error) => {
            warn!("weighted_euclidean: {}", error);
            error.code()
        }
    }
}

unsafe fn weighted_euclidean_checked(
    x1: *const f32,
    x2: *const f32,
    w: *const f32,
    m: c_int,
    n: c_int,
    window: c_int,
    costs_out: *mut f32,
) -> Result<(), WdtwError> {
    let (rows, cols) = dimensions(m.into(), n.into())?;
    Window::try_from(i64::from(window))?;

    let sequence_len = addressable("x1", rows, cols)?;
    let costs_len = addressable("costs_out", rows, rows)?;
    not_null("x1", x1)?;
    not_null("x2", x2)?;
    not_null("w", w)?;
    not_null("costs_out", costs_out)?;

    compute(
        slice::from_raw_parts(x1, sequence_len),
        slice::from_raw_parts(x2, sequence_len),
        slice::from_raw_parts(w, rows),
        m.into(),
        n.into(),
        window.into(),
        slice::from_raw_parts_mut(costs_out, costs_len),
    )
}

/// Element count of a `rows × cols` buffer, if a slice of it can exist.
fn addressable(buffer: &'static str, rows: usize, cols: usize) -> Result<usize, WdtwError> {
    extent(rows, cols)
        .filter(|len| *len <= isize::MAX as usize / size_of::<f32>())
        .ok_or(WdtwError::BufferTooSmall {
            buffer,
            required: rows.saturating_mul(cols),
            actual: 0,
        })
}

fn not_null<T>(buffer: &'static str, pointer: *const T) -> Result<(), WdtwError> {
    if pointer.is_null() {
        Err(WdtwError::NullPointer { buffer })
    } else {
        Ok(())
    }
}
