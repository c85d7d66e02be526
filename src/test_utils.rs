use crate::utils::LibData;
use anyhow::{anyhow, Context, Result};
use csv::{ReaderBuilder, Trim};
use ndarray::Array2;
use std::fs::File;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Reads a headed CSV of numbers into a `rows × columns` matrix.
pub fn read_data<A: LibData>(file_path: &str) -> Result<Array2<A>> {
    let file = File::open(file_path).with_context(|| format!("could not open {}", file_path))?;
    let mut reader = ReaderBuilder::new().has_headers(true).trim(Trim::All).from_reader(file);

    let n_columns = reader.headers()?.len();
    let mut flat_data: Vec<A> = Vec::new();
    for record in reader.records() {
        for field in record?.iter() {
            let value = A::from_str(field).map_err(|_| anyhow!("could not parse `{}` in {}", field, file_path))?;
            flat_data.push(value);
        }
    }

    let n_rows = flat_data.len() / n_columns;
    Array2::from_shape_vec((n_rows, n_columns), flat_data)
        .with_context(|| format!("{} is not rectangular", file_path))
}

pub fn close_l1<A: LibData>(expected: A, actual: A, tolerance: A) {
    assert!(
        (expected - actual).abs() < tolerance,
        "expected {}, got {}",
        expected,
        actual
    );
}
