pub mod spline;

pub use spline::{ComplexSpline, CubicSpline};

/// Inclusive uniform grid with the endpoint pinned exactly.
pub fn linear_grid(start: f64, end: f64, count: usize) -> Option<Vec<f64>> {
    if count < 2 {
        return None;
    }

    let step = (end - start) / ((count - 1) as f64);
    let mut grid = Vec::with_capacity(count);
    for index in 0..count {
        grid.push(start + step * (index as f64));
    }

    if let Some(last) = grid.last_mut() {
        *last = end;
    }

    Some(grid)
}

pub fn strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|window| window[0] < window[1])
}

#[cfg(test)]
mod tests {
    use super::{linear_grid, strictly_increasing};

    #[test]
    fn linear_grid_is_inclusive_and_rejects_invalid_counts() {
        assert_eq!(linear_grid(0.0, 1.0, 1), None);
        let grid = linear_grid(0.0, 2.0, 5).expect("grid");
        assert_eq!(grid, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn linear_grid_pins_the_endpoint_exactly() {
        let grid = linear_grid(0.01, 12.00, 1200).expect("grid");
        assert_eq!(grid.len(), 1200);
        assert_eq!(grid[0], 0.01);
        assert_eq!(*grid.last().unwrap(), 12.00);
        assert!(strictly_increasing(&grid));
    }

    #[test]
    fn strictly_increasing_rejects_ties_and_reversals() {
        assert!(strictly_increasing(&[1.0, 2.0, 3.0]));
        assert!(!strictly_increasing(&[1.0, 1.0, 3.0]));
        assert!(!strictly_increasing(&[1.0, 0.5]));
    }
}
