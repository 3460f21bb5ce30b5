//! Normal to the hyperbola `x² − xy + 1 = 0`
//!
//! On the curve `y = x + 1/x`, so the tangent slope is `1 − 1/x²`. The
//! normal at a point is perpendicular to a line `A·x + B·y + C = 0` exactly
//! when the tangent there is parallel to that line, i.e. has slope `−A/B`.

use crate::error::{AlgoError, AlgoResult};
use crate::TOLERANCE;

/// Normal line to the curve through its point of contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalLine {
    /// Point of contact `(x, y)`
    pub contact: [f64; 2],
    /// Direction of the normal, the coefficients `(A, B)` of the given line
    pub direction: [f64; 2],
}

impl NormalLine {
    /// Slope of the normal, `None` when it is vertical
    pub fn slope(&self) -> Option<f64> {
        let [dx, dy] = self.direction;
        if dx.abs() < TOLERANCE {
            None
        } else {
            Some(dy / dx)
        }
    }

    /// `y` on the normal at abscissa `x`, `None` when the normal is vertical
    pub fn y_at(&self, x: f64) -> Option<f64> {
        let slope = self.slope()?;
        Some(slope * (x - self.contact[0]) + self.contact[1])
    }
}

/// Point of contact of the normal perpendicular to `A·x + B·y + C = 0`.
///
/// `x² = 1 / (1 − m)` with `m = −A/B` has two solutions; the one with
/// positive `x` is returned (`(−x, −y)` is the other). `C` does not matter.
pub fn solve_for_point(line_a: f64, line_b: f64) -> AlgoResult<[f64; 2]> {
    if line_b.abs() < TOLERANCE {
        return Err(AlgoError::VerticalLine);
    }
    let slope = -line_a / line_b;

    let denom = 1.0 - slope;
    if denom < TOLERANCE {
        return Err(AlgoError::NoContactPoint { slope });
    }

    let x = 1.0 / denom.sqrt();
    let y = x + 1.0 / x;
    log::debug!("tangent slope {slope} reached at ({x}, {y})");
    Ok([x, y])
}

/// Normal line perpendicular to `A·x + B·y + C = 0`
pub fn normal_to_hyperbola(line_a: f64, line_b: f64) -> AlgoResult<NormalLine> {
    let contact = solve_for_point(line_a, line_b)?;
    Ok(NormalLine {
        contact,
        direction: [line_a, line_b],
    })
}
