//! Conic section exercises
//!
//! - [`normal`] — normal to the hyperbola `x² − xy + 1 = 0` perpendicular to a line

pub mod normal;

pub use normal::{normal_to_hyperbola, solve_for_point, NormalLine};
