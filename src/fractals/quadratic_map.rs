use num::complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::core::error::{RenderError, RenderResult};

/// Upper bound on `max_iter_count`; the color table holds one entry per count.
pub const MAX_ITER_COUNT_LIMIT: u32 = 1 << 20;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ConvergenceParams {
    pub escape_radius: f64,
    pub max_iter_count: u32,
}

impl Default for ConvergenceParams {
    fn default() -> Self {
        ConvergenceParams {
            escape_radius: 2.0,
            max_iter_count: 256,
        }
    }
}

impl ConvergenceParams {
    pub fn validate(&self) -> RenderResult<()> {
        if self.max_iter_count == 0 || self.max_iter_count > MAX_ITER_COUNT_LIMIT {
            return Err(RenderError::InvalidParameters(format!(
                "max_iter_count must be on [1, {}], got {}",
                MAX_ITER_COUNT_LIMIT, self.max_iter_count
            )));
        }
        if !(self.escape_radius >= 0.0 && self.escape_radius.is_finite()) {
            return Err(RenderError::InvalidParameters(format!(
                "escape_radius must be finite and non-negative, got {}",
                self.escape_radius
            )));
        }
        Ok(())
    }
}

/**
 * Internal state of the quadratic map sequence. Keeps the squared components
 * cached so that the escape test and the update share multiplications.
 */
pub struct QuadraticMapSequence {
    pub x0: f64,
    pub y0: f64,
    pub x: f64,
    pub y: f64,
    pub x_sqr: f64,
    pub y_sqr: f64,
    pub iter_count: u32,
}

impl QuadraticMapSequence {
    /// Sequence for Z := Z*Z + C, starting from Z = 0.
    pub fn new(constant_term: &Complex64) -> QuadraticMapSequence {
        QuadraticMapSequence {
            x0: constant_term.re,
            y0: constant_term.im,
            x: 0.0,
            y: 0.0,
            x_sqr: 0.0,
            y_sqr: 0.0,
            iter_count: 0,
        }
    }

    pub fn radius_squared(&self) -> f64 {
        self.x_sqr + self.y_sqr
    }

    // Z = Z*Z + C
    fn step(&mut self) {
        self.y = (self.x + self.x) * self.y + self.y0;
        self.x = self.x_sqr - self.y_sqr + self.x0;
        self.x_sqr = self.x * self.x;
        self.y_sqr = self.y * self.y;
        self.iter_count += 1;
    }

    /// The escape test runs before every update, so a point that escapes after
    /// `n` updates stops with `iter_count == n`.
    /// @return: true if the point escapes, false otherwise.
    fn step_until_condition(&mut self, max_iter_count: u32, escape_radius: f64) -> bool {
        let escape_radius_squared = escape_radius * escape_radius;
        while self.iter_count < max_iter_count {
            if self.radius_squared() > escape_radius_squared {
                return true;
            }
            self.step();
        }
        false
    }

    /// Escape-time of the point `c` under Z := Z*Z + C, with Z starting at zero.
    /// @return: the number of updates completed before |Z| first exceeds the
    /// escape radius, or `max_iter_count` if that never happens. Always on
    /// [0, max_iter_count], and never 0 for a non-negative radius.
    pub fn escape_count(constant_term: &Complex64, convergence_params: &ConvergenceParams) -> u32 {
        let mut escape_sequence = QuadraticMapSequence::new(constant_term);
        if escape_sequence.step_until_condition(
            convergence_params.max_iter_count,
            convergence_params.escape_radius,
        ) {
            escape_sequence.iter_count
        } else {
            convergence_params.max_iter_count
        }
    }
}
