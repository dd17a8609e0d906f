//! Fitness-function variants.
//!
//! A few standard benchmark landscapes plus a mean-squared-error pull toward
//! a configured target point. All of them minimize: the global optima sit at
//! fitness 0 (or as close as floating point allows). Configuration is fixed
//! at construction; evaluation is pure.

use serde::{Deserialize, Serialize};
use std::f64::consts::{E, PI};

use crate::error::SearchError;
use crate::{Domain, FitnessFunction};

/// Mean squared error between a candidate and a fixed target point.
///
/// The target is ordinary immutable configuration, not ambient state; move
/// the target by constructing a new function.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeanSquaredError {
    target: Vec<f64>,
}

impl MeanSquaredError {
    pub fn new(target: Vec<f64>) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &[f64] {
        &self.target
    }
}

impl FitnessFunction for MeanSquaredError {
    fn evaluate(&self, point: &[f64]) -> Result<f64, SearchError> {
        if point.len() != self.target.len() {
            return Err(SearchError::dimension_mismatch(
                "MeanSquaredError",
                self.target.len(),
                point.len(),
            ));
        }
        let sum: f64 = point
            .iter()
            .zip(&self.target)
            .map(|(x, t)| (x - t) * (x - t))
            .sum();
        Ok(sum / self.target.len() as f64)
    }

    fn minima(&self) -> Vec<Vec<f64>> {
        vec![self.target.clone()]
    }

    fn domain(&self) -> Domain {
        Domain {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 1.0,
            max_y: 1.0,
        }
    }
}

/// Rastrigin function: highly multimodal, global minimum f(0,...,0) = 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rastrigin {
    dims: usize,
}

impl Rastrigin {
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl FitnessFunction for Rastrigin {
    fn evaluate(&self, point: &[f64]) -> Result<f64, SearchError> {
        if point.len() != self.dims {
            return Err(SearchError::dimension_mismatch("Rastrigin", self.dims, point.len()));
        }
        let n = point.len() as f64;
        Ok(10.0 * n
            + point
                .iter()
                .map(|x| x * x - 10.0 * (2.0 * PI * x).cos())
                .sum::<f64>())
    }

    fn minima(&self) -> Vec<Vec<f64>> {
        vec![vec![0.0; self.dims]]
    }

    fn domain(&self) -> Domain {
        Domain {
            min_x: -5.12,
            min_y: -5.12,
            max_x: 5.12,
            max_y: 5.12,
        }
    }
}

/// Ackley function: nearly flat plateau with a deep central well, global
/// minimum f(0,...,0) = 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ackley {
    dims: usize,
}

impl Ackley {
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl FitnessFunction for Ackley {
    fn evaluate(&self, point: &[f64]) -> Result<f64, SearchError> {
        if point.len() != self.dims {
            return Err(SearchError::dimension_mismatch("Ackley", self.dims, point.len()));
        }
        let n = point.len() as f64;
        let sum_sq: f64 = point.iter().map(|x| x * x).sum();
        let sum_cos: f64 = point.iter().map(|x| (2.0 * PI * x).cos()).sum();
        Ok(-20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + E)
    }

    fn minima(&self) -> Vec<Vec<f64>> {
        vec![vec![0.0; self.dims]]
    }

    fn domain(&self) -> Domain {
        Domain {
            min_x: -5.0,
            min_y: -5.0,
            max_x: 5.0,
            max_y: 5.0,
        }
    }
}

/// Rosenbrock function: a narrow curved valley, global minimum
/// f(1,...,1) = 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rosenbrock {
    dims: usize,
}

impl Rosenbrock {
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl FitnessFunction for Rosenbrock {
    fn evaluate(&self, point: &[f64]) -> Result<f64, SearchError> {
        if point.len() != self.dims {
            return Err(SearchError::dimension_mismatch("Rosenbrock", self.dims, point.len()));
        }
        Ok(point
            .windows(2)
            .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
            .sum())
    }

    fn minima(&self) -> Vec<Vec<f64>> {
        vec![vec![1.0; self.dims]]
    }

    fn domain(&self) -> Domain {
        Domain {
            min_x: -2.0,
            min_y: -1.0,
            max_x: 2.0,
            max_y: 3.0,
        }
    }
}

/// Himmelblau function, 2-D only: four distinct global minima, all at 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Himmelblau;

impl Himmelblau {
    pub fn new() -> Self {
        Self
    }
}

impl FitnessFunction for Himmelblau {
    fn evaluate(&self, point: &[f64]) -> Result<f64, SearchError> {
        if point.len() != 2 {
            return Err(SearchError::dimension_mismatch("Himmelblau", 2, point.len()));
        }
        let (x, y) = (point[0], point[1]);
        Ok((x * x + y - 11.0).powi(2) + (x + y * y - 7.0).powi(2))
    }

    fn minima(&self) -> Vec<Vec<f64>> {
        vec![
            vec![3.0, 2.0],
            vec![-2.805118, 3.131312],
            vec![-3.779310, -3.283186],
            vec![3.584428, -1.848126],
        ]
    }

    fn domain(&self) -> Domain {
        Domain {
            min_x: -5.0,
            min_y: -5.0,
            max_x: 5.0,
            max_y: 5.0,
        }
    }
}
