use crate::error::ConfigError;
use crate::state::{EnvironmentalState, STATE_DIM};
use serde::{Deserialize, Serialize};

/// Slack added to every bound so points on a face survive rounding.
pub const CONTAINMENT_EPSILON: f64 = 1e-9;

/// One inequality `a·x <= b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalfSpace {
    pub a: [f64; STATE_DIM],
    pub b: f64,
}

impl HalfSpace {
    pub fn new(a: [f64; STATE_DIM], b: f64) -> Self {
        Self { a, b }
    }

    pub fn dot(&self, x: &[f64; STATE_DIM]) -> f64 {
        self.a.iter().zip(x.iter()).map(|(a, v)| a * v).sum::<f64>()
    }

    pub fn admits(&self, x: &[f64; STATE_DIM]) -> bool {
        self.dot(x) <= self.b + CONTAINMENT_EPSILON
    }
}

/// Matrix layout used on the wire: `A` is m x 5, `b` is m.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolytopeMatrix {
    pub a: Vec<[f64; STATE_DIM]>,
    pub b: Vec<f64>,
}

/// Convex region `{x in R^5 | A x <= b}`. No rows means the whole space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolytopeMatrix", into = "PolytopeMatrix")]
pub struct Polytope {
    rows: Vec<HalfSpace>,
}

impl Polytope {
    pub fn new(rows: Vec<HalfSpace>) -> Self {
        Self { rows }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn from_matrix(a: Vec<[f64; STATE_DIM]>, b: Vec<f64>) -> Result<Self, ConfigError> {
        if a.len() != b.len() {
            return Err(ConfigError::RowCountMismatch {
                rows: a.len(),
                bounds: b.len(),
            });
        }
        let rows = a
            .into_iter()
            .zip(b)
            .map(|(a, b)| HalfSpace::new(a, b))
            .collect();
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[HalfSpace] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains_point(&self, x: &[f64; STATE_DIM]) -> bool {
        self.rows.iter().all(|row| row.admits(x))
    }

    pub fn contains(&self, state: &EnvironmentalState) -> bool {
        self.contains_point(&state.as_point())
    }

    /// Index of the first row the point violates, if any.
    pub fn first_violation(&self, state: &EnvironmentalState) -> Option<usize> {
        let x = state.as_point();
        self.rows.iter().position(|row| !row.admits(&x))
    }
}

impl TryFrom<PolytopeMatrix> for Polytope {
    type Error = ConfigError;

    fn try_from(m: PolytopeMatrix) -> Result<Self, Self::Error> {
        Polytope::from_matrix(m.a, m.b)
    }
}

impl From<Polytope> for PolytopeMatrix {
    fn from(p: Polytope) -> Self {
        let (a, b) = p.rows.into_iter().map(|row| (row.a, row.b)).unzip();
        PolytopeMatrix { a, b }
    }
}
