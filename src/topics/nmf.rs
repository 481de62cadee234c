// Pretrained NMF topic model.
//
// Only inference lives here. Given the fixed component matrix H (topics x
// features), transform finds non-negative weights w minimizing ||x - wH||²
// with cyclic coordinate descent over the weights, starting from the constant
// sqrt(mean(x) / k) and stopping once the projected-gradient violation drops
// below `tol` times its first-sweep value.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use super::labels::TOPIC_COUNT;
use super::traits::TopicModel;

fn default_max_iter() -> usize {
    200
}

fn default_tol() -> f64 {
    1e-4
}

#[derive(Debug, Clone, Deserialize)]
pub struct NmfModel {
    /// One row per topic, one column per vectorizer feature.
    components: Vec<Vec<f64>>,
    #[serde(default = "default_max_iter")]
    max_iter: usize,
    #[serde(default = "default_tol")]
    tol: f64,
}

impl NmfModel {
    /// Load and validate an `nmf_model.json` artifact.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read NMF artifact {}", path.display()))?;
        let model = Self::from_json(&json)
            .with_context(|| format!("Invalid NMF artifact {}", path.display()))?;
        info!(
            components = model.n_components(),
            features = model.n_features(),
            max_iter = model.max_iter,
            "Loaded NMF model"
        );
        Ok(model)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(json).context("Failed to parse NMF JSON")?;
        model.validate()?;
        Ok(model)
    }

    /// Build directly from a component matrix (default solver settings).
    pub fn from_components(components: Vec<Vec<f64>>) -> Result<Self> {
        let model = Self {
            components,
            max_iter: default_max_iter(),
            tol: default_tol(),
        };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.components.len() != TOPIC_COUNT {
            anyhow::bail!(
                "NMF model has {} components, expected {TOPIC_COUNT}",
                self.components.len()
            );
        }
        let width = self.n_features();
        if width == 0 {
            anyhow::bail!("NMF components have no features");
        }
        if let Some(i) = self.components.iter().position(|row| row.len() != width) {
            anyhow::bail!(
                "NMF component {i} has {} features, expected {width}",
                self.components[i].len()
            );
        }
        if self
            .components
            .iter()
            .flatten()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            anyhow::bail!("NMF components must be finite and non-negative");
        }
        if self.max_iter == 0 || self.tol < 0.0 {
            anyhow::bail!("Invalid NMF solver settings (max_iter {}, tol {})", self.max_iter, self.tol);
        }
        Ok(())
    }
}

impl TopicModel for NmfModel {
    fn n_components(&self) -> usize {
        self.components.len()
    }

    fn n_features(&self) -> usize {
        self.components.first().map_or(0, Vec::len)
    }

    fn transform(&self, features: &[f64]) -> Vec<f64> {
        let h = &self.components;
        let k = h.len();

        // H·Hᵀ and x·Hᵀ are fixed for the whole solve
        let hht: Vec<Vec<f64>> = h
            .iter()
            .map(|a| h.iter().map(|b| dot(a, b)).collect())
            .collect();
        let xht: Vec<f64> = h.iter().map(|row| dot(features, row)).collect();

        let mean = if features.is_empty() {
            0.0
        } else {
            features.iter().sum::<f64>() / features.len() as f64
        };
        let mut w = vec![(mean / k as f64).sqrt(); k];

        let mut violation_init = 0.0;
        let mut iterations = 0;
        for iter in 1..=self.max_iter {
            iterations = iter;
            let violation = coordinate_sweep(&mut w, &hht, &xht);
            if iter == 1 {
                violation_init = violation;
            }
            if violation_init == 0.0 || violation / violation_init <= self.tol {
                break;
            }
        }

        debug!(iterations, "NMF transform converged");
        w
    }
}

/// One pass of coordinate descent over every weight. Returns the summed
/// projected-gradient violation.
fn coordinate_sweep(w: &mut [f64], hht: &[Vec<f64>], xht: &[f64]) -> f64 {
    let mut violation = 0.0;
    for t in 0..w.len() {
        let grad = -xht[t] + dot(&hht[t], w);
        let projected = if w[t] == 0.0 { grad.min(0.0) } else { grad };
        violation += projected.abs();

        let hess = hht[t][t];
        if hess != 0.0 {
            w[t] = (w[t] - grad / hess).max(0.0);
        }
    }
    violation
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
