//! Python FFI bindings via PyO3.
//!
//! Exposes the classifier over the reference compass. The embedding model stays
//! on the Python side: pass any callable that maps a string to a list of floats.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from sentence_transformers import SentenceTransformer
//! from valence_core import Classifier
//!
//! model = SentenceTransformer("all-MiniLM-L6-v2")
//! clf = Classifier(lambda text: model.encode(text).tolist())
//!
//! radius, angle, label = clf.classify("I'm so excited and proud of myself!")
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::classifier::{Outcome, ValenceClassifier};
use crate::compass::polar_compass;
use crate::embedding::EmbeddingProvider;
use crate::error::{BoxError, ClassifyError};
use crate::guardrail::GuardrailConfig;

// ── Provider wrapper ─────────────────────────────────────────────────────────

/// Embedding provider backed by a Python callable `embed(text) -> list[float]`.
struct PyEmbedder {
    callable: Py<PyAny>,
}

impl EmbeddingProvider for PyEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, BoxError> {
        Python::with_gil(|py| self.callable.call1(py, (text,))?.extract::<Vec<f32>>(py))
            .map_err(|e| Box::new(e) as BoxError)
    }
}

fn to_py_err(err: ClassifyError) -> PyErr {
    match err {
        // Re-raise the callable's own exception unchanged.
        ClassifyError::Provider { text, source } => match source.downcast::<PyErr>() {
            Ok(py_err) => *py_err,
            Err(other) => PyRuntimeError::new_err(format!(
                "embedding provider failed for {text:?}: {other}"
            )),
        },
        other => PyValueError::new_err(other.to_string()),
    }
}

fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Neutral(_) => "neutral",
        Outcome::Snapped(_) => "snap",
        Outcome::Blended => "blend",
    }
}

// ── Classifier ───────────────────────────────────────────────────────────────

/// Emotion classifier over the reference polar compass.
///
/// Args:
///     embed:             callable mapping a string to a list of floats
///     confidence_floor:  best similarity below this reports Neutral (default 0.22)
///     score_ratio_floor: runner-up must exceed score1 × this to blend (default 0.75)
///     max_blend_angle:   widest angle in degrees that may blend (default 60)
///     weight_exponent:   exponent applied to scores for blend weights (default 2)
#[pyclass(name = "Classifier")]
pub struct PyClassifier {
    inner: ValenceClassifier<PyEmbedder>,
}

#[pymethods]
impl PyClassifier {
    /// Build a classifier. Embeds every compass anchor once.
    #[new]
    #[pyo3(signature = (embed, confidence_floor=0.22, score_ratio_floor=0.75, max_blend_angle=60.0, weight_exponent=2))]
    pub fn new(
        embed: Py<PyAny>,
        confidence_floor: f64,
        score_ratio_floor: f64,
        max_blend_angle: f64,
        weight_exponent: i32,
    ) -> PyResult<Self> {
        let config = GuardrailConfig {
            confidence_floor,
            score_ratio_floor,
            max_blend_angle,
            weight_exponent,
        };
        let inner = ValenceClassifier::with_config(
            polar_compass(),
            PyEmbedder { callable: embed },
            config,
        )
        .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Classify a journal entry.
    ///
    /// Returns:
    ///     (radius, angle, label)
    pub fn classify(&self, text: &str) -> PyResult<(f64, f64, String)> {
        self.inner
            .classify(text)
            .map(|r| r.into_tuple())
            .map_err(to_py_err)
    }

    /// Classify and report the branch taken.
    ///
    /// Returns:
    ///     (radius, angle, label, outcome, winning_sentence) where outcome is
    ///     "neutral", "snap" or "blend".
    pub fn explain(
        &self,
        text: &str,
    ) -> PyResult<(f64, f64, String, &'static str, Option<String>)> {
        let c = self.inner.explain(text).map_err(to_py_err)?;
        let (radius, angle, label) = c.result.into_tuple();
        Ok((radius, angle, label, outcome_name(c.outcome), c.sentence))
    }

    /// Labels of every anchor, in table order.
    pub fn labels(&self) -> Vec<String> {
        self.inner.table().iter().map(|a| a.label.clone()).collect()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "Classifier(anchors={}, dimension={})",
            self.inner.table().len(),
            self.inner.anchor_embeddings().dimension()
        )
    }
}

/// The reference compass as `(label, radius, angle, energy, description)` tuples.
#[pyfunction]
pub fn anchors() -> Vec<(String, f64, f64, String, String)> {
    polar_compass()
        .iter()
        .map(|a| {
            (
                a.label.clone(),
                a.radius,
                a.angle,
                a.energy.to_string(),
                a.description.clone(),
            )
        })
        .collect()
}

// ── Module entry point ───────────────────────────────────────────────────────

/// Polar emotion compass Python bindings.
#[pymodule]
pub fn valence_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyClassifier>()?;
    m.add_function(wrap_pyfunction!(anchors, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
