//! The embedding capability and the precomputed anchor matrix.
//!
//! The classifier never turns text into vectors itself. It consumes an
//! [`EmbeddingProvider`], which might wrap a local sentence-transformer, a
//! remote inference endpoint, or a test stub. The provider must be
//! deterministic for a fixed model and must return vectors of one fixed length.
//!
//! # Implementing a provider
//!
//! ```rust
//! use valence_core::embedding::EmbeddingProvider;
//! use valence_core::error::BoxError;
//!
//! struct CharCounts;
//!
//! impl EmbeddingProvider for CharCounts {
//!     fn embed(&self, text: &str) -> Result<Vec<f32>, BoxError> {
//!         let mut v = vec![0.0; 26];
//!         for c in text.bytes().filter(u8::is_ascii_lowercase) {
//!             v[(c - b'a') as usize] += 1.0;
//!         }
//!         Ok(v)
//!     }
//! }
//! ```
//!
//! Closures work too: any `Fn(&str) -> Result<Vec<f32>, BoxError>` is a provider.

use tracing::{debug, warn};

use crate::anchor::AnchorTable;
use crate::error::{BoxError, ClassifyError, ClassifyResult};
use crate::similarity::is_degenerate;

/// Maps text to a fixed-length embedding vector.
///
/// Requires `Send + Sync` so one classifier can serve many threads.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed `text`. Failures are surfaced to the caller unchanged.
    fn embed(&self, text: &str) -> Result<Vec<f32>, BoxError>;
}

impl<F> EmbeddingProvider for F
where
    F: Fn(&str) -> Result<Vec<f32>, BoxError> + Send + Sync,
{
    fn embed(&self, text: &str) -> Result<Vec<f32>, BoxError> {
        self(text)
    }
}

/// Embed `text` and check the vector against the expected dimension.
///
/// `expected == None` accepts any non-empty length (used for the first anchor).
pub(crate) fn embed_checked<P: EmbeddingProvider + ?Sized>(
    provider: &P,
    text: &str,
    expected: Option<usize>,
) -> ClassifyResult<Vec<f32>> {
    let vector = provider.embed(text).map_err(|source| ClassifyError::Provider {
        text: text.to_owned(),
        source,
    })?;

    if vector.is_empty() {
        return Err(ClassifyError::EmptyEmbedding { text: text.to_owned() });
    }
    if let Some(expected) = expected {
        if vector.len() != expected {
            return Err(ClassifyError::DimensionMismatch {
                expected,
                actual: vector.len(),
            });
        }
    }
    if is_degenerate(&vector) {
        warn!(text, "embedding provider returned a zero-magnitude vector");
    }
    Ok(vector)
}

/// Embeddings of every matchable anchor, in table order.
///
/// Computed once when a classifier is built and read-only afterwards. Row `i`
/// belongs to the `i`-th anchor of [`AnchorTable::matchable`].
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorEmbeddings {
    rows: Vec<Vec<f32>>,
    dimension: usize,
}

impl AnchorEmbeddings {
    /// Embed the lowercased label of every matchable anchor in `table`.
    pub fn compute<P: EmbeddingProvider + ?Sized>(
        table: &AnchorTable,
        provider: &P,
    ) -> ClassifyResult<Self> {
        let mut rows: Vec<Vec<f32>> = Vec::with_capacity(table.matchable_len());
        let mut dimension = None;

        for (_, anchor) in table.matchable() {
            let row = embed_checked(provider, &anchor.phrase(), dimension)?;
            dimension = Some(row.len());
            rows.push(row);
        }

        // AnchorTable guarantees at least one matchable anchor.
        let dimension = dimension.unwrap_or(0);
        debug!(anchors = rows.len(), dimension, "pre-encoded emotion anchors");
        Ok(Self { rows, dimension })
    }

    /// Length of every embedding vector.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of anchor rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Anchor rows in table order.
    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }
}
