//! Error taxonomy for anchor tables and classification.
//!
//! Only two conditions abort a classification call: the embedding provider
//! failing, or the provider returning vectors that cannot be compared with the
//! anchor matrix. Empty input and low confidence are not errors; they resolve
//! to the Neutral result.
//!
//! | Error | Raised by | Recovery |
//! |-------|-----------|----------|
//! | [`AnchorTableError`] | [`AnchorTable::new`](crate::anchor::AnchorTable::new) | Fix the table |
//! | [`ClassifyError::Provider`] | provider `embed` failure | Caller decides whether to retry |
//! | [`ClassifyError::DimensionMismatch`] | provider returned a vector of the wrong length | Fix the provider |
//! | [`ClassifyError::EmptyEmbedding`] | provider returned a zero-length vector | Fix the provider |

use thiserror::Error;

/// Boxed error returned by an [`EmbeddingProvider`](crate::embedding::EmbeddingProvider).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias for classification operations.
pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Structural problems with an emotion anchor table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnchorTableError {
    /// Two anchors share the same label.
    #[error("duplicate anchor label: {label}")]
    DuplicateLabel {
        /// The repeated label.
        label: String,
    },

    /// The table has no `Neutral` anchor to fall back to.
    #[error("anchor table has no Neutral anchor")]
    MissingNeutral,

    /// The `Neutral` anchor is not at the origin.
    #[error("Neutral anchor must have radius 0.0, got {radius}")]
    NeutralNotAtOrigin {
        /// Radius found on the Neutral anchor.
        radius: f64,
    },

    /// An anchor radius is not a finite value in [0.0, 1.0].
    #[error("anchor {label}: radius {radius} outside [0.0, 1.0]")]
    RadiusOutOfRange {
        /// Offending anchor.
        label: String,
        /// Offending radius.
        radius: f64,
    },

    /// An anchor angle is not a finite value in [0, 360).
    #[error("anchor {label}: angle {angle} outside [0, 360)")]
    AngleOutOfRange {
        /// Offending anchor.
        label: String,
        /// Offending angle in degrees.
        angle: f64,
    },

    /// Every anchor in the table is Neutral, so nothing can be matched.
    #[error("anchor table has no anchors besides Neutral")]
    NoMatchableAnchors,
}

/// Failures that abort a classification call.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The embedding provider failed for the given text.
    #[error("embedding provider failed for {text:?}: {source}")]
    Provider {
        /// The text that was being embedded.
        text: String,
        /// Underlying provider error.
        #[source]
        source: BoxError,
    },

    /// The provider returned a vector whose length differs from the anchor vectors.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension of the anchor embeddings.
        expected: usize,
        /// Dimension returned for this text.
        actual: usize,
    },

    /// The provider returned a zero-length vector.
    #[error("embedding provider returned an empty vector for {text:?}")]
    EmptyEmbedding {
        /// The text that was being embedded.
        text: String,
    },

    /// The anchor table failed validation.
    #[error(transparent)]
    Table(#[from] AnchorTableError),
}
