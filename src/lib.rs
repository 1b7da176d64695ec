//! # valence-core
//!
//! Polar emotion compass: classify a free-text journal entry onto a wheel of
//! named emotions.
//!
//! ---
//!
//! ## Every emotion is a point
//!
//! Each emotion is pinned to a point in polar space. **Radius** is intensity
//! (0.0 is the calm centre, 0.9 the rim) and **angle** is direction, with six
//! 60° sectors: Joy at 0°, Anger at 60°, Fear at 120°, Sad at 180°, Bad at 240°
//! and Peaceful at 300°. A journal entry lands on the wheel wherever its
//! strongest sentence points.
//!
//! **The winning sentence** — a long entry mixes small talk with one sentence
//! that actually carries the feeling. Every sentence is scored against every
//! anchor and only the sentence with the single strongest match is kept.
//!
//! **The confidence guardrail** — below a similarity of 0.22 nothing is a
//! credible match, and the entry is reported as Neutral.
//!
//! **The angular guardrail** — when the runner-up emotion scores within 25% of
//! the winner *and* lies within 60° of it, the two are blended. Otherwise the
//! result snaps to the winner. Happy and Sad are never averaged into a
//! meaningless midpoint.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! text → split_sentences → [embed → score_anchors]* → select_winner → guardrail → (r, θ, label)
//!                              ↑                                          ↑
//!                      EmbeddingProvider                           GuardrailConfig
//!                      AnchorEmbeddings                          polar conversions
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`anchor`] | [`EmotionAnchor`], [`AnchorTable`] | Ordered, validated emotion anchors |
//! | [`compass`] | [`compass::polar_compass`] | Reference 48-emotion compass plus Neutral |
//! | [`embedding`] | [`EmbeddingProvider`], [`AnchorEmbeddings`] | Text → vector capability and the anchor matrix |
//! | [`segment`] | [`segment::split_sentences`] | Sentence segmentation |
//! | [`similarity`] | [`similarity::cosine_similarity`] | Cosine scoring against every anchor |
//! | [`guardrail`] | [`GuardrailConfig`], [`guardrail::Decision`] | Confidence floor, top-2, blend or snap |
//! | [`polar`] | [`polar::angular_distance`] | Polar ⇄ Cartesian helpers |
//! | [`classifier`] | [`ValenceClassifier`], [`ClassificationResult`] | The full pipeline |
//! | [`error`] | [`ClassifyError`], [`AnchorTableError`] | Error taxonomy |
//! | `ffi` | `Classifier` | Python bindings (requires `python-ffi`) |
//!
//! ## Features
//!
//! - `serde` — `Serialize`/`Deserialize` for anchors, tables, policy and results.
//! - `python-ffi` — PyO3 extension module wrapping a Python embedding callable.
//!
//! ## License
//!
//! Business Source License 1.1.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod anchor;
pub mod classifier;
pub mod compass;
pub mod embedding;
pub mod error;
pub mod guardrail;
pub mod polar;
pub mod segment;
pub mod similarity;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use anchor::{AnchorTable, EmotionAnchor, EnergyTier, NEUTRAL_LABEL};
pub use classifier::{Classification, ClassificationResult, Outcome, ValenceClassifier};
pub use embedding::{AnchorEmbeddings, EmbeddingProvider};
pub use error::{AnchorTableError, BoxError, ClassifyError, ClassifyResult};
pub use guardrail::GuardrailConfig;
