/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! The classifier: winning-sentence selection feeding the guardrail engine.
//!
//! A [`ValenceClassifier`] owns everything a classification needs: the anchor
//! table, the anchor embeddings computed once at construction, the guardrail
//! policy and the embedding provider. It holds no mutable state, so a single
//! instance can be shared across threads behind an `Arc`.
//!
//! ```rust
//! use valence_core::anchor::{AnchorTable, EmotionAnchor, EnergyTier};
//! use valence_core::classifier::ValenceClassifier;
//! use valence_core::error::BoxError;
//!
//! let table = AnchorTable::new(vec![
//!     EmotionAnchor::new("Happy", 0.3, 0.0, EnergyTier::Moderate, ""),
//!     EmotionAnchor::new("Sad", 0.3, 180.0, EnergyTier::Low, ""),
//!     EmotionAnchor::new("Neutral", 0.0, 0.0, EnergyTier::Low, ""),
//! ])?;
//!
//! // Toy provider: one dimension per anchor word.
//! let embed = |text: &str| -> Result<Vec<f32>, BoxError> {
//!     let t = text.to_lowercase();
//!     Ok(vec![t.contains("happy") as u8 as f32, t.contains("sad") as u8 as f32, 0.1])
//! };
//!
//! let classifier = ValenceClassifier::new(table, embed)?;
//! let result = classifier.classify("What a day. I feel happy!")?;
//! assert_eq!(result.label, "Happy");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use tracing::{debug, instrument, trace};

use crate::anchor::{AnchorTable, EmotionAnchor, NEUTRAL_LABEL};
use crate::embedding::{embed_checked, AnchorEmbeddings, EmbeddingProvider};
use crate::error::ClassifyResult;
use crate::guardrail::{resolve, top_two, Candidate, Decision, GuardrailConfig, SnapReason};
use crate::segment::split_sentences;
use crate::similarity::{best_score, score_anchors};

// ─── Results ─────────────────────────────────────────────────────────────────

/// Final `(radius, angle, label)` of a classification.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassificationResult {
    /// Intensity in [0.0, 1.0].
    pub radius: f64,
    /// Direction in degrees, [0, 360).
    pub angle: f64,
    /// Label of the primary emotion, or `"Neutral"`.
    pub label: String,
}

impl ClassificationResult {
    /// The fixed fallback result `(0.0, 0.0, "Neutral")`.
    pub fn neutral() -> Self {
        Self {
            radius: 0.0,
            angle: 0.0,
            label: NEUTRAL_LABEL.to_owned(),
        }
    }

    /// Returns `true` if this is the Neutral fallback.
    pub fn is_neutral(&self) -> bool {
        self.label == NEUTRAL_LABEL
    }

    /// The result as a plain `(radius, angle, label)` tuple.
    pub fn into_tuple(self) -> (f64, f64, String) {
        (self.radius, self.angle, self.label)
    }
}

/// Why a classification fell back to Neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeutralReason {
    /// No non-empty sentence in the input.
    EmptyInput,
    /// No anchor matched credibly.
    LowConfidence,
}

/// How the final point was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Reported the Neutral fallback.
    Neutral(NeutralReason),
    /// Reported the primary candidate's canonical point.
    Snapped(SnapReason),
    /// Interpolated the top two candidates.
    Blended,
}

/// An anchor ranked in the winning sentence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedAnchor {
    /// Anchor label.
    pub label: String,
    /// Similarity to the winning sentence.
    pub score: f64,
}

/// A classification with the reasoning that produced it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// The final result.
    pub result: ClassificationResult,
    /// Which branch of the decision engine produced it.
    pub outcome: Outcome,
    /// The winning sentence, if any sentence scored above zero.
    pub sentence: Option<String>,
    /// Best similarity of the winning sentence.
    pub best_score: Option<f64>,
    /// Highest-ranked anchor, when the confidence guardrail passed.
    pub primary: Option<RankedAnchor>,
    /// Second-ranked anchor, when one exists.
    pub runner_up: Option<RankedAnchor>,
}

impl Classification {
    fn neutral(reason: NeutralReason) -> Self {
        Self {
            result: ClassificationResult::neutral(),
            outcome: Outcome::Neutral(reason),
            sentence: None,
            best_score: None,
            primary: None,
            runner_up: None,
        }
    }
}

/// A sentence and its similarity to every matchable anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct SentenceCandidate<'t> {
    /// Position among the segmented sentences.
    pub index: usize,
    /// The trimmed sentence text.
    pub text: &'t str,
    /// One score per matchable anchor, in table order.
    pub scores: Vec<f64>,
    /// Highest entry of `scores`.
    pub best_score: f64,
}

// ─── Classifier ──────────────────────────────────────────────────────────────

/// Sentence-level emotion classifier over a fixed anchor table.
pub struct ValenceClassifier<P> {
    table: AnchorTable,
    matchable: Vec<usize>,
    embeddings: AnchorEmbeddings,
    config: GuardrailConfig,
    provider: P,
}

impl<P: EmbeddingProvider> ValenceClassifier<P> {
    /// Build a classifier with the default guardrail policy.
    ///
    /// Embeds every matchable anchor once; provider failures abort construction.
    pub fn new(table: AnchorTable, provider: P) -> ClassifyResult<Self> {
        Self::with_config(table, provider, GuardrailConfig::default())
    }

    /// Validate `anchors` into a table and build a classifier over it.
    ///
    /// An invalid table is reported as [`ClassifyError::Table`](crate::error::ClassifyError::Table).
    pub fn from_anchors(anchors: Vec<EmotionAnchor>, provider: P) -> ClassifyResult<Self> {
        let table = AnchorTable::new(anchors)?;
        Self::new(table, provider)
    }

    /// Build a classifier with a custom guardrail policy.
    pub fn with_config(
        table: AnchorTable,
        provider: P,
        config: GuardrailConfig,
    ) -> ClassifyResult<Self> {
        let embeddings = AnchorEmbeddings::compute(&table, &provider)?;
        let matchable = table.matchable().map(|(i, _)| i).collect();

        Ok(Self {
            table,
            matchable,
            embeddings,
            config,
            provider,
        })
    }

    /// The anchor table.
    pub fn table(&self) -> &AnchorTable {
        &self.table
    }

    /// The guardrail policy in force.
    pub fn config(&self) -> &GuardrailConfig {
        &self.config
    }

    /// The precomputed anchor embeddings.
    pub fn anchor_embeddings(&self) -> &AnchorEmbeddings {
        &self.embeddings
    }

    /// The embedding provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Classify `text` into `(radius, angle, label)`.
    ///
    /// Empty input and low-confidence input return the Neutral result. Only
    /// provider failures are errors.
    pub fn classify(&self, text: &str) -> ClassifyResult<ClassificationResult> {
        self.explain(text).map(|c| c.result)
    }

    /// Classify `text` and report how the result was reached.
    #[instrument(level = "debug", skip_all, fields(chars = text.len()))]
    pub fn explain(&self, text: &str) -> ClassifyResult<Classification> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            debug!("no sentences to classify");
            return Ok(Classification::neutral(NeutralReason::EmptyInput));
        }

        let Some(winner) = self.select_winner(&sentences)? else {
            debug!("no sentence scored above zero");
            return Ok(Classification::neutral(NeutralReason::LowConfidence));
        };

        if winner.best_score < self.config.confidence_floor {
            debug!(
                best_score = winner.best_score,
                floor = self.config.confidence_floor,
                "below confidence floor"
            );
            return Ok(Classification {
                sentence: Some(winner.text.to_owned()),
                best_score: Some(winner.best_score),
                ..Classification::neutral(NeutralReason::LowConfidence)
            });
        }

        let Some((first, second)) = top_two(&winner.scores) else {
            return Ok(Classification::neutral(NeutralReason::LowConfidence));
        };
        let primary = self.candidate(first);
        let runner_up = second.map(|s| self.candidate(s));

        let (decision, point) = resolve(&primary, runner_up.as_ref(), &self.config);
        debug!(
            sentence = winner.text,
            primary = %primary.anchor.label,
            score1 = primary.score,
            runner_up = runner_up.as_ref().map(|c| c.anchor.label.as_str()),
            score2 = runner_up.as_ref().map(|c| c.score),
            ?decision,
            radius = point.radius,
            angle = point.angle,
            "classified"
        );

        let outcome = match decision {
            Decision::Blend => Outcome::Blended,
            Decision::Snap(reason) => Outcome::Snapped(reason),
        };

        Ok(Classification {
            result: ClassificationResult {
                radius: point.radius,
                angle: point.angle,
                label: primary.anchor.label.clone(),
            },
            outcome,
            sentence: Some(winner.text.to_owned()),
            best_score: Some(winner.best_score),
            primary: Some(ranked(&primary)),
            runner_up: runner_up.as_ref().map(ranked),
        })
    }

    /// Score every sentence and keep the one with the strongest single match.
    ///
    /// A sentence replaces the current winner only with a strictly higher best
    /// score, starting from zero, so ties keep the earliest sentence and a
    /// sentence that scores nothing above zero never wins.
    pub fn select_winner<'t>(
        &self,
        sentences: &[&'t str],
    ) -> ClassifyResult<Option<SentenceCandidate<'t>>> {
        let mut winner: Option<SentenceCandidate<'t>> = None;
        let mut best_global = 0.0_f64;

        for (index, &text) in sentences.iter().enumerate() {
            let embedding = embed_checked(&self.provider, text, Some(self.embeddings.dimension()))?;
            let scores = score_anchors(&embedding, self.embeddings.rows());
            let Some((_, best)) = best_score(&scores) else {
                continue;
            };
            trace!(index, sentence = text, best, "scored sentence");

            if best > best_global {
                best_global = best;
                winner = Some(SentenceCandidate {
                    index,
                    text,
                    scores,
                    best_score: best,
                });
            }
        }

        Ok(winner)
    }

    fn candidate(&self, (index, score): (usize, f64)) -> Candidate<'_> {
        Candidate {
            index,
            anchor: self.matchable_anchor(index),
            score,
        }
    }

    fn matchable_anchor(&self, index: usize) -> &EmotionAnchor {
        &self.table.as_slice()[self.matchable[index]]
    }
}

impl<P> core::fmt::Debug for ValenceClassifier<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ValenceClassifier")
            .field("anchors", &self.table.len())
            .field("dimension", &self.embeddings.dimension())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn ranked(c: &Candidate<'_>) -> RankedAnchor {
    RankedAnchor {
        label: c.anchor.label.clone(),
        score: c.score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::EnergyTier;
    use crate::error::{AnchorTableError, BoxError, ClassifyError};

    fn table() -> AnchorTable {
        AnchorTable::new(vec![
            EmotionAnchor::new("Happy", 0.3, 0.0, EnergyTier::Moderate, ""),
            EmotionAnchor::new("Sad", 0.3, 180.0, EnergyTier::Low, ""),
            EmotionAnchor::new(NEUTRAL_LABEL, 0.0, 0.0, EnergyTier::Low, ""),
        ])
        .unwrap()
    }

    // Anchor phrases embed onto their own axis; sentences carry extra weight
    // on a third axis no anchor uses.
    fn keyword(text: &str) -> Result<Vec<f32>, BoxError> {
        let t = text.to_lowercase();
        let filler = if t == "happy" || t == "sad" { 0.0 } else { 0.5 };
        Ok(vec![
            t.matches("happy").count() as f32,
            t.matches("sad").count() as f32,
            filler,
        ])
    }

    #[test]
    fn test_empty_input_is_neutral_without_embedding() {
        let calls = std::sync::atomic::AtomicUsize::new(0);
        let provider = |text: &str| -> Result<Vec<f32>, BoxError> {
            calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            keyword(text)
        };
        let c = ValenceClassifier::new(table(), provider).unwrap();
        let after_build = calls.load(std::sync::atomic::Ordering::SeqCst);

        let r = c.explain("  \n ...  ").unwrap();
        assert_eq!(r.result, ClassificationResult::neutral());
        assert_eq!(r.outcome, Outcome::Neutral(NeutralReason::EmptyInput));
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), after_build);
    }

    #[test]
    fn test_winner_is_sentence_with_strongest_match() {
        let c = ValenceClassifier::new(table(), keyword).unwrap();
        let sentences = ["nothing here", "happy yet sad", "so sad"];
        let w = c.select_winner(&sentences).unwrap().unwrap();
        assert_eq!(w.index, 2);
        assert_eq!(w.text, "so sad");
        assert_eq!(w.scores.len(), 2);
    }

    #[test]
    fn test_winner_ties_keep_first_sentence() {
        let c = ValenceClassifier::new(table(), keyword).unwrap();
        let w = c.select_winner(&["so happy", "so happy"]).unwrap().unwrap();
        assert_eq!(w.index, 0);
    }

    #[test]
    fn test_no_positive_score_means_no_winner() {
        let c = ValenceClassifier::new(table(), keyword).unwrap();
        assert!(c.select_winner(&["plain words"]).unwrap().is_none());
        let r = c.explain("plain words").unwrap();
        assert_eq!(r.outcome, Outcome::Neutral(NeutralReason::LowConfidence));
    }

    #[test]
    fn test_provider_failure_mid_classification_aborts() {
        let provider = |text: &str| -> Result<Vec<f32>, BoxError> {
            if text.contains("boom") {
                Err("inference backend unavailable".into())
            } else {
                keyword(text)
            }
        };
        let c = ValenceClassifier::new(table(), provider).unwrap();
        let err = c.classify("I am happy. boom").unwrap_err();
        assert!(matches!(err, ClassifyError::Provider { ref text, .. } if text == "boom"));
    }

    #[test]
    fn test_dimension_change_is_reported() {
        let provider = |text: &str| -> Result<Vec<f32>, BoxError> {
            if text.contains("today") { Ok(vec![1.0]) } else { keyword(text) }
        };
        let c = ValenceClassifier::new(table(), provider).unwrap();
        let err = c.classify("today").unwrap_err();
        assert!(matches!(err, ClassifyError::DimensionMismatch { expected: 3, actual: 1 }));
    }

    #[test]
    fn test_explain_reports_candidates() {
        let c = ValenceClassifier::new(table(), keyword).unwrap();
        let r = c.explain("I'm happy but a little sad").unwrap();
        assert_eq!(r.outcome, Outcome::Snapped(SnapReason::Incompatible));
        assert_eq!(r.primary.as_ref().map(|p| p.label.as_str()), Some("Happy"));
        assert_eq!(r.runner_up.as_ref().map(|p| p.label.as_str()), Some("Sad"));
        assert_eq!(r.result, ClassificationResult { radius: 0.3, angle: 0.0, label: "Happy".into() });
    }

    #[test]
    fn test_from_anchors_validates_table() {
        let anchors = vec![EmotionAnchor::new("Happy", 0.3, 0.0, EnergyTier::Moderate, "")];
        let err = ValenceClassifier::from_anchors(anchors, keyword).unwrap_err();
        assert!(matches!(err, ClassifyError::Table(AnchorTableError::MissingNeutral)));

        let c = ValenceClassifier::from_anchors(table().into(), keyword).unwrap();
        assert_eq!(c.classify("so sad").unwrap().label, "Sad");
    }

    #[test]
    fn test_snapped_radius_is_exact_table_value() {
        let c = ValenceClassifier::new(table(), keyword).unwrap();
        let (radius, angle, _) = c.classify("so sad").unwrap().into_tuple();
        assert_eq!(radius.to_bits(), 0.3_f64.to_bits());
        assert_eq!(angle.to_bits(), 180.0_f64.to_bits());
    }

    #[test]
    fn test_neutral_result_helpers() {
        let n = ClassificationResult::neutral();
        assert!(n.is_neutral());
        assert_eq!(n.into_tuple(), (0.0, 0.0, "Neutral".to_owned()));
    }
}
