/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Confidence guardrail, top-2 selection, and the blend-or-snap decision.
//!
//! # The two decision points
//!
//! ```text
//! best score ──► < confidence_floor ? ──yes──► Neutral
//!                       │ no
//!                       ▼
//!                top-2 candidates
//!                       │
//!   score2 > score1 × score_ratio_floor  AND  Δangle ≤ max_blend_angle ?
//!                 │ yes                               │ no
//!                 ▼                                   ▼
//!               BLEND                               SNAP
//! ```
//!
//! **Blend** averages radius as a scalar and angle as a unit vector, both with
//! weights `score^weight_exponent`. The label is always the primary candidate's.
//!
//! **Snap** reports the primary candidate's canonical point unchanged. Two
//! candidates pointing in incompatible directions (Happy at 0° and Sad at 180°)
//! are never averaged: their midpoint would name an emotion neither sentence
//! expressed.
//!
//! Snapping because the runner-up is weak and snapping because it is
//! incompatible give the same numbers; [`SnapReason`] only records which one
//! applied.

use crate::anchor::EmotionAnchor;
use crate::polar::{angular_distance, cartesian_to_polar, polar_to_cartesian};

/// Policy thresholds for the classifier.
///
/// `Default` reproduces the shipped policy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GuardrailConfig {
    /// Best similarity below this reports Neutral.
    pub confidence_floor: f64,
    /// Runner-up must score strictly above `score1 × score_ratio_floor` to blend.
    pub score_ratio_floor: f64,
    /// Maximum angular distance in degrees between two blendable candidates.
    pub max_blend_angle: f64,
    /// Exponent applied to scores to form blend weights.
    pub weight_exponent: i32,
}

impl GuardrailConfig {
    /// Construct the shipped policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            confidence_floor: 0.22,
            score_ratio_floor: 0.75,
            max_blend_angle: 60.0,
            weight_exponent: 2,
        }
    }
}

/// One ranked anchor from the winning sentence.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate<'a> {
    /// Position of the anchor in the matchable anchor list.
    pub index: usize,
    /// The anchor itself.
    pub anchor: &'a EmotionAnchor,
    /// Cosine similarity of the anchor to the winning sentence.
    pub score: f64,
}

/// Why the engine reported the primary candidate unmodified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapReason {
    /// Only one anchor was available to match.
    NoRunnerUp,
    /// The runner-up scored at or below `score1 × score_ratio_floor`.
    RunnerUpTooWeak,
    /// The runner-up was close in score but too far away on the compass.
    Incompatible,
}

/// Outcome of the blend-or-snap decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// Interpolate the two candidates.
    Blend,
    /// Report the primary candidate's canonical point.
    Snap(SnapReason),
}

/// A point on the compass produced by the decision engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompassPoint {
    /// Intensity, clamped to at most 1.0.
    pub radius: f64,
    /// Direction in degrees, [0, 360).
    pub angle: f64,
}

/// Pick the two highest scores. Equal scores rank the lower index higher.
///
/// Returns `None` for an empty slice; the second slot is `None` when there is
/// only one score.
pub fn top_two(scores: &[f64]) -> Option<((usize, f64), Option<(usize, f64)>)> {
    let mut first: Option<(usize, f64)> = None;
    let mut second: Option<(usize, f64)> = None;

    for (i, &s) in scores.iter().enumerate() {
        match first {
            Some((_, f)) if s <= f => {
                if second.map_or(true, |(_, b)| s > b) {
                    second = Some((i, s));
                }
            }
            _ => {
                second = first;
                first = Some((i, s));
            }
        }
    }

    first.map(|f| (f, second))
}

/// Decide whether `primary` and `runner_up` may be blended.
pub fn decide(
    primary: &Candidate<'_>,
    runner_up: Option<&Candidate<'_>>,
    config: &GuardrailConfig,
) -> Decision {
    let Some(runner_up) = runner_up else {
        return Decision::Snap(SnapReason::NoRunnerUp);
    };

    if runner_up.score <= primary.score * config.score_ratio_floor {
        return Decision::Snap(SnapReason::RunnerUpTooWeak);
    }
    if angular_distance(primary.anchor.angle, runner_up.anchor.angle) > config.max_blend_angle {
        return Decision::Snap(SnapReason::Incompatible);
    }
    Decision::Blend
}

/// Interpolate two candidates: scalar radius, Cartesian angle.
pub fn blend(a: &Candidate<'_>, b: &Candidate<'_>, weight_exponent: i32) -> CompassPoint {
    let w1 = a.score.powi(weight_exponent);
    let w2 = b.score.powi(weight_exponent);
    let total = w1 + w2;

    let radius = (a.anchor.radius * w1 + b.anchor.radius * w2) / total;

    let (x1, y1) = polar_to_cartesian(1.0, a.anchor.angle);
    let (x2, y2) = polar_to_cartesian(1.0, b.anchor.angle);
    let x = (x1 * w1 + x2 * w2) / total;
    let y = (y1 * w1 + y2 * w2) / total;
    let (_, angle) = cartesian_to_polar(x, y);

    CompassPoint { radius: radius.min(1.0), angle }
}

/// The primary candidate's canonical point.
pub fn snap(primary: &Candidate<'_>) -> CompassPoint {
    CompassPoint {
        radius: primary.anchor.radius.min(1.0),
        angle: primary.anchor.angle,
    }
}

/// Run the decision and produce the final point.
pub fn resolve(
    primary: &Candidate<'_>,
    runner_up: Option<&Candidate<'_>>,
    config: &GuardrailConfig,
) -> (Decision, CompassPoint) {
    let decision = decide(primary, runner_up, config);
    let point = match (decision, runner_up) {
        (Decision::Blend, Some(runner_up)) => blend(primary, runner_up, config.weight_exponent),
        _ => snap(primary),
    };
    (decision, point)
}
