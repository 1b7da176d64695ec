//! Emotion anchors and the ordered anchor table.
//!
//! An anchor is a named emotion pinned to a canonical point on the polar
//! compass: `radius` is intensity (0.0 at the centre), `angle` is direction in
//! degrees with 0° pointing at the Joy sector. The label, lowercased, doubles
//! as the anchor phrase handed to the embedding provider.
//!
//! # Ordering
//!
//! Table order is part of the contract. When two anchors score identically the
//! one earlier in the table wins, both when picking the winning sentence and
//! when ranking the top two candidates. [`AnchorTable`] therefore keeps a plain
//! ordered `Vec` and only adds a label index on the side.
//!
//! # Invariants
//!
//! - Labels are unique.
//! - A [`NEUTRAL_LABEL`] anchor exists and sits at radius 0.0.
//! - At least one non-Neutral anchor exists.
//! - Radii are finite and in [0.0, 1.0]; angles are finite and in [0, 360).

use hashbrown::HashMap;

use crate::error::AnchorTableError;

/// Label of the fallback anchor reported when no emotion can be credibly matched.
pub const NEUTRAL_LABEL: &str = "Neutral";

/// Informational energy level of an emotion. Not used by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnergyTier {
    /// Quiet, low-arousal emotions (sad, bored, serene).
    Low,
    /// Everyday arousal.
    Moderate,
    /// Energetic or activated emotions.
    High,
    /// The most intense emotions on the compass.
    Extreme,
}

impl EnergyTier {
    /// Human-readable name of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyTier::Low => "Low",
            EnergyTier::Moderate => "Moderate",
            EnergyTier::High => "High",
            EnergyTier::Extreme => "Extreme",
        }
    }
}

impl core::fmt::Display for EnergyTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named emotion with its canonical point on the polar compass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmotionAnchor {
    /// Unique label, e.g. `"Grief"`.
    pub label: String,
    /// Intensity of the canonical point.
    pub radius: f64,
    /// Direction of the canonical point in degrees, [0, 360).
    pub angle: f64,
    /// Informational energy tier.
    pub energy: EnergyTier,
    /// Short tooltip-style description.
    pub description: String,
}

impl EmotionAnchor {
    /// Build an anchor.
    pub fn new(
        label: impl Into<String>,
        radius: f64,
        angle: f64,
        energy: EnergyTier,
        description: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            radius,
            angle,
            energy,
            description: description.into(),
        }
    }

    /// The phrase embedded for this anchor: the label, lowercased.
    pub fn phrase(&self) -> String {
        self.label.to_lowercase()
    }

    /// Returns `true` for the fallback anchor.
    pub fn is_neutral(&self) -> bool {
        self.label == NEUTRAL_LABEL
    }
}

/// Validated, ordered list of emotion anchors.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<EmotionAnchor>", into = "Vec<EmotionAnchor>")
)]
pub struct AnchorTable {
    anchors: Vec<EmotionAnchor>,
    index: HashMap<String, usize>,
    neutral: usize,
}

impl AnchorTable {
    /// Validate `anchors` and build the table, preserving their order.
    pub fn new(anchors: Vec<EmotionAnchor>) -> Result<Self, AnchorTableError> {
        let mut index = HashMap::with_capacity(anchors.len());

        for (i, anchor) in anchors.iter().enumerate() {
            if !anchor.radius.is_finite() || !(0.0..=1.0).contains(&anchor.radius) {
                return Err(AnchorTableError::RadiusOutOfRange {
                    label: anchor.label.clone(),
                    radius: anchor.radius,
                });
            }
            if !anchor.angle.is_finite() || !(0.0..360.0).contains(&anchor.angle) {
                return Err(AnchorTableError::AngleOutOfRange {
                    label: anchor.label.clone(),
                    angle: anchor.angle,
                });
            }
            if index.insert(anchor.label.clone(), i).is_some() {
                return Err(AnchorTableError::DuplicateLabel {
                    label: anchor.label.clone(),
                });
            }
        }

        let neutral = *index
            .get(NEUTRAL_LABEL)
            .ok_or(AnchorTableError::MissingNeutral)?;
        if anchors[neutral].radius != 0.0 {
            return Err(AnchorTableError::NeutralNotAtOrigin {
                radius: anchors[neutral].radius,
            });
        }
        if anchors.len() < 2 {
            return Err(AnchorTableError::NoMatchableAnchors);
        }

        Ok(Self { anchors, index, neutral })
    }

    /// Build a table from anchors known to satisfy every invariant.
    ///
    /// Used for the built-in reference compass; its validity is covered by tests.
    pub(crate) fn from_trusted(anchors: Vec<EmotionAnchor>) -> Self {
        let index: HashMap<String, usize> = anchors
            .iter()
            .enumerate()
            .map(|(i, a)| (a.label.clone(), i))
            .collect();
        let neutral = anchors.iter().position(EmotionAnchor::is_neutral).unwrap_or(0);
        Self { anchors, index, neutral }
    }

    /// Total number of anchors, Neutral included.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Always `false` for a validated table; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Look up an anchor by label.
    pub fn get(&self, label: &str) -> Option<&EmotionAnchor> {
        self.index.get(label).map(|&i| &self.anchors[i])
    }

    /// Table position of the anchor with `label`.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// All anchors in table order.
    pub fn iter(&self) -> core::slice::Iter<'_, EmotionAnchor> {
        self.anchors.iter()
    }

    /// All anchors as a slice, in table order.
    pub fn as_slice(&self) -> &[EmotionAnchor] {
        &self.anchors
    }

    /// The fallback anchor.
    pub fn neutral(&self) -> &EmotionAnchor {
        &self.anchors[self.neutral]
    }

    /// Anchors that take part in similarity matching (everything but Neutral),
    /// with their table index, in table order.
    pub fn matchable(&self) -> impl Iterator<Item = (usize, &EmotionAnchor)> + '_ {
        self.anchors.iter().enumerate().filter(|(_, a)| !a.is_neutral())
    }

    /// Number of anchors that take part in similarity matching.
    pub fn matchable_len(&self) -> usize {
        self.anchors.len() - 1
    }
}

impl TryFrom<Vec<EmotionAnchor>> for AnchorTable {
    type Error = AnchorTableError;

    fn try_from(anchors: Vec<EmotionAnchor>) -> Result<Self, Self::Error> {
        Self::new(anchors)
    }
}

impl From<AnchorTable> for Vec<EmotionAnchor> {
    fn from(table: AnchorTable) -> Self {
        table.anchors
    }
}

impl<'a> IntoIterator for &'a AnchorTable {
    type Item = &'a EmotionAnchor;
    type IntoIter = core::slice::Iter<'a, EmotionAnchor>;

    fn into_iter(self) -> Self::IntoIter {
        self.anchors.iter()
    }
}
