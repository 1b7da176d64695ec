//! Reference polar emotion compass: 48 emotions in six sectors, plus Neutral.
//!
//! This is the table the journal application ships with. Each sector spans 60°
//! and holds eight emotions; within a sector, radius grows with intensity:
//!
//! ```text
//!                 Joy (0°)
//!        Peaceful         Anger
//!      (300°)                 (60°)
//!
//!      Bad (240°)           Fear (120°)
//!                 Sad (180°)
//! ```
//!
//! Order matters: the classifier breaks score ties in favour of the earlier
//! anchor. Reuse this table as-is, or build your own [`AnchorTable`] with the
//! same layout.
//!
//! ```rust
//! use valence_core::compass::polar_compass;
//!
//! let compass = polar_compass();
//! assert_eq!(compass.len(), 49);
//! assert_eq!(compass.get("Grief").map(|a| a.angle), Some(185.0));
//! ```

use crate::anchor::{AnchorTable, EmotionAnchor, EnergyTier};

/// `(label, radius, angle, energy, description)` rows of the reference compass.
pub const COMPASS_ROWS: [(&str, f64, f64, EnergyTier, &str); 49] = [
    // Joy (330° to 30°)
    ("Happy", 0.3, 0.0, EnergyTier::Moderate, "A general sense of pleasure and contentment."),
    ("Grateful", 0.5, 5.0, EnergyTier::Moderate, "Warm appreciation for something received or experienced."),
    ("Excited", 0.6, 10.0, EnergyTier::High, "Eager anticipation and energetic enthusiasm."),
    ("Optimistic", 0.7, 15.0, EnergyTier::High, "A hopeful confidence about the future."),
    ("Euphoric", 0.9, 15.0, EnergyTier::Extreme, "Intense, overwhelming joy and elation."),
    ("Proud", 0.6, 350.0, EnergyTier::High, "Deep satisfaction from personal achievement."),
    ("Confident", 0.9, 350.0, EnergyTier::High, "Strong belief in one's own abilities and worth."),
    ("Accomplished", 0.8, 355.0, EnergyTier::High, "Fulfillment from completing a meaningful goal."),

    // Anger (30° to 90°)
    ("Mad", 0.3, 60.0, EnergyTier::Moderate, "A mild, simmering irritation or displeasure."),
    ("Irritated", 0.5, 55.0, EnergyTier::Moderate, "Annoyed by a persistent minor disturbance."),
    ("Frustrated", 0.6, 50.0, EnergyTier::High, "Blocked from achieving a goal, feeling stuck."),
    ("Infuriated", 0.9, 50.0, EnergyTier::Extreme, "Extreme anger at a perceived injustice."),
    ("Furious", 0.9, 65.0, EnergyTier::Extreme, "Explosive, uncontainable rage."),
    ("Resentful", 0.6, 70.0, EnergyTier::Moderate, "Lingering bitterness from past unfair treatment."),
    ("Bitter", 0.8, 75.0, EnergyTier::High, "Deep-seated anger hardened over time."),
    ("Jealous", 0.9, 75.0, EnergyTier::Extreme, "Painful envy of what others possess or achieve."),

    // Fear (90° to 150°)
    ("Scared", 0.3, 120.0, EnergyTier::Moderate, "A basic sense of fear from a perceived threat."),
    ("Nervous", 0.5, 115.0, EnergyTier::Moderate, "Uneasy anticipation about an upcoming event."),
    ("Anxious", 0.6, 110.0, EnergyTier::High, "Persistent worry and unease about the future."),
    ("Overwhelmed", 0.9, 110.0, EnergyTier::Extreme, "Completely buried under pressure and demands."),
    ("Terrified", 0.9, 125.0, EnergyTier::Extreme, "Paralysing fear that shuts down rational thought."),
    ("Insecure", 0.6, 130.0, EnergyTier::Moderate, "Self-doubt about one's value or competence."),
    ("Helpless", 0.8, 135.0, EnergyTier::High, "Feeling powerless with no way to change a situation."),
    ("Inadequate", 0.9, 135.0, EnergyTier::Extreme, "A deep belief of not being good enough."),

    // Sad (150° to 210°)
    ("Sad", 0.3, 180.0, EnergyTier::Low, "A gentle, quiet unhappiness."),
    ("Hurt", 0.7, 175.0, EnergyTier::High, "Emotional pain caused by someone's actions or words."),
    ("Lonely", 0.6, 170.0, EnergyTier::Low, "A painful sense of social isolation and disconnection."),
    ("Isolated", 0.9, 170.0, EnergyTier::Low, "Cut off from all meaningful human connection."),
    ("Grief", 0.9, 185.0, EnergyTier::Extreme, "Profound sorrow from a significant loss."),
    ("Disappointed", 0.6, 190.0, EnergyTier::Low, "Let down when reality falls short of expectations."),
    ("Depressed", 0.8, 195.0, EnergyTier::Low, "A heavy, persistent sadness and loss of interest."),
    ("Despair", 0.9, 195.0, EnergyTier::Extreme, "Complete loss of hope and the will to continue."),

    // Bad / Disgust (210° to 270°)
    ("Bad", 0.3, 240.0, EnergyTier::Low, "A vague, undefined negative feeling."),
    ("Tired", 0.5, 235.0, EnergyTier::Low, "Mentally or physically drained of energy."),
    ("Bored", 0.6, 230.0, EnergyTier::Low, "Weary and restless from lack of stimulation."),
    ("Apathetic", 0.9, 230.0, EnergyTier::Low, "Complete absence of interest or motivation."),
    ("Disgusted", 0.8, 245.0, EnergyTier::High, "Strong revulsion towards something offensive."),
    ("Guilty", 0.6, 250.0, EnergyTier::Moderate, "Remorse for having done something wrong."),
    ("Repelled", 0.9, 255.0, EnergyTier::High, "Intense aversion driving you to pull away."),
    ("Ashamed", 0.9, 250.0, EnergyTier::High, "Deep embarrassment about who you are or what you did."),

    // Peaceful (270° to 330°)
    ("Peaceful", 0.3, 300.0, EnergyTier::Low, "A calm, undisturbed state of mind."),
    ("Content", 0.5, 295.0, EnergyTier::Low, "Quietly satisfied with the present moment."),
    ("Relaxed", 0.6, 290.0, EnergyTier::Low, "Free from tension, at ease physically and mentally."),
    ("Serene", 0.9, 290.0, EnergyTier::Low, "A profound, unshakable inner tranquility."),
    ("Surprised", 0.7, 305.0, EnergyTier::High, "Caught off guard by something unexpected."),
    ("Trusting", 0.6, 310.0, EnergyTier::Moderate, "A secure feeling of reliance on someone."),
    ("Awestruck", 0.8, 315.0, EnergyTier::High, "Overwhelmed by wonder and admiration."),
    ("Intimate", 0.9, 310.0, EnergyTier::Moderate, "A deep emotional closeness and vulnerability."),

    // Fallback, excluded from matching
    ("Neutral", 0.0, 0.0, EnergyTier::Low, "No strong emotional signal detected."),];

/// Build the reference compass as a validated [`AnchorTable`].
pub fn polar_compass() -> AnchorTable {
    let anchors = COMPASS_ROWS
        .iter()
        .map(|&(label, radius, angle, energy, description)| {
            EmotionAnchor::new(label, radius, angle, energy, description)
        })
        .collect();
    AnchorTable::from_trusted(anchors)
}
