//! # Polar emotion compass — journal walkthrough
//!
//! Classifies ten short journal entries against the reference compass and
//! prints where each one lands.
//!
//! A real deployment plugs in a sentence-embedding model. This demo uses a
//! bag-of-anchor-words embedder instead, so it runs offline and every number
//! can be checked by hand: a sentence naming k compass emotions scores
//! 1/√(k+1) against each of them.
//!
//! ## Running this example
//!
//! ```text
//! RUST_LOG=valence_core=debug cargo run --example compass
//! ```

use tracing_subscriber::EnvFilter;
use valence_core::compass::polar_compass;
use valence_core::{BoxError, EmbeddingProvider, Outcome, ValenceClassifier};

struct AnchorWords {
    axes: Vec<String>,
}

impl EmbeddingProvider for AnchorWords {
    fn embed(&self, text: &str) -> Result<Vec<f32>, BoxError> {
        let lower = text.to_lowercase();
        let mut v = vec![0.0; self.axes.len() + 1];
        if let Some(i) = self.axes.iter().position(|a| *a == lower) {
            v[i] = 1.0;
            return Ok(v);
        }
        for word in lower.split(|c: char| !c.is_alphabetic()) {
            if let Some(i) = self.axes.iter().position(|a| a == word) {
                v[i] += 1.0;
            }
        }
        let filler = self.axes.len();
        v[filler] = 1.0;
        Ok(v)
    }
}

const ENTRIES: [(&str, &str); 10] = [
    ("Stolen web app code", "My teammate took credit for the web app code I wrote. I feel betrayed and furious about this situation."),
    ("Dream school acceptance", "I just got accepted into my dream college! I'm so excited and proud of myself!"),
    ("Final exams", "Final exams are next week and I haven't studied enough. I'm anxious and overwhelmed by everything."),
    ("Weekend morning", "Woke up on Saturday with no deadlines. Just relaxing with coffee and music. I feel peaceful and content."),
    ("Loss", "I lost my grandfather yesterday and the house feels so empty. I miss him so much, I feel incredibly sad and lonely."),
    ("Forgotten birthday", "I completely forgot my best friend's birthday. I feel like a terrible person, so guilty and ashamed."),
    ("Imposter syndrome", "Everyone in my class seems so much smarter than me. I feel inadequate and insecure about my abilities."),
    ("Unexpected kindness", "My neighbor helped me fix my flat tire in the rain without me even asking. I'm so grateful and touched by their kindness."),
    ("New job", "I'm excited about the new job but also nervous about meeting expectations."),
    ("Graduation", "I'm happy I graduated but sad to leave my friends behind forever."),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let compass = polar_compass();
    let embedder = AnchorWords {
        axes: compass.matchable().map(|(_, a)| a.phrase()).collect(),
    };
    let classifier = ValenceClassifier::new(compass, embedder)?;

    println!("{}", "=".repeat(80));
    println!("POLAR EMOTION COMPASS — ANGULAR GUARDRAIL WALKTHROUGH");
    println!("{}", "=".repeat(80));

    for (i, (name, text)) in ENTRIES.iter().enumerate() {
        let c = classifier.explain(text)?;
        let how = match c.outcome {
            Outcome::Neutral(reason) => format!("neutral ({reason:?})"),
            Outcome::Snapped(reason) => format!("snap ({reason:?})"),
            Outcome::Blended => "blend".to_owned(),
        };
        println!("\nEntry {}: {name}", i + 1);
        println!("{}", "-".repeat(80));
        println!("Input:    {text}");
        println!("Result:   {}", c.result.label);
        println!("Stats:    Intensity={:.4}, Angle={:.2}°", c.result.radius, c.result.angle);
        println!("Decision: {how}");
    }

    Ok(())
}
