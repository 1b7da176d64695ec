//! Deterministic embedding providers shared by the integration tests.

#![allow(dead_code)]

use hashbrown::HashMap;

use valence_core::anchor::AnchorTable;
use valence_core::embedding::EmbeddingProvider;
use valence_core::error::BoxError;

/// Looks every text up in a fixed table; unknown text is a provider failure.
pub struct TableEmbedder {
    vectors: HashMap<String, Vec<f32>>,
}

impl TableEmbedder {
    pub fn new<const N: usize>(entries: [(&str, Vec<f32>); N]) -> Self {
        Self {
            vectors: entries
                .into_iter()
                .map(|(text, v)| (text.to_owned(), v))
                .collect(),
        }
    }
}

impl EmbeddingProvider for TableEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, BoxError> {
        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| format!("no recorded embedding for {text:?}").into())
    }
}

/// Bag-of-anchor-words embedder.
///
/// One axis per matchable anchor plus a filler axis. An anchor phrase embeds to
/// its own axis; any other text counts the anchor words it contains and puts
/// 1.0 on the filler axis, so a sentence naming one emotion scores 1/√2 against
/// it and a sentence naming none scores zero everywhere.
pub struct KeywordEmbedder {
    axes: Vec<String>,
}

impl KeywordEmbedder {
    pub fn for_table(table: &AnchorTable) -> Self {
        Self {
            axes: table.matchable().map(|(_, a)| a.phrase()).collect(),
        }
    }
}

impl EmbeddingProvider for KeywordEmbedder {
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
