//! Splitting kana text into character units.
//!
//! Scans left to right, preferring a registered two-glyph combination over a
//! single glyph. Glyphs the registry does not know are emitted verbatim, one
//! code point at a time, so that positions stay aligned with the input.

use std::sync::Arc;

use crate::table::Registry;

pub struct Segmenter {
    registry: Arc<Registry>,
}

impl Segmenter {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Segment using the tables selected by the registry's script mode.
    pub fn segment(&self, text: &str) -> Vec<String> {
        segment_with(text, |g| self.registry.contains(g))
    }

    /// Segment consulting both hiragana and katakana tables.
    pub fn segment_any(&self, text: &str) -> Vec<String> {
        segment_with(text, |g| self.registry.contains_any(g))
    }
}

/// Core scan shared by both segmenter entry points. `known` decides whether a
/// candidate substring is a registered unit.
fn segment_with(text: &str, known: impl Fn(&str) -> bool) -> Vec<String> {
    // Byte offsets of every code point, plus the end of the string.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let n = bounds.len() - 1;

    let mut units = Vec::new();
    let mut i = 0;
    while i < n {
        if i + 2 <= n {
            let pair = &text[bounds[i]..bounds[i + 2]];
            if known(pair) {
                units.push(pair.to_string());
                i += 2;
                continue;
            }
        }
        units.push(text[bounds[i]..bounds[i + 1]].to_string());
        i += 1;
    }
    units
}
