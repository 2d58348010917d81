//! Word extraction
//!
//! Runs every text cell of a source column through the tagger and
//! accumulates adjectives and nouns, in row order then token order.
//! Duplicates are kept; nothing is normalized or case-folded.

use calamine::Data;

use crate::tagger::{PosTag, Tagger};

/// Adjectives and nouns collected from one source column.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColumnWords {
    pub adjectives: Vec<String>,
    pub nouns: Vec<String>,
}

/// The four buckets of one extraction run.
#[derive(Debug, Default, Clone)]
pub struct WordBuckets {
    pub improvement: ColumnWords,
    pub strength: ColumnWords,
}

/// Extract adjectives and nouns from one column's cells. Only text cells
/// participate; numbers and empty cells are silently skipped.
pub fn extract_words(tagger: &Tagger, cells: &[Data]) -> ColumnWords {
    let mut words = ColumnWords::default();

    for cell in cells {
        let Data::String(content) = cell else {
            continue;
        };
        for token in tagger.tag(content) {
            match token.tag {
                PosTag::Adj => words.adjectives.push(token.text),
                PosTag::Noun => words.nouns.push(token.text),
                _ => {}
            }
        }
    }

    words
}
