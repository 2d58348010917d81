//! Column resolution
//!
//! Maps human-written header names to the two semantic roles
//! (improvement / strength) by case-insensitive keyword matching.

use crate::error::{ExtractError, Result};

const IMPROVEMENT_KEYWORDS: &[&str] = &["improve"];
const STRENGTH_KEYWORDS: &[&str] = &["strong", "strength"];

/// One resolved source column: position plus the header text as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub index: usize,
    pub header: String,
}

#[derive(Debug, Clone)]
pub struct ResolvedColumns {
    pub improvement: ResolvedColumn,
    pub strength: ResolvedColumn,
}

/// Resolve the improvement and strength columns from a header row.
///
/// Matching is substring containment on the lowercased header. When several
/// headers match a keyword set, the first one wins; this looseness is
/// deliberate and mirrors how users actually name survey columns.
pub fn resolve(headers: &[String]) -> Result<ResolvedColumns> {
    let improvement = find_column(headers, IMPROVEMENT_KEYWORDS)
        .ok_or_else(|| ExtractError::ImprovementColumnMissing(headers.to_vec()))?;
    let strength = find_column(headers, STRENGTH_KEYWORDS)
        .ok_or_else(|| ExtractError::StrengthColumnMissing(headers.to_vec()))?;

    Ok(ResolvedColumns {
        improvement,
        strength,
    })
}

fn find_column(headers: &[String], keywords: &[&str]) -> Option<ResolvedColumn> {
    headers.iter().enumerate().find_map(|(index, header)| {
        let lowered = header.to_lowercase();
        keywords
            .iter()
            .any(|keyword| lowered.contains(keyword))
            .then(|| ResolvedColumn {
                index,
                header: header.clone(),
            })
    })
}
