//! Duplicate detection against existing catalog records.
//!
//! Exact URL equality is a hard submission block; fuzzy name overlap is a
//! soft warning the submitter may override. Classification is pure over a
//! snapshot of summaries taken at call time, so two concurrent submissions of
//! the same URL can still race — accepted limitation, not resolved by
//! locking.

use serde::{Deserialize, Serialize};

use crate::product::ProductSummary;

/// Candidate name tokens shorter than this are too generic to match on.
const MIN_TOKEN_LEN: usize = 4;

/// How many leading name tokens participate in the similarity check.
const MAX_SEARCH_TOKENS: usize = 3;

/// Classification of a candidate against the existing catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "existing", rename_all = "lowercase")]
pub enum DuplicateVerdict {
    None,
    Similar(ProductSummary),
    Exact(ProductSummary),
}

impl DuplicateVerdict {
    pub fn is_exact(&self) -> bool {
        matches!(self, DuplicateVerdict::Exact(_))
    }

    pub fn is_similar(&self) -> bool {
        matches!(self, DuplicateVerdict::Similar(_))
    }
}

/// Classify a candidate URL/name pair against a snapshot of existing records.
///
/// An exact URL match short-circuits; no similarity check runs. For similar
/// matches the most recently submitted record wins, a stable tie-break
/// replacing the unordered first-found behavior of the earlier system.
pub fn classify_duplicate(
    url: &str,
    name: &str,
    existing: &[ProductSummary],
) -> DuplicateVerdict {
    if let Some(summary) = existing.iter().find(|s| s.source_url == url) {
        return DuplicateVerdict::Exact(summary.clone());
    }

    let candidate = name.to_lowercase();
    let terms: Vec<&str> = candidate
        .split_whitespace()
        .take(MAX_SEARCH_TOKENS)
        .filter(|t| t.len() >= MIN_TOKEN_LEN)
        .collect();

    if terms.is_empty() {
        return DuplicateVerdict::None;
    }

    let best = existing
        .iter()
        .filter(|s| {
            let existing_name = s.name.to_lowercase();
            terms.iter().any(|term| existing_name.contains(term))
        })
        .max_by_key(|s| s.submitted_at);

    match best {
        Some(summary) => DuplicateVerdict::Similar(summary.clone()),
        None => DuplicateVerdict::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use provet_core::ProductId;

    fn summary(url: &str, name: &str, age_days: i64) -> ProductSummary {
        ProductSummary {
            id: ProductId::new(),
            source_url: url.to_string(),
            name: name.to_string(),
            submitted_by: "dara".to_string(),
            submitted_at: Utc::now() - Duration::days(age_days),
        }
    }

    #[test]
    fn empty_catalog_is_clear() {
        let verdict = classify_duplicate("https://x/1", "Linen Throw Blanket", &[]);
        assert_eq!(verdict, DuplicateVerdict::None);
    }

    #[test]
    fn identical_url_is_exact() {
        let existing = vec![summary("https://x/1", "Something Unrelated", 3)];
        let verdict = classify_duplicate("https://x/1", "Linen Throw Blanket", &existing);
        assert!(verdict.is_exact());
    }

    #[test]
    fn exact_match_takes_precedence_over_similar() {
        let existing = vec![
            summary("https://x/other", "Linen Throw Pillow", 1),
            summary("https://x/1", "Unrelated Name", 9),
        ];
        let verdict = classify_duplicate("https://x/1", "Linen Throw Blanket", &existing);
        match verdict {
            DuplicateVerdict::Exact(s) => assert_eq!(s.source_url, "https://x/1"),
            other => panic!("expected exact verdict, got {other:?}"),
        }
    }

    #[test]
    fn shared_long_token_is_similar() {
        let existing = vec![summary("https://x/2", "Ceramic Candle Diffuser Set", 2)];
        let verdict = classify_duplicate("https://x/1", "Ceramic Diffuser", &existing);
        assert!(verdict.is_similar());
    }

    #[test]
    fn short_tokens_do_not_match() {
        // "oak" has 3 chars; below the significance threshold.
        let existing = vec![summary("https://x/2", "Oak Serving Board", 2)];
        let verdict = classify_duplicate("https://x/1", "Oak Tray", &existing);
        assert_eq!(verdict, DuplicateVerdict::None);
    }

    #[test]
    fn only_first_three_tokens_are_considered() {
        // The overlapping token ("diffuser") is the candidate's fourth word.
        let existing = vec![summary("https://x/2", "Ceramic Candle Diffuser Set", 2)];
        let verdict = classify_duplicate("https://x/1", "Warm Cozy Home Diffuser", &existing);
        assert_eq!(verdict, DuplicateVerdict::None);
    }

    #[test]
    fn most_recent_similar_match_wins() {
        let older = summary("https://x/2", "Ceramic Candle Holder", 30);
        let newer = summary("https://x/3", "Ceramic Vase", 1);
        let existing = vec![older, newer.clone()];
        let verdict = classify_duplicate("https://x/1", "Ceramic Diffuser", &existing);
        match verdict {
            DuplicateVerdict::Similar(s) => assert_eq!(s.id, newer.id),
            other => panic!("expected similar verdict, got {other:?}"),
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let existing = vec![summary("https://x/2", "CERAMIC CANDLE SET", 2)];
        let verdict = classify_duplicate("https://x/1", "ceramic diffuser", &existing);
        assert!(verdict.is_similar());
    }
}
