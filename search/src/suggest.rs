use crate::record::SearchRecord;

/// Queries shorter than this (after trimming) never produce a suggestion.
pub const SUGGEST_MIN_CHARS: usize = 2;

/// A single autocomplete candidate: the full value of the first code or
/// folio field found to start with the typed prefix. First match wins;
/// there is no competing-suggestion resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    full: String,
}

impl Suggestion {
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Ghost text: the part of the suggestion beyond what is already
    /// typed. The prefix match is case-insensitive, so the remainder is
    /// taken by character count rather than by byte offset.
    pub fn remainder(&self, typed: &str) -> &str {
        let typed_chars = typed.trim().chars().count();
        match self.full.char_indices().nth(typed_chars) {
            Some((offset, _)) => &self.full[offset..],
            None => "",
        }
    }
}

/// Scan the index in concatenation order for the first record whose
/// inventory code, receipt folio, or retirement folio starts with the
/// query, case-insensitive.
pub fn suggest(records: &[SearchRecord], query: &str) -> Option<Suggestion> {
    let trimmed = query.trim();
    if trimmed.chars().count() < SUGGEST_MIN_CHARS {
        return None;
    }
    let prefix = trimmed.to_lowercase();
    for record in records {
        let candidates = [
            record.inventory_code.as_deref(),
            record.receipt_folio.as_deref(),
            record.retirement_folio.as_deref(),
        ];
        for value in candidates.into_iter().flatten() {
            if value.to_lowercase().starts_with(&prefix) {
                return Some(Suggestion {
                    full: value.to_string(),
                });
            }
        }
    }
    None
}
