use crate::organize::ResultGroups;
use crate::record::SearchRecord;

/// Hard cap on the number of matches kept for display. The slice is
/// taken before grouping, so categories late in the fixed order can be
/// starved when earlier ones alone exceed the cap.
pub const RESULT_CAP: usize = 50;

/// Outcome of evaluating one settled query against the unified index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryOutcome {
    pub results: ResultGroups,
    /// True match count, counted past the cap.
    pub total_matches: usize,
    pub truncated: bool,
}

impl QueryOutcome {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Case-insensitive substring filter over every canonical field. Matches
/// keep the index's concatenation order; there is no relevance ranking,
/// so a hit on an inventory code weighs the same as one on a description.
pub fn run_query(records: &[SearchRecord], query: &str) -> QueryOutcome {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return QueryOutcome::empty();
    }

    let mut matches: Vec<SearchRecord> = Vec::new();
    let mut total_matches = 0;
    for record in records {
        if !record_matches(record, &needle) {
            continue;
        }
        total_matches += 1;
        if matches.len() < RESULT_CAP {
            matches.push(record.clone());
        }
    }

    QueryOutcome {
        results: ResultGroups::organize(matches),
        total_matches,
        truncated: total_matches > RESULT_CAP,
    }
}

fn record_matches(record: &SearchRecord, needle_lower: &str) -> bool {
    record
        .searchable_fields()
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle_lower))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::OriginCategory;

    fn coded_record(id: &str, code: &str) -> SearchRecord {
        let mut record = SearchRecord::new(id, OriginCategory::CapitalAssets);
        record.inventory_code = Some(code.to_string());
        record
    }

    #[test]
    fn empty_or_whitespace_query_yields_empty_outcome() {
        let records = vec![coded_record("1", "INV-2026-0234")];
        assert_eq!(run_query(&records, ""), QueryOutcome::empty());
        assert_eq!(run_query(&records, "   "), QueryOutcome::empty());
    }

    #[test]
    fn substring_match_is_case_insensitive_across_fields() {
        let mut desk = SearchRecord::new("1", OriginCategory::CapitalAssets);
        desk.description = Some("Standing Desk".to_string());
        let mut receipt = SearchRecord::new("2", OriginCategory::CustodyReceipts);
        receipt.custodian = Some("M. Desko".to_string());
        let records = vec![desk, receipt];

        let outcome = run_query(&records, "desk");
        assert_eq!(outcome.total_matches, 2);
        assert!(!outcome.truncated);
        assert_eq!(outcome.results.flat_len(), 2);
    }

    #[test]
    fn every_result_matches_in_at_least_one_field() {
        let records: Vec<SearchRecord> = (0..20)
            .map(|i| coded_record(&i.to_string(), &format!("INV-{i:04}")))
            .collect();
        let outcome = run_query(&records, "inv-001");
        for record in outcome.results.iter_flat() {
            assert!(record_matches(record, "inv-001"));
        }
        assert_eq!(outcome.total_matches, 10);
    }

    #[test]
    fn cap_keeps_first_fifty_and_counts_the_rest() {
        let records: Vec<SearchRecord> = (0..75)
            .map(|i| coded_record(&i.to_string(), "INV-SAME"))
            .collect();
        let outcome = run_query(&records, "same");
        assert_eq!(outcome.results.flat_len(), RESULT_CAP);
        assert_eq!(outcome.total_matches, 75);
        assert!(outcome.truncated);
        // The kept matches are the first fifty in index order.
        assert_eq!(
            outcome.results.get(0).map(|r| r.id.as_str()),
            Some("0")
        );
        assert_eq!(
            outcome.results.get(RESULT_CAP - 1).map(|r| r.id.as_str()),
            Some("49")
        );
    }

    #[test]
    fn truncated_is_false_at_exactly_the_cap() {
        let records: Vec<SearchRecord> = (0..RESULT_CAP)
            .map(|i| coded_record(&i.to_string(), "INV-SAME"))
            .collect();
        let outcome = run_query(&records, "same");
        assert_eq!(outcome.total_matches, RESULT_CAP);
        assert!(!outcome.truncated);
    }

    #[test]
    fn absent_fields_never_match_or_panic() {
        let records = vec![SearchRecord::new("1", OriginCategory::CustodyReceipts)];
        let outcome = run_query(&records, "anything");
        assert_eq!(outcome.total_matches, 0);
        assert!(outcome.results.is_empty());
    }
}
