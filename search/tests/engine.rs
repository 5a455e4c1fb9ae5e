#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use stocklens_search::AssetRow;
use stocklens_search::CustodyRow;
use stocklens_search::NavCursor;
use stocklens_search::OriginCategory;
use stocklens_search::RESULT_CAP;
use stocklens_search::RetiredAssetRow;
use stocklens_search::SourceSet;
use stocklens_search::UnifiedIndex;
use stocklens_search::run_query;
use stocklens_search::suggest;

fn asset(id: &str, code: &str, description: &str) -> AssetRow {
    AssetRow {
        id: id.to_string(),
        inventory_code: Some(code.to_string()),
        description: Some(description.to_string()),
        ..Default::default()
    }
}

fn sample_sources() -> SourceSet {
    let mut sources = SourceSet::default();
    sources.capital_assets.replace(vec![
        asset("1", "INV-2026-0234", "Standing desk"),
        asset("2", "INV-2026-0400", "Office chair"),
    ]);
    sources.controlled_assets.replace(vec![asset(
        "3",
        "CTL-2026-0010",
        "Barcode scanner",
    )]);
    sources.retired_capital_assets.replace(vec![RetiredAssetRow {
        id: "4".to_string(),
        inventory_code: Some("INV-2019-0042".to_string()),
        description: Some("Broken desk lamp".to_string()),
        retirement_folio: Some("BAJ-0042".to_string()),
        motive: Some("Damaged beyond repair".to_string()),
        ..Default::default()
    }]);
    sources.custody_receipts.replace(vec![CustodyRow {
        id: "5".to_string(),
        folio: Some("RES-0420".to_string()),
        inventory_code: Some("INV-2026-0234".to_string()),
        custodian: Some("R. Alvarez".to_string()),
        ..Default::default()
    }]);
    sources
}

#[test]
fn inventory_code_fragment_finds_the_record() {
    let sources = sample_sources();
    let mut index = UnifiedIndex::new();
    index.refresh(&sources);

    let outcome = run_query(index.records(), "0234");
    // The code appears on the capital asset and on its custody receipt.
    assert_eq!(outcome.total_matches, 2);
    let ids: Vec<&str> = outcome.results.iter_flat().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "5"]);
}

#[test]
fn prefix_query_completes_to_the_full_code() {
    let sources = sample_sources();
    let mut index = UnifiedIndex::new();
    index.refresh(&sources);

    let suggestion = suggest(index.records(), "INV").expect("suggestion");
    assert_eq!(suggestion.full(), "INV-2026-0234");
    assert_eq!(suggestion.remainder("INV"), "-2026-0234");
}

#[test]
fn short_queries_never_suggest_regardless_of_index() {
    let sources = sample_sources();
    let mut index = UnifiedIndex::new();
    index.refresh(&sources);

    assert!(suggest(index.records(), "I").is_none());
    assert!(suggest(index.records(), " i ").is_none());
}

#[test]
fn implicit_confirm_acts_on_the_first_result() {
    let sources = sample_sources();
    let mut index = UnifiedIndex::new();
    index.refresh(&sources);

    let outcome = run_query(index.records(), "desk");
    assert!(outcome.results.flat_len() >= 2);

    let idle = NavCursor::new();
    let mut explicit = NavCursor::new();
    explicit.hover(0);

    let len = outcome.results.flat_len();
    let implicit_target = idle.effective(len).expect("target");
    let explicit_target = explicit.effective(len).expect("target");
    assert_eq!(implicit_target, explicit_target);
    assert_eq!(
        outcome.results.get(implicit_target).map(|r| r.id.as_str()),
        Some("1")
    );
}

#[test]
fn matches_are_sound_and_complete_under_the_cap() {
    let sources = sample_sources();
    let mut index = UnifiedIndex::new();
    index.refresh(&sources);

    let needle = "desk";
    let outcome = run_query(index.records(), needle);

    // Soundness: every result contains the needle in some field.
    for record in outcome.results.iter_flat() {
        let hit = record
            .searchable_fields()
            .iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle));
        assert!(hit, "record {} does not match {needle:?}", record.id);
    }

    // Bounded completeness: every index record matching the predicate is
    // present (the fixture is far below the cap).
    let expected = index
        .records()
        .iter()
        .filter(|record| {
            record
                .searchable_fields()
                .iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(needle))
        })
        .count();
    assert_eq!(outcome.total_matches, expected);
    assert_eq!(outcome.results.flat_len(), expected);
}

#[test]
fn cap_starves_groups_late_in_the_fixed_order() {
    let mut sources = SourceSet::default();
    let bulk: Vec<AssetRow> = (0..60)
        .map(|i| asset(&format!("cap-{i}"), "INV-BULK", "Shared code"))
        .collect();
    sources.capital_assets.replace(bulk);
    sources.custody_receipts.replace(vec![CustodyRow {
        id: "late".to_string(),
        inventory_code: Some("INV-BULK".to_string()),
        ..Default::default()
    }]);

    let mut index = UnifiedIndex::new();
    index.refresh(&sources);
    let outcome = run_query(index.records(), "inv-bulk");

    assert_eq!(outcome.total_matches, 61);
    assert!(outcome.truncated);
    assert_eq!(outcome.results.flat_len(), RESULT_CAP);
    // The custody group never appears: the cap is a hard slice of the
    // pre-group filtered list.
    assert_eq!(outcome.results.groups().len(), 1);
    assert_eq!(
        outcome.results.groups()[0].origin,
        OriginCategory::CapitalAssets
    );
}

#[test]
fn reindex_is_picked_up_by_the_next_refresh() {
    let mut sources = sample_sources();
    let mut index = UnifiedIndex::new();
    index.refresh(&sources);
    assert_eq!(run_query(index.records(), "projector").total_matches, 0);

    let mut rows: Vec<AssetRow> = sources.capital_assets.rows().to_vec();
    rows.push(asset("6", "INV-2026-0500", "Projector"));
    sources.capital_assets.replace(rows);

    assert!(index.refresh(&sources));
    assert_eq!(run_query(index.records(), "projector").total_matches, 1);
}
