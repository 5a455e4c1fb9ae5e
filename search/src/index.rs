use crate::normalize;
use crate::record::OriginCategory;
use crate::record::SearchRecord;
use crate::source::SourceSet;
use tracing::debug;

/// Concatenation of all six normalized collections in origin declaration
/// order. The index is always rebuilt wholesale; source collections are
/// bounded client-resident caches, so the simplicity of a full rebuild
/// wins over incremental patching.
#[derive(Debug, Default)]
pub struct UnifiedIndex {
    records: Vec<SearchRecord>,
    built_from: Option<[u64; 6]>,
}

impl UnifiedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rebuild the index if any source snapshot version moved since the
    /// last build. Returns whether a rebuild happened, so callers can
    /// re-evaluate a live query only when the data actually changed.
    pub fn refresh(&mut self, sources: &SourceSet) -> bool {
        let versions = sources.versions();
        if self.built_from == Some(versions) {
            return false;
        }
        self.records = build_records(sources);
        self.built_from = Some(versions);
        debug!(records = self.records.len(), "unified index rebuilt");
        true
    }
}

fn build_records(sources: &SourceSet) -> Vec<SearchRecord> {
    let mut records = Vec::new();
    records.extend(
        sources
            .capital_assets
            .rows()
            .iter()
            .map(|row| normalize::asset(row, OriginCategory::CapitalAssets)),
    );
    records.extend(
        sources
            .controlled_assets
            .rows()
            .iter()
            .map(|row| normalize::asset(row, OriginCategory::ControlledAssets)),
    );
    records.extend(
        sources
            .retired_capital_assets
            .rows()
            .iter()
            .map(|row| normalize::retired_asset(row, OriginCategory::RetiredCapitalAssets)),
    );
    records.extend(
        sources
            .retired_controlled_assets
            .rows()
            .iter()
            .map(|row| normalize::retired_asset(row, OriginCategory::RetiredControlledAssets)),
    );
    records.extend(sources.custody_receipts.rows().iter().map(normalize::custody));
    records.extend(
        sources
            .retired_custody_receipts
            .rows()
            .iter()
            .map(normalize::retired_custody),
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::AssetRow;
    use crate::source::CustodyRow;

    fn asset_row(id: &str) -> AssetRow {
        AssetRow {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn refresh_is_memoized_on_source_versions() {
        let mut sources = SourceSet::default();
        let mut index = UnifiedIndex::new();

        assert!(index.refresh(&sources));
        assert!(!index.refresh(&sources));

        sources.capital_assets.replace(vec![asset_row("1")]);
        assert!(index.refresh(&sources));
        assert_eq!(index.len(), 1);
        assert!(!index.refresh(&sources));
    }

    #[test]
    fn records_follow_origin_declaration_order() {
        let mut sources = SourceSet::default();
        sources.custody_receipts.replace(vec![CustodyRow {
            id: "c1".to_string(),
            ..Default::default()
        }]);
        sources.controlled_assets.replace(vec![asset_row("b1")]);
        sources.capital_assets.replace(vec![asset_row("a1")]);

        let mut index = UnifiedIndex::new();
        index.refresh(&sources);
        let origins: Vec<OriginCategory> =
            index.records().iter().map(|record| record.origin).collect();
        assert_eq!(
            origins,
            vec![
                OriginCategory::CapitalAssets,
                OriginCategory::ControlledAssets,
                OriginCategory::CustodyReceipts,
            ]
        );
    }

    #[test]
    fn partially_loaded_sources_just_mean_fewer_records() {
        let mut sources = SourceSet::default();
        sources.capital_assets.replace(vec![asset_row("1")]);
        let mut index = UnifiedIndex::new();
        index.refresh(&sources);
        assert_eq!(index.len(), 1);
    }
}
