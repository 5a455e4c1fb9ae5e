use crate::record::OriginCategory;
use crate::record::SearchRecord;

/// One labeled result group plus its offset into the flat sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultGroup {
    pub origin: OriginCategory,
    /// Flat position of this group's first record.
    pub offset: usize,
    pub records: Vec<SearchRecord>,
}

/// Matched records partitioned by origin in the fixed presentation order
/// and simultaneously addressable as one flat sequence. The flat
/// positions are the addressing space for keyboard navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultGroups {
    groups: Vec<ResultGroup>,
    flat_len: usize,
}

impl ResultGroups {
    /// Partition a capped match list. Empty groups are skipped; each
    /// group keeps its records in the order they arrived (unified index
    /// concatenation order).
    pub fn organize(matches: Vec<SearchRecord>) -> Self {
        let mut groups: Vec<ResultGroup> = Vec::new();
        let mut flat_len = 0;
        for origin in OriginCategory::ALL {
            let records: Vec<SearchRecord> = matches
                .iter()
                .filter(|record| record.origin == origin)
                .cloned()
                .collect();
            if records.is_empty() {
                continue;
            }
            let offset = flat_len;
            flat_len += records.len();
            groups.push(ResultGroup {
                origin,
                offset,
                records,
            });
        }
        Self { groups, flat_len }
    }

    pub fn groups(&self) -> &[ResultGroup] {
        &self.groups
    }

    pub fn flat_len(&self) -> usize {
        self.flat_len
    }

    pub fn is_empty(&self) -> bool {
        self.flat_len == 0
    }

    /// Record at a flat position, if the position is in range.
    pub fn get(&self, position: usize) -> Option<&SearchRecord> {
        for group in &self.groups {
            if position < group.offset + group.records.len() {
                return group.records.get(position.checked_sub(group.offset)?);
            }
        }
        None
    }

    pub fn iter_flat(&self) -> impl Iterator<Item = &SearchRecord> {
        self.groups.iter().flat_map(|group| group.records.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, origin: OriginCategory) -> SearchRecord {
        SearchRecord::new(id, origin)
    }

    #[test]
    fn groups_follow_fixed_order_and_skip_empty() {
        let matches = vec![
            record("c1", OriginCategory::CustodyReceipts),
            record("a1", OriginCategory::CapitalAssets),
            record("c2", OriginCategory::CustodyReceipts),
        ];
        let organized = ResultGroups::organize(matches);
        let origins: Vec<OriginCategory> = organized
            .groups()
            .iter()
            .map(|group| group.origin)
            .collect();
        assert_eq!(
            origins,
            vec![
                OriginCategory::CapitalAssets,
                OriginCategory::CustodyReceipts
            ]
        );
        assert_eq!(organized.flat_len(), 3);
    }

    #[test]
    fn flat_positions_are_stable_and_addressable() {
        let matches = vec![
            record("c1", OriginCategory::CustodyReceipts),
            record("a1", OriginCategory::CapitalAssets),
            record("c2", OriginCategory::CustodyReceipts),
        ];
        let organized = ResultGroups::organize(matches);
        assert_eq!(organized.get(0).map(|r| r.id.as_str()), Some("a1"));
        assert_eq!(organized.get(1).map(|r| r.id.as_str()), Some("c1"));
        assert_eq!(organized.get(2).map(|r| r.id.as_str()), Some("c2"));
        assert_eq!(organized.get(3), None);

        let flat: Vec<&str> = organized.iter_flat().map(|r| r.id.as_str()).collect();
        assert_eq!(flat, vec!["a1", "c1", "c2"]);
    }

    #[test]
    fn group_offsets_match_flat_positions() {
        let matches = vec![
            record("a1", OriginCategory::CapitalAssets),
            record("a2", OriginCategory::CapitalAssets),
            record("r1", OriginCategory::RetiredCustodyReceipts),
        ];
        let organized = ResultGroups::organize(matches);
        assert_eq!(organized.groups()[0].offset, 0);
        assert_eq!(organized.groups()[1].offset, 2);
    }
}
