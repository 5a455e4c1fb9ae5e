use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// One source collection as exposed by its adapter: the current
/// materialized rows plus a version that external mutation flows bump by
/// calling [`Snapshot::replace`] after a write. The search core only ever
/// reads; it never triggers a reindex itself.
#[derive(Clone, Debug)]
pub struct Snapshot<T> {
    rows: Arc<[T]>,
    version: u64,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            rows: Arc::from(Vec::new()),
            version: 0,
        }
    }
}

impl<T> Snapshot<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::from(rows),
            version: 1,
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Swap in a freshly materialized collection. This is the `reindex`
    /// entry point collaborators call after a write.
    pub fn replace(&mut self, rows: Vec<T>) {
        self.rows = Arc::from(rows);
        self.version += 1;
    }
}

/// Row shape of an active asset registry (capital or controlled).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AssetRow {
    pub id: String,
    #[serde(default)]
    pub inventory_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub custodian: Option<String>,
}

/// Row shape of a decommissioned asset registry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RetiredAssetRow {
    pub id: String,
    #[serde(default)]
    pub inventory_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub area_of_record: Option<String>,
    #[serde(default)]
    pub retirement_folio: Option<String>,
    #[serde(default)]
    pub motive: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
}

/// Row shape of an active custody receipt.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CustodyRow {
    pub id: String,
    #[serde(default)]
    pub folio: Option<String>,
    #[serde(default)]
    pub inventory_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub custodian: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Row shape of a decommissioned custody receipt.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RetiredCustodyRow {
    pub id: String,
    #[serde(default)]
    pub folio: Option<String>,
    #[serde(default)]
    pub inventory_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub custodian: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub motive: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
}

/// The six independently refreshed source collections, in origin
/// declaration order.
#[derive(Clone, Debug, Default)]
pub struct SourceSet {
    pub capital_assets: Snapshot<AssetRow>,
    pub controlled_assets: Snapshot<AssetRow>,
    pub retired_capital_assets: Snapshot<RetiredAssetRow>,
    pub retired_controlled_assets: Snapshot<RetiredAssetRow>,
    pub custody_receipts: Snapshot<CustodyRow>,
    pub retired_custody_receipts: Snapshot<RetiredCustodyRow>,
}

impl SourceSet {
    /// Current version of every slot, used as the rebuild key for the
    /// unified index.
    pub fn versions(&self) -> [u64; 6] {
        [
            self.capital_assets.version(),
            self.controlled_assets.version(),
            self.retired_capital_assets.version(),
            self.retired_controlled_assets.version(),
            self.custody_receipts.version(),
            self.retired_custody_receipts.version(),
        ]
    }
}
