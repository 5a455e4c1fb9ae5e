use serde::Deserialize;
use serde::Serialize;

/// Origin of a normalized record. Declaration order is also the fixed
/// presentation order of result groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OriginCategory {
    CapitalAssets,
    ControlledAssets,
    RetiredCapitalAssets,
    RetiredControlledAssets,
    CustodyReceipts,
    RetiredCustodyReceipts,
}

impl OriginCategory {
    pub const ALL: [OriginCategory; 6] = [
        OriginCategory::CapitalAssets,
        OriginCategory::ControlledAssets,
        OriginCategory::RetiredCapitalAssets,
        OriginCategory::RetiredControlledAssets,
        OriginCategory::CustodyReceipts,
        OriginCategory::RetiredCustodyReceipts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OriginCategory::CapitalAssets => "Capital assets",
            OriginCategory::ControlledAssets => "Controlled assets",
            OriginCategory::RetiredCapitalAssets => "Retired capital assets",
            OriginCategory::RetiredControlledAssets => "Retired controlled assets",
            OriginCategory::CustodyReceipts => "Custody receipts",
            OriginCategory::RetiredCustodyReceipts => "Retired custody receipts",
        }
    }

    /// Destination path for a confirmed record. Asset categories route by
    /// record id; custody categories route by receipt folio, falling back
    /// to the id when the source row carried no folio.
    pub fn route_for(self, record: &SearchRecord) -> String {
        match self {
            OriginCategory::CapitalAssets => format!("/capital-assets/{}", record.id),
            OriginCategory::ControlledAssets => format!("/controlled-assets/{}", record.id),
            OriginCategory::RetiredCapitalAssets => {
                format!("/retired/capital-assets/{}", record.id)
            }
            OriginCategory::RetiredControlledAssets => {
                format!("/retired/controlled-assets/{}", record.id)
            }
            OriginCategory::CustodyReceipts => {
                format!("/custody-receipts/{}", record.folio_or_id())
            }
            OriginCategory::RetiredCustodyReceipts => {
                format!("/retired/custody-receipts/{}", record.folio_or_id())
            }
        }
    }
}

/// Canonical searchable record. Derived from a source row on every index
/// rebuild and never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: String,
    pub origin: OriginCategory,
    pub inventory_code: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Monetary value kept as text so matching stays uniform.
    pub value: Option<String>,
    pub area: Option<String>,
    pub condition: Option<String>,
    pub status: Option<String>,
    pub custodian: Option<String>,
    pub receipt_folio: Option<String>,
    pub retirement_folio: Option<String>,
    pub director: Option<String>,
    pub motive: Option<String>,
}

impl SearchRecord {
    pub fn new(id: impl Into<String>, origin: OriginCategory) -> Self {
        Self {
            id: id.into(),
            origin,
            inventory_code: None,
            description: None,
            category: None,
            value: None,
            area: None,
            condition: None,
            status: None,
            custodian: None,
            receipt_folio: None,
            retirement_folio: None,
            director: None,
            motive: None,
        }
    }

    /// Every searchable scalar, in a fixed order. Fields that are `None`
    /// simply do not participate in matching.
    pub fn searchable_fields(&self) -> [Option<&str>; 12] {
        [
            self.inventory_code.as_deref(),
            self.description.as_deref(),
            self.category.as_deref(),
            self.value.as_deref(),
            self.area.as_deref(),
            self.condition.as_deref(),
            self.status.as_deref(),
            self.custodian.as_deref(),
            self.receipt_folio.as_deref(),
            self.retirement_folio.as_deref(),
            self.director.as_deref(),
            self.motive.as_deref(),
        ]
    }

    fn folio_or_id(&self) -> &str {
        self.receipt_folio.as_deref().unwrap_or(&self.id)
    }
}
