//! Pure mappings from the heterogeneous source rows into the canonical
//! [`SearchRecord`] shape. Missing source fields become `None`; nothing
//! here can fail or touch state.

use crate::record::OriginCategory;
use crate::record::SearchRecord;
use crate::source::AssetRow;
use crate::source::CustodyRow;
use crate::source::RetiredAssetRow;
use crate::source::RetiredCustodyRow;

pub fn asset(row: &AssetRow, origin: OriginCategory) -> SearchRecord {
    let mut record = SearchRecord::new(row.id.clone(), origin);
    record.inventory_code = row.inventory_code.clone();
    record.description = row.description.clone();
    record.category = row.category.clone();
    record.value = row.value.map(money_text);
    record.area = row.area.clone();
    record.condition = row.condition.clone();
    record.status = row.status.clone();
    record.custodian = row.custodian.clone();
    record
}

pub fn retired_asset(row: &RetiredAssetRow, origin: OriginCategory) -> SearchRecord {
    let mut record = SearchRecord::new(row.id.clone(), origin);
    record.inventory_code = row.inventory_code.clone();
    record.description = row.description.clone();
    record.category = row.category.clone();
    record.value = row.value.map(money_text);
    record.area = row.area_of_record.clone();
    record.retirement_folio = row.retirement_folio.clone();
    record.motive = row.motive.clone();
    record.director = row.director.clone();
    record
}

pub fn custody(row: &CustodyRow) -> SearchRecord {
    let mut record = SearchRecord::new(row.id.clone(), OriginCategory::CustodyReceipts);
    record.receipt_folio = row.folio.clone();
    record.inventory_code = row.inventory_code.clone();
    record.description = row.description.clone();
    record.custodian = row.custodian.clone();
    record.area = row.area.clone();
    record.status = row.status.clone();
    record
}

pub fn retired_custody(row: &RetiredCustodyRow) -> SearchRecord {
    let mut record = SearchRecord::new(row.id.clone(), OriginCategory::RetiredCustodyReceipts);
    record.receipt_folio = row.folio.clone();
    record.inventory_code = row.inventory_code.clone();
    record.description = row.description.clone();
    record.custodian = row.custodian.clone();
    record.area = row.area.clone();
    record.motive = row.motive.clone();
    record.director = row.director.clone();
    record
}

/// Monetary values are matched as text, rendered once at normalization
/// time with two decimals.
fn money_text(value: f64) -> String {
    format!("{value:.2}")
}
