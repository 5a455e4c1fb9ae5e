use color_eyre::eyre::Result;
use color_eyre::eyre::WrapErr;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use stocklens_search::AssetRow;
use stocklens_search::CustodyRow;
use stocklens_search::RetiredAssetRow;
use stocklens_search::RetiredCustodyRow;
use stocklens_search::SourceSet;
use tracing::debug;

/// Load the six source collections from JSON files under `dir`. A
/// missing file is an empty collection, mirroring a source cache that
/// has not materialized yet; malformed JSON is a hard error so broken
/// fixtures do not silently shrink the index.
pub fn load_sources(dir: &Path) -> Result<SourceSet> {
    let mut sources = SourceSet::default();
    sources
        .capital_assets
        .replace(load_rows(dir, "capital_assets.json")?);
    sources
        .controlled_assets
        .replace(load_rows(dir, "controlled_assets.json")?);
    sources
        .retired_capital_assets
        .replace(load_rows(dir, "retired_capital_assets.json")?);
    sources
        .retired_controlled_assets
        .replace(load_rows(dir, "retired_controlled_assets.json")?);
    sources
        .custody_receipts
        .replace(load_rows(dir, "custody_receipts.json")?);
    sources
        .retired_custody_receipts
        .replace(load_rows(dir, "retired_custody_receipts.json")?);
    Ok(sources)
}

fn load_rows<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>> {
    let path = dir.join(name);
    match fs::read(&path) {
        Ok(data) => serde_json::from_slice(&data)
            .wrap_err_with(|| format!("parse fixture {}", path.display())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "fixture missing, using empty collection");
            Ok(Vec::new())
        }
        Err(err) => Err(err).wrap_err_with(|| format!("read fixture {}", path.display())),
    }
}

/// Built-in demo data used when no `--data` directory is given.
pub fn sample_sources() -> SourceSet {
    let mut sources = SourceSet::default();
    sources.capital_assets.replace(vec![
        asset_row(
            "1001",
            "INV-2026-0234",
            "Standing desk, oak finish",
            "Furniture",
            5400.0,
            "Procurement",
            "R. Alvarez",
        ),
        asset_row(
            "1002",
            "INV-2026-0310",
            "Conference projector",
            "AV equipment",
            12890.0,
            "Facilities",
            "L. Mendez",
        ),
        asset_row(
            "1003",
            "INV-2025-1188",
            "Server rack, 42U",
            "IT infrastructure",
            31000.0,
            "Data center",
            "P. Okafor",
        ),
    ]);
    sources.controlled_assets.replace(vec![
        asset_row(
            "2001",
            "CTL-2026-0045",
            "Barcode scanner",
            "Peripherals",
            890.0,
            "Warehouse",
            "S. Imai",
        ),
        asset_row(
            "2002",
            "CTL-2026-0046",
            "Label printer",
            "Peripherals",
            1450.0,
            "Warehouse",
            "S. Imai",
        ),
    ]);
    sources.retired_capital_assets.replace(vec![RetiredAssetRow {
        id: "3001".to_string(),
        inventory_code: Some("INV-2019-0042".to_string()),
        description: Some("Desk lamp, halogen".to_string()),
        category: Some("Furniture".to_string()),
        value: Some(320.0),
        area_of_record: Some("Administration".to_string()),
        retirement_folio: Some("BAJ-2025-0042".to_string()),
        motive: Some("Damaged beyond repair".to_string()),
        director: Some("A. Fuentes".to_string()),
    }]);
    sources.custody_receipts.replace(vec![CustodyRow {
        id: "4001".to_string(),
        folio: Some("RES-2026-0420".to_string()),
        inventory_code: Some("INV-2026-0234".to_string()),
        description: Some("Standing desk, oak finish".to_string()),
        custodian: Some("R. Alvarez".to_string()),
        area: Some("Procurement".to_string()),
        status: Some("Active".to_string()),
    }]);
    sources
        .retired_custody_receipts
        .replace(vec![RetiredCustodyRow {
            id: "5001".to_string(),
            folio: Some("RES-2019-0017".to_string()),
            inventory_code: Some("INV-2019-0042".to_string()),
            description: Some("Desk lamp, halogen".to_string()),
            custodian: Some("A. Fuentes".to_string()),
            area: Some("Administration".to_string()),
            motive: Some("Asset retired".to_string()),
            director: Some("A. Fuentes".to_string()),
        }]);
    sources
}

fn asset_row(
    id: &str,
    code: &str,
    description: &str,
    category: &str,
    value: f64,
    area: &str,
    custodian: &str,
) -> AssetRow {
    AssetRow {
        id: id.to_string(),
        inventory_code: Some(code.to_string()),
        description: Some(description.to_string()),
        category: Some(category.to_string()),
        value: Some(value),
        area: Some(area.to_string()),
        condition: Some("Good".to_string()),
        status: Some("Assigned".to_string()),
        custodian: Some(custodian.to_string()),
    }
}
