//! Material quantification pass.
//!
//! Converts accumulated areas into discrete sheet counts and applies the
//! edge-band waste allowance. Sheet counts for sliding doors honor the
//! physical sheet width: tall narrow leaves are constrained by how many fit
//! across the sheet, which an area-only division would hide.

use crate::model::PriceBook;

use super::Tally;

/// Discrete material quantities derived from the corrected tally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialQuantities {
    /// 6mm backing sheets.
    pub sheets_backing: u32,
    /// Internal-finish 15mm sheets.
    pub sheets_internal: u32,
    /// External-finish 15mm sheets, door-constrained count plus remainder.
    pub sheets_external: u32,
    /// Width-constrained portion of `sheets_external` cut for sliding doors.
    pub sheets_external_doors: u32,
    /// Edge band before the waste allowance, in meters.
    pub edge_band_m: f64,
    /// Edge band including the waste allowance, in meters.
    pub edge_band_with_waste_m: f64,
}

/// Quantify sheets and edge band from the corrected totals.
pub fn quantify(tally: &Tally, book: &PriceBook) -> MaterialQuantities {
    let sheets_backing = sheets_for_area(tally.area6_m2, book.sheet_area_m2);
    let sheets_internal = sheets_for_area(tally.area15_internal_m2, book.sheet_area_m2);

    // Sliding doors cut widthwise: leaves per sheet is floor(sheet width /
    // leaf width), never below one.
    let sheets_external_doors = match tally.sliding_door_width_mm {
        Some(leaf_width_mm) if tally.sliding_doors > 0 && leaf_width_mm > 0.0 => {
            let leaves_per_sheet = ((book.sheet_width_mm / leaf_width_mm) as u32).max(1);
            tally.sliding_doors.div_ceil(leaves_per_sheet)
        }
        _ => 0,
    };

    // The rest of the external pool (hinged doors, visible sides, external
    // drawer fronts) is cut by area.
    let remainder_area = (tally.area15_external_m2 - tally.sliding_door_area_m2).max(0.0);
    let sheets_external = sheets_external_doors + sheets_for_area(remainder_area, book.sheet_area_m2);

    let edge_band_m = tally.edge_band_m;
    let edge_band_with_waste_m = edge_band_m * (1.0 + book.edge_band_waste_percent / 100.0);

    MaterialQuantities {
        sheets_backing,
        sheets_internal,
        sheets_external,
        sheets_external_doors,
        edge_band_m,
        edge_band_with_waste_m,
    }
}

/// Integer sheets needed to cover an area; zero or negative area needs none.
fn sheets_for_area(area_m2: f64, sheet_area_m2: f64) -> u32 {
    if area_m2 <= 0.0 {
        return 0;
    }
    (area_m2 / sheet_area_m2).ceil() as u32
}
