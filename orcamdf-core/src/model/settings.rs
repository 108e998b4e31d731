//! Price book configuration and its resolved view.

use serde::{Deserialize, Serialize};

use crate::config::{
    FALLBACK_DOOR_HEIGHT_DEDUCTION_MM, FALLBACK_SHEET_AREA_M2, FALLBACK_SHEET_WIDTH_MM,
    FALLBACK_SLIDING_DOOR_OVERLAP_MM,
};
use crate::model::{ShelfMountDevice, SlideKind};

/// User-configurable price book: unit prices and cutting constants.
///
/// All monetary values are in the shop currency per the stated unit. Missing
/// fields deserialize to the shipped defaults; the conditional fallbacks
/// (colored sheet price, sheet geometry, cutting constants) are applied once
/// by [`Settings::resolve`] before estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Price per plain (white) 15mm MDF sheet.
    pub price_sheet_plain_15: f64,
    /// Price per colored 15mm MDF sheet. Falls back to the plain price when
    /// unset or zero.
    pub price_sheet_color_15: Option<f64>,
    /// Price per 6mm backing sheet.
    pub price_sheet_backing_6: f64,
    /// Usable area of one sheet, in m².
    pub sheet_area_m2: f64,
    /// Physical sheet width in mm, the constraint for sliding-door cuts.
    pub sheet_width_mm: f64,
    /// Price per hinge.
    pub price_hinge: f64,
    /// Price per pair of telescopic slides.
    pub price_slide_telescopic: f64,
    /// Price per pair of concealed slides.
    pub price_slide_concealed: f64,
    /// Price per sliding-door system kit.
    pub price_rail_kit: f64,
    /// Price per meter of top track.
    pub price_rail_top_per_m: f64,
    /// Price per meter of bottom track.
    pub price_rail_bottom_per_m: f64,
    /// Price per meter of handle profile.
    pub price_handle_per_m: f64,
    /// Price per meter of edge band.
    pub price_edge_band_per_m: f64,
    /// Waste allowance applied to edge band, in percent.
    pub edge_band_waste_percent: f64,
    /// Price per shelf screw.
    pub price_device_screw: f64,
    /// Price per VB device.
    pub price_device_vb: f64,
    /// Price per Minifix device.
    pub price_device_minifix: f64,
    /// Price per Rafix device.
    pub price_device_rafix: f64,
    /// Price per general assembly screw.
    pub price_assembly_screw: f64,
    /// Labor cost per hour.
    pub labor_hourly_rate: f64,
    /// Profit margin over total cost, in percent.
    pub profit_margin_percent: f64,
    /// Flat shipping cost per quote.
    pub shipping_cost: f64,
    /// Height removed from sliding doors, in mm (floor/ceiling gap plus
    /// track kit).
    pub door_height_deduction_mm: f64,
    /// Overlap between adjacent sliding doors, in mm.
    pub sliding_door_overlap_mm: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            price_sheet_plain_15: 280.0,
            price_sheet_color_15: Some(380.0),
            price_sheet_backing_6: 150.0,
            sheet_area_m2: 5.08,
            sheet_width_mm: 1850.0,
            price_hinge: 15.0,
            price_slide_telescopic: 40.0,
            price_slide_concealed: 120.0,
            price_rail_kit: 180.0,
            price_rail_top_per_m: 60.0,
            price_rail_bottom_per_m: 50.0,
            price_handle_per_m: 25.0,
            price_edge_band_per_m: 4.5,
            edge_band_waste_percent: 5.0,
            price_device_screw: 0.50,
            price_device_vb: 1.50,
            price_device_minifix: 2.00,
            price_device_rafix: 1.80,
            price_assembly_screw: 0.30,
            labor_hourly_rate: 80.0,
            profit_margin_percent: 50.0,
            shipping_cost: 0.0,
            door_height_deduction_mm: 65.0,
            sliding_door_overlap_mm: 20.0,
        }
    }
}

impl Settings {
    /// Resolve every optional field and fallback into a concrete price book.
    ///
    /// Called once at the start of estimation so the pricing pass never has
    /// to re-check fallbacks.
    pub fn resolve(&self) -> PriceBook {
        PriceBook {
            price_sheet_plain_15: self.price_sheet_plain_15,
            price_sheet_color_15: self
                .price_sheet_color_15
                .filter(|price| *price != 0.0)
                .unwrap_or(self.price_sheet_plain_15),
            price_sheet_backing_6: self.price_sheet_backing_6,
            sheet_area_m2: positive_or(self.sheet_area_m2, FALLBACK_SHEET_AREA_M2),
            sheet_width_mm: positive_or(self.sheet_width_mm, FALLBACK_SHEET_WIDTH_MM),
            price_hinge: self.price_hinge,
            price_slide_telescopic: self.price_slide_telescopic,
            price_slide_concealed: self.price_slide_concealed,
            price_rail_kit: self.price_rail_kit,
            price_rail_top_per_m: self.price_rail_top_per_m,
            price_rail_bottom_per_m: self.price_rail_bottom_per_m,
            price_handle_per_m: self.price_handle_per_m,
            price_edge_band_per_m: self.price_edge_band_per_m,
            edge_band_waste_percent: self.edge_band_waste_percent,
            price_device_screw: self.price_device_screw,
            price_device_vb: self.price_device_vb,
            price_device_minifix: self.price_device_minifix,
            price_device_rafix: self.price_device_rafix,
            price_assembly_screw: self.price_assembly_screw,
            labor_hourly_rate: self.labor_hourly_rate,
            profit_margin_percent: self.profit_margin_percent,
            shipping_cost: self.shipping_cost,
            door_height_deduction_mm: positive_or(
                self.door_height_deduction_mm,
                FALLBACK_DOOR_HEIGHT_DEDUCTION_MM,
            ),
            sliding_door_overlap_mm: positive_or(
                self.sliding_door_overlap_mm,
                FALLBACK_SLIDING_DOOR_OVERLAP_MM,
            ),
        }
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        fallback
    }
}

/// Fully resolved price book used by the estimation passes.
///
/// Same fields as [`Settings`] with every fallback applied, so lookups are
/// plain field reads.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBook {
    pub price_sheet_plain_15: f64,
    pub price_sheet_color_15: f64,
    pub price_sheet_backing_6: f64,
    pub sheet_area_m2: f64,
    pub sheet_width_mm: f64,
    pub price_hinge: f64,
    pub price_slide_telescopic: f64,
    pub price_slide_concealed: f64,
    pub price_rail_kit: f64,
    pub price_rail_top_per_m: f64,
    pub price_rail_bottom_per_m: f64,
    pub price_handle_per_m: f64,
    pub price_edge_band_per_m: f64,
    pub edge_band_waste_percent: f64,
    pub price_device_screw: f64,
    pub price_device_vb: f64,
    pub price_device_minifix: f64,
    pub price_device_rafix: f64,
    pub price_assembly_screw: f64,
    pub labor_hourly_rate: f64,
    pub profit_margin_percent: f64,
    pub shipping_cost: f64,
    pub door_height_deduction_mm: f64,
    pub sliding_door_overlap_mm: f64,
}

impl PriceBook {
    /// Unit price for a shelf fixing device.
    pub fn device_price(&self, device: ShelfMountDevice) -> f64 {
        match device {
            ShelfMountDevice::Screw => self.price_device_screw,
            ShelfMountDevice::Vb => self.price_device_vb,
            ShelfMountDevice::Minifix => self.price_device_minifix,
            ShelfMountDevice::Rafix => self.price_device_rafix,
        }
    }

    /// Pair price for a drawer slide type.
    pub fn slide_price(&self, kind: SlideKind) -> f64 {
        match kind {
            SlideKind::Telescopic => self.price_slide_telescopic,
            SlideKind::Concealed => self.price_slide_concealed,
        }
    }
}
