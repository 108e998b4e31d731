//! Quote estimation engine.
//!
//! Pure function over a module list and a price book. Four passes, data
//! flowing strictly left to right:
//!
//! 1. geometry & classification — per-module areas, hardware and labor into
//!    a shared [`Tally`];
//! 2. adjacency correction — shared partitions between consecutive modules
//!    subtracted once;
//! 3. quantification — areas to discrete sheet counts and edge-band meters;
//! 4. costing & rollup — the priced [`QuoteResult`].
//!
//! The passes never re-run each other: classification happens once, the
//! correction adjusts the accumulators, and quantification reads the
//! corrected totals.

mod adjacency;
mod costing;
mod geometry;
mod quantify;

pub use quantify::MaterialQuantities;

use crate::model::{ModuleSpec, Project, QuoteResult, Settings};

/// Running totals accumulated over the module list.
///
/// Areas are in m², linear quantities in meters. Linear values stay
/// unrounded while accumulating; rounding happens once at output time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    /// All 15mm panel area, external and internal finishes together.
    pub area15_m2: f64,
    /// 15mm area finished with the external color.
    pub area15_external_m2: f64,
    /// 15mm area finished with the internal color.
    pub area15_internal_m2: f64,
    /// 6mm backing area: back panels and drawer bottoms.
    pub area6_m2: f64,
    /// Edge band, before the waste allowance.
    pub edge_band_m: f64,
    pub hinges: u32,
    pub slides_telescopic: u32,
    pub slides_concealed: u32,
    /// One sliding-door system kit per sliding-door module.
    pub rail_kits: u32,
    pub rail_top_m: f64,
    pub rail_bottom_m: f64,
    /// Total sliding-door leaves across all modules.
    pub sliding_doors: u32,
    /// Panel area of all sliding-door leaves.
    pub sliding_door_area_m2: f64,
    /// Representative leaf width in mm, from the first sliding-door module.
    pub sliding_door_width_mm: Option<f64>,
    /// Handle profile length.
    pub handle_m: f64,
    pub devices_screw: u32,
    pub devices_vb: u32,
    pub devices_minifix: u32,
    pub devices_rafix: u32,
    pub assembly_screws: u32,
    pub labor_hours: f64,
}

/// Estimate a quote for an ordered module list against a price book.
///
/// Total over its documented input domain: degenerate inputs (no modules,
/// zero dimensions) yield a zero-cost result rather than an error. Module
/// order matters — consecutive modules are treated as physically adjacent.
pub fn estimate(modules: &[ModuleSpec], settings: &Settings) -> QuoteResult {
    let book = settings.resolve();

    let mut tally = Tally::default();
    for module in modules {
        geometry::accumulate_module(&mut tally, module, &book);
    }
    adjacency::correct_shared_panels(&mut tally, modules);

    tracing::debug!(
        area15_m2 = tally.area15_m2,
        area6_m2 = tally.area6_m2,
        labor_hours = tally.labor_hours,
        "geometry passes complete"
    );

    let quantities = quantify::quantify(&tally, &book);
    costing::price_quote(&tally, &quantities, &book, modules.len())
}

/// Estimate a project, composing the description from its client details.
pub fn estimate_project(project: &Project, settings: &Settings) -> QuoteResult {
    let mut result = estimate(&project.modules, settings);
    result.description = format!(
        "Orçamento gerado para {} - {}.",
        project.project_name, project.client_name
    );
    result
}
