//! Geometry and classification pass.
//!
//! Decomposes each module into panel areas, splits 15mm area between the
//! external and internal finish, and tallies hardware and labor. Everything
//! accumulates into the shared [`Tally`]; no per-module result is exposed.

use crate::config::{
    mm_to_m, DEVICES_PER_SHELF, HINGES_PER_DOOR, LABOR_BASE_HOURS, LABOR_HOURS_PER_CLOTHES_RAIL,
    LABOR_HOURS_PER_DOOR, LABOR_HOURS_PER_DRAWER, LABOR_HOURS_PER_SHELF,
    LABOR_HOURS_PER_SHOE_SHELF, SCREWS_BASE_PER_MODULE, SCREWS_PER_DOOR, SCREWS_PER_DRAWER,
    SCREWS_PER_SHELF,
};
use crate::model::{DoorKind, ModuleSpec, PriceBook, ShelfMountDevice, SlideKind};

use super::Tally;

/// Accumulate one module's panels, hardware and labor into the tally.
pub fn accumulate_module(tally: &mut Tally, module: &ModuleSpec, book: &PriceBook) {
    let w = module.dimensions.width_m();
    let h = module.dimensions.height_m();
    let d = module.dimensions.depth_m();

    let shelves = module.internals.shelves;
    let drawers = module.internals.drawers;
    let doors = module.effective_doors();

    // Structural 15mm panels: two sides, top and bottom, shelves.
    let sides_area = 2.0 * h * d;
    let top_bottom_area = 2.0 * w * d;
    let shelves_area = shelves as f64 * w * d;

    // 6mm backing: back panel plus drawer bottoms.
    let back_area = w * h;
    let drawer_bottoms_area = drawers as f64 * w * d;

    let doors_area = door_area(module, book);

    let drawer_front_height = mm_to_m(module.internals.drawer_front_height_mm);
    let drawer_fronts_area = drawers as f64 * w * drawer_front_height;
    let fronts_external = module.internals.drawer_fronts_external;

    // External finish covers doors, the lateral faces marked visible and,
    // when flagged, the drawer fronts. Everything else is internal.
    let external_sides_area = module.visible_side_panels() as f64 * h * d;
    let area15 = sides_area + top_bottom_area + shelves_area + doors_area + drawer_fronts_area;
    let external_area = doors_area
        + external_sides_area
        + if fronts_external { drawer_fronts_area } else { 0.0 };
    let internal_area = (area15 - external_area).max(0.0);

    tally.area15_m2 += area15;
    tally.area15_external_m2 += external_area;
    tally.area15_internal_m2 += internal_area;
    tally.area6_m2 += back_area + drawer_bottoms_area;

    // Edge band: door and drawer-front perimeters, one front lip per shelf,
    // one vertical edge per visible lateral face. The visible-side edge uses
    // the raw stored count, not the side-panel clamp.
    let door_edge = doors as f64 * 2.0 * (w + h);
    let drawer_edge = drawers as f64 * 2.0 * (w + drawer_front_height);
    let shelf_edge = shelves as f64 * w;
    let visible_edge = module.materials.visible_sides as f64 * h;
    tally.edge_band_m += door_edge + drawer_edge + shelf_edge + visible_edge;

    // Door hardware. Rail meters accumulate once per sliding-door module
    // (track length is the module width), independent of the leaf count.
    match module.hardware.door_type {
        DoorKind::Hinged => tally.hinges += HINGES_PER_DOOR * doors,
        DoorKind::Sliding if doors > 0 => {
            tally.sliding_doors += doors;
            tally.sliding_door_area_m2 += doors_area;
            tally.rail_kits += 1;
            tally.rail_top_m += w;
            tally.rail_bottom_m += w;
            if tally.sliding_door_width_mm.is_none() {
                tally.sliding_door_width_mm =
                    Some(module.dimensions.width_mm / doors as f64 + book.sliding_door_overlap_mm);
            }
        }
        _ => {}
    }

    // Handle profile runs the module width, once per hinged door and per
    // externally finished drawer front.
    let external_drawers = if fronts_external { drawers } else { 0 };
    tally.handle_m += w * (module.hinged_doors() + external_drawers) as f64;

    match module.internals.drawer_slide_type {
        SlideKind::Telescopic => tally.slides_telescopic += drawers,
        SlideKind::Concealed => tally.slides_concealed += drawers,
    }

    let devices = DEVICES_PER_SHELF * shelves;
    match module.shelf_device() {
        ShelfMountDevice::Screw => tally.devices_screw += devices,
        ShelfMountDevice::Vb => tally.devices_vb += devices,
        ShelfMountDevice::Minifix => tally.devices_minifix += devices,
        ShelfMountDevice::Rafix => tally.devices_rafix += devices,
    }

    tally.assembly_screws += SCREWS_BASE_PER_MODULE
        + SCREWS_PER_SHELF * shelves
        + SCREWS_PER_DRAWER * drawers
        + SCREWS_PER_DOOR * doors;

    tally.labor_hours += LABOR_BASE_HOURS
        + LABOR_HOURS_PER_SHELF * shelves as f64
        + LABOR_HOURS_PER_DRAWER * drawers as f64
        + LABOR_HOURS_PER_DOOR * doors as f64
        + LABOR_HOURS_PER_CLOTHES_RAIL * module.internals.clothes_rails as f64
        + LABOR_HOURS_PER_SHOE_SHELF * module.internals.shoe_shelves as f64;
}

/// Total door panel area for one module.
///
/// Sliding leaves overlap their neighbor by the configured transpasse and
/// lose the track-kit deduction in height (clamped at zero); hinged doors
/// span the full module face; a door-less module contributes nothing.
fn door_area(module: &ModuleSpec, book: &PriceBook) -> f64 {
    let doors = module.effective_doors();
    if doors == 0 {
        return 0.0;
    }
    let w = module.dimensions.width_m();
    let h = module.dimensions.height_m();
    match module.hardware.door_type {
        DoorKind::Sliding => {
            let leaf_width = w / doors as f64 + mm_to_m(book.sliding_door_overlap_mm);
            let leaf_height = (h - mm_to_m(book.door_height_deduction_mm)).max(0.0);
            doors as f64 * leaf_width * leaf_height
        }
        DoorKind::Hinged => doors as f64 * w * h,
        DoorKind::None => 0.0,
    }
}
