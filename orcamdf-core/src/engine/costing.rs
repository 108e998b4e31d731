//! Costing and rollup pass.
//!
//! Prices every quantified category against the resolved price book and
//! assembles the final [`QuoteResult`]: material list in a fixed category
//! order, cost totals, suggested price, production time and the audit
//! observations.

use crate::config::{round, WORK_HOURS_PER_DAY};
use crate::model::{MaterialItem, PriceBook, QuoteResult};

use super::{MaterialQuantities, Tally};

/// Price the quantities and assemble the quote result.
pub fn price_quote(
    tally: &Tally,
    quantities: &MaterialQuantities,
    book: &PriceBook,
    module_count: usize,
) -> QuoteResult {
    let cost_sheets_internal = quantities.sheets_internal as f64 * book.price_sheet_plain_15;
    let cost_sheets_external = quantities.sheets_external as f64 * book.price_sheet_color_15;
    let cost_sheets_backing = quantities.sheets_backing as f64 * book.price_sheet_backing_6;
    let cost_hinges = tally.hinges as f64 * book.price_hinge;
    let cost_slides_telescopic = tally.slides_telescopic as f64 * book.price_slide_telescopic;
    let cost_slides_concealed = tally.slides_concealed as f64 * book.price_slide_concealed;
    let cost_rail_kits = tally.rail_kits as f64 * book.price_rail_kit;
    let cost_rail_top = tally.rail_top_m * book.price_rail_top_per_m;
    let cost_rail_bottom = tally.rail_bottom_m * book.price_rail_bottom_per_m;
    let cost_handles = tally.handle_m * book.price_handle_per_m;
    let cost_assembly_screws = tally.assembly_screws as f64 * book.price_assembly_screw;
    let cost_edge_band = quantities.edge_band_with_waste_m * book.price_edge_band_per_m;
    let cost_devices_screw = tally.devices_screw as f64 * book.price_device_screw;
    let cost_devices_vb = tally.devices_vb as f64 * book.price_device_vb;
    let cost_devices_minifix = tally.devices_minifix as f64 * book.price_device_minifix;
    let cost_devices_rafix = tally.devices_rafix as f64 * book.price_device_rafix;

    let material_cost = cost_sheets_internal
        + cost_sheets_external
        + cost_sheets_backing
        + cost_hinges
        + cost_slides_telescopic
        + cost_slides_concealed
        + cost_rail_kits
        + cost_rail_top
        + cost_rail_bottom
        + cost_handles
        + cost_assembly_screws
        + cost_edge_band
        + cost_devices_screw
        + cost_devices_vb
        + cost_devices_minifix
        + cost_devices_rafix
        + book.shipping_cost;

    let labor_cost = tally.labor_hours * book.labor_hourly_rate;
    let total_cost = material_cost + labor_cost;
    let suggested_price =
        round::to_cents(total_cost * (1.0 + book.profit_margin_percent / 100.0));
    let production_time_days = (tally.labor_hours / WORK_HOURS_PER_DAY).ceil().max(1.0) as u32;

    // Fixed category order: panels, hinges, slides, rail hardware, handles,
    // fasteners, edge band, shelf devices, shipping. Zero-quantity and
    // zero-cost lines are skipped.
    let mut material_list = Vec::new();
    push_count(
        &mut material_list,
        "Chapa MDF 15mm (Interna - Branco)",
        quantities.sheets_internal,
        "chapa",
        book.price_sheet_plain_15,
    );
    push_count(
        &mut material_list,
        "Chapa MDF 15mm (Externa - Cor)",
        quantities.sheets_external,
        "chapa",
        book.price_sheet_color_15,
    );
    push_count(
        &mut material_list,
        "Chapa MDF 6mm (Fundo)",
        quantities.sheets_backing,
        "chapa",
        book.price_sheet_backing_6,
    );
    push_count(&mut material_list, "Dobradiça", tally.hinges, "un", book.price_hinge);
    push_count(
        &mut material_list,
        "Corrediça Telescópica",
        tally.slides_telescopic,
        "par",
        book.price_slide_telescopic,
    );
    push_count(
        &mut material_list,
        "Corrediça Oculta",
        tally.slides_concealed,
        "par",
        book.price_slide_concealed,
    );
    push_count(
        &mut material_list,
        "Sistema Porta de Correr (kit)",
        tally.rail_kits,
        "un",
        book.price_rail_kit,
    );
    push_meters(
        &mut material_list,
        "Trilho Superior",
        tally.rail_top_m,
        book.price_rail_top_per_m,
    );
    push_meters(
        &mut material_list,
        "Trilho Inferior",
        tally.rail_bottom_m,
        book.price_rail_bottom_per_m,
    );
    push_meters(
        &mut material_list,
        "Puxador (perfil)",
        tally.handle_m,
        book.price_handle_per_m,
    );
    push_count(
        &mut material_list,
        "Parafusos de Montagem",
        tally.assembly_screws,
        "un",
        book.price_assembly_screw,
    );
    push_meters(
        &mut material_list,
        "Fita de Borda",
        quantities.edge_band_with_waste_m,
        book.price_edge_band_per_m,
    );
    push_count(
        &mut material_list,
        "Parafuso de Prateleira",
        tally.devices_screw,
        "un",
        book.price_device_screw,
    );
    push_count(&mut material_list, "Dispositivo VB", tally.devices_vb, "un", book.price_device_vb);
    push_count(
        &mut material_list,
        "Dispositivo Minifix",
        tally.devices_minifix,
        "un",
        book.price_device_minifix,
    );
    push_count(
        &mut material_list,
        "Dispositivo Rafix",
        tally.devices_rafix,
        "un",
        book.price_device_rafix,
    );
    push_line(&mut material_list, "Frete", 1.0, "un", book.shipping_cost, book.shipping_cost);

    let description = format!("Orçamento estimado para {} módulo(s).", module_count);

    let mut observations = Vec::new();
    observations.push(format!(
        "Área total 15mm: {:.2} m², 6mm: {:.2} m².",
        tally.area15_m2, tally.area6_m2
    ));
    observations.push(format!(
        "Horas estimadas de produção: {:.2}h.",
        tally.labor_hours
    ));
    observations.push(format!(
        "Chapas estimadas (15mm): {}, (6mm): {}.",
        quantities.sheets_internal + quantities.sheets_external,
        quantities.sheets_backing
    ));
    observations.push(format!(
        "Fita de borda estimada: {:.2} m (+{}% desperdício) = {:.2} m (R$ {:.2}).",
        quantities.edge_band_m,
        book.edge_band_waste_percent,
        quantities.edge_band_with_waste_m,
        cost_edge_band
    ));
    if tally.sliding_doors > 0 {
        if let Some(leaf_width_mm) = tally.sliding_door_width_mm {
            observations.push(format!(
                "Portas de correr: {} folha(s) de {:.0} mm, {} chapa(s) dedicada(s).",
                tally.sliding_doors, leaf_width_mm, quantities.sheets_external_doors
            ));
        }
    }

    QuoteResult {
        total_cost: round::to_cents(total_cost),
        suggested_price,
        production_time_days,
        material_list,
        labor_cost: round::to_cents(labor_cost),
        description,
        observations,
    }
}

/// Push a counted line (sheets, units, pairs).
fn push_count(list: &mut Vec<MaterialItem>, name: &str, quantity: u32, unit: &str, unit_price: f64) {
    let total = quantity as f64 * unit_price;
    push_line(list, name, quantity as f64, unit, unit_price, total);
}

/// Push a meter-denominated line; the quantity is rounded at output only.
fn push_meters(list: &mut Vec<MaterialItem>, name: &str, meters: f64, unit_price: f64) {
    let total = meters * unit_price;
    push_line(list, name, round::to_cents(meters), "m", unit_price, total);
}

/// Append the line if both quantity and rounded total are strictly positive.
fn push_line(
    list: &mut Vec<MaterialItem>,
    name: &str,
    quantity: f64,
    unit: &str,
    unit_price: f64,
    total: f64,
) {
    let total_price = round::to_cents(total);
    if quantity <= 0.0 || total_price <= 0.0 {
        return;
    }
    list.push(MaterialItem {
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
        unit_price,
        total_price,
    });
}
