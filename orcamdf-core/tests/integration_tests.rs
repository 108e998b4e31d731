//! Integration tests for the quote estimation engine.
//!
//! These exercise the full pipeline through the public API: geometry,
//! adjacency correction, quantification and costing together, plus the
//! file-based entry point. Scenario values are hand-computed from the
//! documented heuristics.

use orcamdf_core::{
    estimate, estimate_project_file, Dimensions, DoorKind, ModuleHardware, ModuleInternals,
    ModuleSpec, Project, QuoteResult, Settings, ShelfMountDevice, SlideKind,
};
use pretty_assertions::assert_eq;

/// 1.0 x 2.0 x 0.5 m hinged cabinet: 2 doors, 2 shelves, 1 drawer.
fn kitchen_cabinet() -> ModuleSpec {
    ModuleSpec {
        id: "m1".to_string(),
        name: "Armário de cozinha".to_string(),
        dimensions: Dimensions {
            width_mm: 1000.0,
            height_mm: 2000.0,
            depth_mm: 500.0,
        },
        materials: orcamdf_core::ModuleMaterials {
            visible_sides: 1,
            ..Default::default()
        },
        internals: ModuleInternals {
            shelves: 2,
            shelf_mount_device: Some(ShelfMountDevice::Minifix),
            drawers: 1,
            drawer_front_height_mm: 200.0,
            drawer_slide_type: SlideKind::Telescopic,
            ..Default::default()
        },
        hardware: ModuleHardware {
            door_type: DoorKind::Hinged,
            door_count: 2,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// 1.82 x 2.4 x 0.6 m wardrobe with two sliding doors.
fn sliding_wardrobe() -> ModuleSpec {
    ModuleSpec {
        id: "w1".to_string(),
        name: "Guarda-roupa".to_string(),
        dimensions: Dimensions {
            width_mm: 1820.0,
            height_mm: 2400.0,
            depth_mm: 600.0,
        },
        hardware: ModuleHardware {
            door_type: DoorKind::Sliding,
            door_count: 2,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn find_item<'a>(result: &'a QuoteResult, name: &str) -> Option<&'a orcamdf_core::MaterialItem> {
    result.material_list.iter().find(|item| item.name == name)
}

// ==================== Full scenario, hand-computed ====================

#[test]
fn test_kitchen_cabinet_full_quote() {
    let result = estimate(&[kitchen_cabinet()], &Settings::default());

    // Areas: structural 4.0 + doors 4.0 + fronts 0.2 = 8.2 m² of 15mm,
    // back 2.0 + drawer bottom 0.5 = 2.5 m² of 6mm. External pool is
    // doors 4.0 + one visible side 1.0 = 5.0; internal remainder 3.2.
    // Sheets at 5.08 m²: 1 internal, 1 external, 1 backing.
    // Hardware: 4 hinges, 1 slide pair, 8 Minifix, 37 screws, 2.0 m handle.
    // Edge band 18.4 m +5% = 19.32 m. Labor 3.9 h.
    let expected = vec![
        ("Chapa MDF 15mm (Interna - Branco)", 1.0, 280.0),
        ("Chapa MDF 15mm (Externa - Cor)", 1.0, 380.0),
        ("Chapa MDF 6mm (Fundo)", 1.0, 150.0),
        ("Dobradiça", 4.0, 60.0),
        ("Corrediça Telescópica", 1.0, 40.0),
        ("Puxador (perfil)", 2.0, 50.0),
        ("Parafusos de Montagem", 37.0, 11.1),
        ("Fita de Borda", 19.32, 86.94),
        ("Dispositivo Minifix", 8.0, 16.0),
    ];
    let actual: Vec<(&str, f64, f64)> = result
        .material_list
        .iter()
        .map(|item| (item.name.as_str(), item.quantity, item.total_price))
        .collect();
    assert_eq!(actual, expected);

    // Material 1074.04 + labor 3.9*80 = 312.0
    assert_eq!(result.labor_cost, 312.0);
    assert_eq!(result.total_cost, 1386.04);
    // 50% margin
    assert_eq!(result.suggested_price, 2079.06);
    assert_eq!(result.production_time_days, 1);
    assert_eq!(result.observations[0], "Área total 15mm: 8.20 m², 6mm: 2.50 m².");
}

// ==================== Engine invariants ====================

#[test]
fn test_costs_non_negative_and_margin_applied() {
    let settings = Settings::default();
    for modules in [
        vec![],
        vec![kitchen_cabinet()],
        vec![sliding_wardrobe()],
        vec![kitchen_cabinet(), sliding_wardrobe()],
    ] {
        let result = estimate(&modules, &settings);
        assert!(result.total_cost >= 0.0);
        assert!(result.suggested_price >= result.total_cost);
    }
}

#[test]
fn test_idempotent_byte_identical() {
    let modules = vec![kitchen_cabinet(), sliding_wardrobe()];
    let settings = Settings::default();

    let first = serde_json::to_string(&estimate(&modules, &settings)).expect("Should encode");
    let second = serde_json::to_string(&estimate(&modules, &settings)).expect("Should encode");
    assert_eq!(first, second);
}

#[test]
fn test_more_shelves_never_cheaper() {
    let settings = Settings::default();
    let mut previous = 0.0;
    for shelves in 0..8 {
        let mut module = kitchen_cabinet();
        module.internals.shelves = shelves;
        let result = estimate(&[module], &settings);
        assert!(
            result.total_cost >= previous,
            "Cost dropped when shelves went to {}",
            shelves
        );
        previous = result.total_cost;
    }
}

#[test]
fn test_adjacent_modules_share_one_partition() {
    // Two bare 1.0 x 2.0 x 0.5 m boxes, both fully internal. Each counts
    // 3.0 m² of 15mm; the shared 1.0 m² partition is deducted once, so the
    // internal pool is 5.0 m² -> 2 sheets of 2.5 m², not 3.
    let mut settings = Settings::default();
    settings.sheet_area_m2 = 2.5;

    let bare = |id: &str| ModuleSpec {
        id: id.to_string(),
        dimensions: Dimensions {
            width_mm: 1000.0,
            height_mm: 2000.0,
            depth_mm: 500.0,
        },
        hardware: ModuleHardware {
            door_type: DoorKind::None,
            ..Default::default()
        },
        ..Default::default()
    };

    let result = estimate(&[bare("a"), bare("b")], &settings);
    let sheets = find_item(&result, "Chapa MDF 15mm (Interna - Branco)").expect("Has sheet line");
    assert_eq!(sheets.quantity, 2.0);
}

#[test]
fn test_sliding_doors_need_one_sheet_each() {
    // Two 930mm leaves against an 1850mm sheet: one leaf per sheet.
    let result = estimate(&[sliding_wardrobe()], &Settings::default());

    let external = find_item(&result, "Chapa MDF 15mm (Externa - Cor)").expect("Has sheet line");
    assert_eq!(external.quantity, 2.0);

    // Rail hardware follows the module width once, regardless of leaf count.
    assert_eq!(find_item(&result, "Sistema Porta de Correr (kit)").expect("Has kit").quantity, 1.0);
    assert_eq!(find_item(&result, "Trilho Superior").expect("Has top rail").quantity, 1.82);
    assert_eq!(find_item(&result, "Trilho Inferior").expect("Has bottom rail").quantity, 1.82);
    // Sliding doors take no hinges and no handle profile.
    assert!(find_item(&result, "Dobradiça").is_none());
    assert!(find_item(&result, "Puxador (perfil)").is_none());
}

#[test]
fn test_all_prices_rounded_to_cents() {
    let result = estimate(&[kitchen_cabinet(), sliding_wardrobe()], &Settings::default());

    let is_cents = |v: f64| ((v * 100.0).round() - v * 100.0).abs() < 1e-6;
    assert!(is_cents(result.total_cost));
    assert!(is_cents(result.suggested_price));
    assert!(is_cents(result.labor_cost));
    for item in &result.material_list {
        assert!(is_cents(item.total_price), "{} not rounded", item.name);
        if item.unit == "m" {
            assert!(is_cents(item.quantity), "{} quantity not rounded", item.name);
        } else {
            assert_eq!(item.quantity.fract(), 0.0, "{} quantity not whole", item.name);
        }
    }
}

#[test]
fn test_zero_modules_zero_quote() {
    let result = estimate(&[], &Settings::default());
    assert_eq!(result.total_cost, 0.0);
    assert_eq!(result.suggested_price, 0.0);
    assert_eq!(result.labor_cost, 0.0);
    assert_eq!(result.production_time_days, 1);
    assert!(result.material_list.is_empty());
}

#[test]
fn test_drawer_front_flag_moves_area_between_pools() {
    let mut module = kitchen_cabinet();
    module.internals.drawers = 2;
    module.internals.drawer_front_height_mm = 300.0;

    module.internals.drawer_fronts_external = false;
    let internal_fronts = estimate(&[module.clone()], &Settings::default());

    module.internals.drawer_fronts_external = true;
    let external_fronts = estimate(&[module], &Settings::default());

    // The total 15mm area is unchanged — only the finish pool moves.
    assert_eq!(internal_fronts.observations[0], external_fronts.observations[0]);
    // Externally finished fronts also take handle profile.
    let handle_internal = find_item(&internal_fronts, "Puxador (perfil)").expect("Has handles");
    let handle_external = find_item(&external_fronts, "Puxador (perfil)").expect("Has handles");
    assert!(handle_external.quantity > handle_internal.quantity);
}

// ==================== File pipeline ====================

#[test]
fn test_estimate_project_file_round_trip() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join("project.json");

    let project = Project {
        id: "p1".to_string(),
        project_name: "Quarto Casal".to_string(),
        client_name: "João".to_string(),
        modules: vec![sliding_wardrobe()],
        ..Default::default()
    };
    orcamdf_core::storage::save_project(&path, &project).expect("Should save");

    let result = estimate_project_file(&path, &Settings::default()).expect("Should estimate");
    assert_eq!(result.description, "Orçamento gerado para Quarto Casal - João.");
    assert!(result.total_cost > 0.0);
}

#[test]
fn test_estimate_project_file_rejects_invalid_dimensions() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join("project.json");

    let mut module = kitchen_cabinet();
    module.dimensions.width_mm = 0.0;
    let project = Project {
        modules: vec![module],
        ..Default::default()
    };
    orcamdf_core::storage::save_project(&path, &project).expect("Should save");

    let result = estimate_project_file(&path, &Settings::default());
    assert!(result.is_err());
}
