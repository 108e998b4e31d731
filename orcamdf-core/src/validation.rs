//! Advisory validation for module lists and price books.
//!
//! The estimation engine is total over its documented input domain and never
//! rejects values — it clamps and floors instead. These checks exist for
//! callers that want to surface data-entry problems before quoting: errors
//! mark inputs no sensible quote can come from, warnings mark suspicious but
//! quotable data.

use crate::error::{QuoteError, Result};
use crate::model::{DoorKind, ModuleSpec, Settings};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate all modules of a project.
///
/// An empty list is valid — the engine quotes it as an empty result.
pub fn validate_modules(modules: &[ModuleSpec]) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if modules.is_empty() {
        result.add_warning("No modules: the quote will be empty");
    }

    for (idx, module) in modules.iter().enumerate() {
        result.merge(validate_module(module, idx + 1));
    }

    result
}

/// Validate a single module.
pub fn validate_module(module: &ModuleSpec, number: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let label = if module.name.is_empty() {
        format!("Module {}", number)
    } else {
        format!("Module {} ({})", number, module.name)
    };

    let dims = &module.dimensions;
    if dims.width_mm <= 0.0 || dims.height_mm <= 0.0 || dims.depth_mm <= 0.0 {
        result.add_error(format!(
            "{}: Invalid dimensions ({}x{}x{} mm)",
            label, dims.width_mm, dims.height_mm, dims.depth_mm
        ));
    }

    if module.hardware.door_type == DoorKind::None && module.hardware.door_count > 0 {
        result.add_warning(format!(
            "{}: Door count {} is ignored for a door-less module",
            label, module.hardware.door_count
        ));
    }

    if module.hardware.door_type != DoorKind::None && module.hardware.door_count == 0 {
        result.add_warning(format!("{}: Door type set but door count is zero", label));
    }

    if module.internals.drawers > 0 && module.internals.drawer_front_height_mm <= 0.0 {
        result.add_warning(format!(
            "{}: {} drawer(s) with no front height; fronts will have zero area",
            label, module.internals.drawers
        ));
    }

    if module.materials.visible_sides > 4 {
        result.add_warning(format!(
            "{}: Visible side count {} exceeds the 0-4 range",
            label, module.materials.visible_sides
        ));
    }

    result
}

/// Validate a price book.
///
/// The engine propagates nonsensical prices rather than guessing intent, so
/// negative values are only warnings here.
pub fn validate_settings(settings: &Settings) -> ValidationResult {
    let mut result = ValidationResult::ok();

    let prices = [
        ("price_sheet_plain_15", settings.price_sheet_plain_15),
        (
            "price_sheet_color_15",
            settings.price_sheet_color_15.unwrap_or(0.0),
        ),
        ("price_sheet_backing_6", settings.price_sheet_backing_6),
        ("price_hinge", settings.price_hinge),
        ("price_slide_telescopic", settings.price_slide_telescopic),
        ("price_slide_concealed", settings.price_slide_concealed),
        ("price_rail_kit", settings.price_rail_kit),
        ("price_rail_top_per_m", settings.price_rail_top_per_m),
        ("price_rail_bottom_per_m", settings.price_rail_bottom_per_m),
        ("price_handle_per_m", settings.price_handle_per_m),
        ("price_edge_band_per_m", settings.price_edge_band_per_m),
        ("price_device_screw", settings.price_device_screw),
        ("price_device_vb", settings.price_device_vb),
        ("price_device_minifix", settings.price_device_minifix),
        ("price_device_rafix", settings.price_device_rafix),
        ("price_assembly_screw", settings.price_assembly_screw),
        ("labor_hourly_rate", settings.labor_hourly_rate),
        ("shipping_cost", settings.shipping_cost),
    ];
    for (name, value) in prices {
        if value < 0.0 {
            result.add_warning(format!("Negative price for {}: {}", name, value));
        }
    }

    if settings.profit_margin_percent < 0.0 {
        result.add_warning(format!(
            "Negative profit margin: {}%",
            settings.profit_margin_percent
        ));
    }
    if settings.edge_band_waste_percent < 0.0 {
        result.add_warning(format!(
            "Negative edge band waste: {}%",
            settings.edge_band_waste_percent
        ));
    }
    if settings.sheet_area_m2 <= 0.0 {
        result.add_warning("Sheet area not set; the fallback of 2.8 m² applies".to_string());
    }

    result
}

/// Quick validation check for the command-line `--validate` flag.
pub fn quick_validate(modules: &[ModuleSpec]) -> Result<()> {
    let result = validate_modules(modules);

    if !result.passed {
        return Err(QuoteError::ValidationFailed {
            message: result.errors.join("; "),
        });
    }

    Ok(())
}
