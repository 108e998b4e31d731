//! orcamdf-core - Quote estimation engine for custom MDF cabinetry.
//!
//! Converts an ordered list of cabinet modules and a price book into a
//! priced bill of materials: panel areas split by finish, discrete sheet
//! counts (including the width-constrained cut for sliding doors), hardware
//! quantities, labor hours, and a suggested sale price.
//!
//! The engine is a pure function — no I/O, no shared state, and total over
//! its documented input domain. Surrounding modules add JSON storage and
//! advisory validation for callers that read projects from disk.
//!
//! # Example
//!
//! ```
//! use orcamdf_core::{estimate, Dimensions, ModuleSpec, Settings};
//!
//! let module = ModuleSpec {
//!     name: "Armário padrão".to_string(),
//!     dimensions: Dimensions {
//!         width_mm: 900.0,
//!         height_mm: 2100.0,
//!         depth_mm: 550.0,
//!     },
//!     ..Default::default()
//! };
//! let quote = estimate(&[module], &Settings::default());
//! assert!(quote.total_cost > 0.0);
//! assert!(quote.suggested_price >= quote.total_cost);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod storage;
pub mod validation;

// Re-exports for convenience
pub use engine::{estimate, estimate_project, MaterialQuantities, Tally};
pub use error::{QuoteError, Result};
pub use model::{
    Dimensions, DoorKind, MaterialItem, ModuleHardware, ModuleInternals, ModuleKind,
    ModuleMaterials, ModuleSpec, PriceBook, Project, ProjectStatus, QuoteResult, Settings,
    ShelfMountDevice, SlideKind,
};
pub use validation::{validate_modules, validate_settings, ValidationResult};

/// Estimate a quote straight from a project file.
///
/// This is the high-level pipeline used by the CLI:
/// 1. Load the project JSON.
/// 2. Run advisory validation — warnings are logged, errors abort.
/// 3. Run the estimation engine.
pub fn estimate_project_file(
    path: &std::path::Path,
    settings: &Settings,
) -> Result<QuoteResult> {
    let project = storage::load_project(path)?;

    let validation = validate_modules(&project.modules);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    if !validation.passed {
        return Err(QuoteError::ValidationFailed {
            message: validation.errors.join("; "),
        });
    }

    Ok(estimate_project(&project, settings))
}
