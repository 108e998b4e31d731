//! Data model: modules, price book settings, projects and quote results.

mod module;
mod project;
mod quote;
mod settings;

pub use module::{
    Dimensions, DoorKind, ModuleHardware, ModuleInternals, ModuleKind, ModuleMaterials,
    ModuleSpec, ShelfMountDevice, SlideKind,
};
pub use project::{Project, ProjectStatus};
pub use quote::{MaterialItem, QuoteResult};
pub use settings::{PriceBook, Settings};
