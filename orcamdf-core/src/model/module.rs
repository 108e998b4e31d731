//! Module definition: one cabinet unit with its dimensions, materials,
//! internal fittings and hardware.

use serde::{Deserialize, Serialize};

use crate::config::mm_to_m;

/// Category of a furniture module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    /// Standard cabinet (armário padrão).
    #[default]
    StandardCabinet,
    /// Drawer unit (gaveteiro).
    DrawerUnit,
    /// Open shelf or niche.
    ShelfNiche,
    /// Table or bench top.
    TableBench,
}

/// Door mechanism of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorKind {
    /// Hinged doors (giro).
    #[default]
    Hinged,
    /// Sliding doors on top/bottom tracks (correr).
    Sliding,
    /// Open niche, no doors.
    None,
}

/// Drawer slide mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    /// Side-mounted telescopic slides.
    #[default]
    Telescopic,
    /// Under-mounted concealed slides (oculta).
    Concealed,
}

/// Shelf fixing device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShelfMountDevice {
    /// Plain screw (parafuso).
    #[default]
    Screw,
    /// VB connector.
    Vb,
    /// Minifix cam connector.
    Minifix,
    /// Rafix cam connector.
    Rafix,
}

/// Outer dimensions of a module, in millimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
}

impl Dimensions {
    /// Width in meters.
    pub fn width_m(&self) -> f64 {
        mm_to_m(self.width_mm)
    }

    /// Height in meters.
    pub fn height_m(&self) -> f64 {
        mm_to_m(self.height_mm)
    }

    /// Depth in meters.
    pub fn depth_m(&self) -> f64 {
        mm_to_m(self.depth_mm)
    }
}

/// Material and finish choices for a module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleMaterials {
    /// Internal finish color (hidden faces).
    pub color_internal: String,
    /// External finish color (visible faces).
    pub color_external: String,
    /// Backing panel type label.
    pub backing_type: String,
    /// Installation/base type label.
    pub installation_type: String,
    /// How many lateral faces are visible and finished with the external
    /// color. Stored range is 0–4; only 0–2 affect side panels.
    pub visible_sides: u8,
}

/// Internal fittings of a module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleInternals {
    pub shelves: u32,
    /// Shelf fixing device; plain screws when unset.
    pub shelf_mount_device: Option<ShelfMountDevice>,
    pub drawers: u32,
    /// Height of each drawer front, in millimeters.
    pub drawer_front_height_mm: f64,
    pub drawer_slide_type: SlideKind,
    /// When set, drawer fronts use the external finish.
    pub drawer_fronts_external: bool,
    pub shoe_shelves: u32,
    pub clothes_rails: u32,
}

/// Door and handle hardware of a module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleHardware {
    pub door_type: DoorKind,
    pub door_count: u32,
    /// Handle model label, informational only.
    pub handle_model: String,
}

/// One cabinet unit in a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSpec {
    pub id: String,
    pub name: String,
    pub kind: ModuleKind,
    pub dimensions: Dimensions,
    pub materials: ModuleMaterials,
    pub internals: ModuleInternals,
    pub hardware: ModuleHardware,
}

impl ModuleSpec {
    /// Door count for panel and hardware purposes. A module without doors
    /// reports zero regardless of the stored count.
    pub fn effective_doors(&self) -> u32 {
        match self.hardware.door_type {
            DoorKind::None => 0,
            _ => self.hardware.door_count,
        }
    }

    /// Hinged-door count, zero for sliding or door-less modules.
    pub fn hinged_doors(&self) -> u32 {
        match self.hardware.door_type {
            DoorKind::Hinged => self.hardware.door_count,
            _ => 0,
        }
    }

    /// Sliding-door count, zero for hinged or door-less modules.
    pub fn sliding_doors(&self) -> u32 {
        match self.hardware.door_type {
            DoorKind::Sliding => self.hardware.door_count,
            _ => 0,
        }
    }

    /// Lateral faces that take the external finish, clamped to the two
    /// physical side panels.
    pub fn visible_side_panels(&self) -> u32 {
        self.materials.visible_sides.min(2) as u32
    }

    /// Shelf fixing device, defaulting to plain screws.
    pub fn shelf_device(&self) -> ShelfMountDevice {
        self.internals.shelf_mount_device.unwrap_or_default()
    }
}
