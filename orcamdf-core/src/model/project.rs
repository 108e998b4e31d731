//! Project metadata wrapping a module list for storage and display.

use serde::{Deserialize, Serialize};

use crate::model::{ModuleSpec, QuoteResult};

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Done,
}

/// A named quoting project: client details plus the ordered module list.
///
/// Module order is significant — the adjacency correction treats consecutive
/// modules as physically side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub project_name: String,
    pub client_name: String,
    pub description: String,
    /// Creation date as an ISO-8601 string; formatting is presentation-side.
    pub date_created: String,
    pub status: ProjectStatus,
    pub modules: Vec<ModuleSpec>,
    /// Last computed result, if the caller chose to cache one.
    pub result: Option<QuoteResult>,
}
