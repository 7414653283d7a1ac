//! User catalog DTOs.

use fitlog_core::catalog::{Category, UserCatalog, WorkoutTemplate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current catalog document schema version.
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

fn current_version() -> u32 {
    CATALOG_SCHEMA_VERSION
}

/// One persisted workout template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTemplateDto {
    pub name: String,
    pub exercises: Vec<String>,
}

impl From<WorkoutTemplate> for WorkoutTemplateDto {
    fn from(template: WorkoutTemplate) -> Self {
        WorkoutTemplateDto {
            name: template.name,
            exercises: template.exercises,
        }
    }
}

impl From<WorkoutTemplateDto> for WorkoutTemplate {
    fn from(dto: WorkoutTemplateDto) -> Self {
        WorkoutTemplate {
            name: dto.name,
            exercises: dto.exercises,
        }
    }
}

/// V1: a user's catalog additions, category keys stored as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default = "current_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub exercises: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub templates: Vec<WorkoutTemplateDto>,
}

impl Default for CatalogDocument {
    fn default() -> Self {
        Self {
            schema_version: CATALOG_SCHEMA_VERSION,
            exercises: BTreeMap::new(),
            templates: Vec::new(),
        }
    }
}

impl From<UserCatalog> for CatalogDocument {
    fn from(catalog: UserCatalog) -> Self {
        CatalogDocument {
            schema_version: CATALOG_SCHEMA_VERSION,
            exercises: catalog
                .exercises
                .into_iter()
                .map(|(category, names)| (category.to_string(), names))
                .collect(),
            templates: catalog.templates.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CatalogDocument> for UserCatalog {
    fn from(document: CatalogDocument) -> Self {
        let mut exercises: BTreeMap<Category, Vec<String>> = BTreeMap::new();
        for (key, names) in document.exercises {
            match key.parse::<Category>() {
                Ok(category) => {
                    exercises.insert(category, names);
                }
                Err(_) => {
                    // Category set is closed; an unknown key can only come
                    // from a different schema. Keep loading the rest.
                    tracing::warn!("[CatalogDocument] dropping unknown category key '{}'", key);
                }
            }
        }
        UserCatalog {
            exercises,
            templates: document.templates.into_iter().map(Into::into).collect(),
        }
    }
}
