//! Progress persistence seam and the export/import document format.
//!
//! The core never talks to a concrete storage backend; callers hand it a
//! [`ProgressStore`] whose only job is loading and saving the whole schedule
//! map. The exported document is a plain JSON object keyed by card identity,
//! each value the review-state fields, with no schema versioning.

use crate::error::{CoreError, Result};
use crate::types::{CardId, ReviewState};
use std::collections::HashMap;

/// The persisted collection: one review state per card identity.
pub type ScheduleMap = HashMap<CardId, ReviewState>;

/// Storage seam for the schedule map. Load and save are its only methods;
/// a corrupt or absent backend loads as an empty map, never as an error.
pub trait ProgressStore {
    fn load(&self) -> ScheduleMap;
    fn save(&mut self, schedules: &ScheduleMap);
}

/// In-memory store, used in tests and as a default backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: ScheduleMap,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> ScheduleMap {
        self.data.clone()
    }

    fn save(&mut self, schedules: &ScheduleMap) {
        self.data = schedules.clone();
    }
}

/// Leniently parse a persisted document, recovering from corruption.
///
/// Backends keep raw text around (a file, a browser storage value); anything
/// unreadable starts the user over with an empty map rather than failing.
pub fn parse_or_default(doc: Option<&str>) -> ScheduleMap {
    match doc {
        None => ScheduleMap::new(),
        Some(text) => match serde_json::from_str(text) {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!("discarding corrupt progress data: {err}");
                ScheduleMap::new()
            }
        },
    }
}

/// Serialize the schedule map to the export document format.
pub fn export_document(schedules: &ScheduleMap) -> Result<String> {
    serde_json::to_string_pretty(schedules).map_err(CoreError::Export)
}

/// Parse and validate an imported progress document.
///
/// The document must be a JSON object mapping card identities to review-state
/// objects; anything else is rejected so the caller can keep its current
/// state untouched.
pub fn import_document(doc: &str) -> Result<ScheduleMap> {
    let value: serde_json::Value =
        serde_json::from_str(doc).map_err(|err| CoreError::InvalidImport {
            reason: err.to_string(),
        })?;
    if !value.is_object() {
        return Err(CoreError::InvalidImport {
            reason: "expected a JSON object of review states".into(),
        });
    }
    let map: ScheduleMap =
        serde_json::from_value(value).map_err(|err| CoreError::InvalidImport {
            reason: err.to_string(),
        })?;
    tracing::debug!("imported progress for {} cards", map.len());
    Ok(map)
}
