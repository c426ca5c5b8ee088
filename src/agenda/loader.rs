//! Agenda loading and validation

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use tracing::info;

use super::AgendaItem;

/// JSON shape of an agenda document.
#[derive(Debug, Deserialize)]
struct AgendaFile {
    title: String,
    #[serde(default)]
    subtitle: Option<String>,
    items: Vec<AgendaItem>,
}

/// The validated daily agenda: an ordered item list plus display headings.
///
/// Ids are contiguous starting at 1 and every item ends after it starts;
/// both are checked at construction so the rest of the program can rely on
/// them.
#[derive(Debug, Clone)]
pub struct Agenda {
    title: String,
    subtitle: Option<String>,
    items: Vec<AgendaItem>,
}

impl Agenda {
    /// Build an agenda from raw parts, checking the ordering invariants.
    pub fn new(title: String, subtitle: Option<String>, items: Vec<AgendaItem>) -> Result<Self> {
        ensure!(!items.is_empty(), "agenda has no items");
        ensure!(!title.trim().is_empty(), "agenda title is empty");

        for (index, item) in items.iter().enumerate() {
            let expected = index as u32 + 1;
            ensure!(
                item.id == expected,
                "agenda ids must be contiguous from 1: position {} has id {}",
                index + 1,
                item.id
            );
            ensure!(
                !item.label.trim().is_empty(),
                "agenda item {} has an empty label",
                item.id
            );
            ensure!(
                item.end_time > item.start_time,
                "agenda item {} ({}) ends at or before it starts",
                item.id,
                item.label
            );
        }

        Ok(Self {
            title,
            subtitle,
            items,
        })
    }

    /// Parse and validate an agenda from a JSON document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: AgendaFile = serde_json::from_str(raw).context("malformed agenda document")?;
        Self::new(file.title, file.subtitle, file.items)
    }

    /// The built-in reference schedule (17 entries, 09:00 through 15:00).
    pub fn builtin() -> Result<Self> {
        Self::from_json(include_str!("default_agenda.json")).context("built-in agenda is invalid")
    }

    /// Load an agenda from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read agenda file {}", path.display()))?;
        let agenda = Self::from_json(&raw)
            .with_context(|| format!("invalid agenda file {}", path.display()))?;

        info!(
            "Loaded agenda '{}' with {} items from {}",
            agenda.title,
            agenda.items.len(),
            path.display()
        );
        Ok(agenda)
    }

    /// Display title of the agenda.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Optional display subtitle.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// All items in chronological order.
    pub fn items(&self) -> &[AgendaItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; construction rejects empty agendas.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Highest valid item id (= item count, since ids are contiguous).
    pub fn last_id(&self) -> u32 {
        self.items.len() as u32
    }

    /// Look an item up by id.
    pub fn get(&self, id: u32) -> Option<&AgendaItem> {
        if id == 0 {
            return None;
        }
        self.items.get(id as usize - 1)
    }
}
