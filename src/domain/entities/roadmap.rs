//! Roadmap entities - the three-level checklist
//!
//! Document → Module* → Subtopic* → Practice*. Field names on disk are the
//! Portuguese keys of `progress.json`; unknown top-level keys survive a
//! load/save cycle through `extra`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::progress::ProgressCounters;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Resolution, Rgb};

/// Tag value that turns a module into a phase separator
pub const PHASE_TAG: &str = "FASE";

/// Root record of `progress.json`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadmapDocument {
    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "resolucao")]
    pub resolution: Resolution,

    #[serde(rename = "fundo_cor")]
    pub background_color: Rgb,

    #[serde(rename = "texto_cor_principal")]
    pub primary_text_color: Rgb,

    #[serde(rename = "texto_cor_concluido")]
    pub completed_text_color: Rgb,

    #[serde(rename = "contorno_cor")]
    pub outline_color: Rgb,

    /// Expected in 0..=5; the renderer clamps anything else
    #[serde(rename = "contorno_largura")]
    pub outline_width: i32,

    /// Background image, relative paths resolve against the output directory
    #[serde(rename = "caminho_fundo", default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,

    #[serde(rename = "caminho_saida")]
    pub output_path: PathBuf,

    #[serde(rename = "modulos")]
    pub modules: Vec<Module>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Module kind, derived from the optional `tipo` tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModuleKind {
    #[default]
    Regular,
    /// Heading between groups of modules; never counted
    PhaseSeparator,
}

/// A module (week) or a phase separator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(rename = "nome")]
    pub name: String,

    /// Raw `tipo` value; only `"FASE"` has a meaning
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// `None` when the key is absent, which phase separators usually are
    #[serde(rename = "subtopicos", default, skip_serializing_if = "Option::is_none")]
    pub subtopics: Option<Vec<Subtopic>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Second level of the checklist
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subtopic {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "praticas", default)]
    pub practices: Vec<Practice>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A checklist leaf
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Practice {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "concluido", default)]
    pub completed: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Location of a pending practice plus its display label
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingPractice {
    pub module_index: usize,
    pub subtopic_index: usize,
    pub practice_index: usize,
    /// `"[short module] subtopic -> practice"`
    pub label: String,
}

impl Module {
    /// Create a regular module
    pub fn regular(name: impl Into<String>, subtopics: Vec<Subtopic>) -> Self {
        Self {
            name: name.into(),
            tag: None,
            subtopics: Some(subtopics),
            extra: Map::new(),
        }
    }

    /// Create a phase separator
    pub fn phase(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: Some(PHASE_TAG.to_string()),
            subtopics: None,
            extra: Map::new(),
        }
    }

    pub fn kind(&self) -> ModuleKind {
        match self.tag.as_deref() {
            Some(PHASE_TAG) => ModuleKind::PhaseSeparator,
            _ => ModuleKind::Regular,
        }
    }

    pub fn is_phase(&self) -> bool {
        self.kind() == ModuleKind::PhaseSeparator
    }

    /// Subtopics in display order, empty when the key is absent
    pub fn subtopics(&self) -> &[Subtopic] {
        self.subtopics.as_deref().unwrap_or(&[])
    }

    /// Subtopic list, created on first write
    pub fn subtopics_mut(&mut self) -> &mut Vec<Subtopic> {
        self.subtopics.get_or_insert_with(Vec::new)
    }

    /// Text before the first `':'`, e.g. `"Semana 1"` for `"Semana 1: Rust"`
    pub fn short_name(&self) -> &str {
        match self.name.split_once(':') {
            Some((head, _)) => head.trim(),
            None => &self.name,
        }
    }
}

impl Subtopic {
    pub fn new(name: impl Into<String>, practices: Vec<Practice>) -> Self {
        Self {
            name: name.into(),
            practices,
            extra: Map::new(),
        }
    }
}

impl Practice {
    pub fn new(name: impl Into<String>, completed: bool) -> Self {
        Self {
            name: name.into(),
            completed,
            extra: Map::new(),
        }
    }

    pub fn pending(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }
}

impl RoadmapDocument {
    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(DomainError::ValidationError(
                "caminho_saida must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Directory the wallpaper is written to; relative background paths live here
    pub fn output_dir(&self) -> &Path {
        self.output_path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Background image path with relative names resolved, `None` when unset
    pub fn resolve_background(&self) -> Option<PathBuf> {
        let raw = self.background_image.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        let path = Path::new(raw);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            Some(self.output_dir().join(path))
        }
    }

    /// Modules that carry practices (phase separators excluded)
    pub fn regular_modules(&self) -> impl Iterator<Item = (usize, &Module)> {
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_phase())
    }

    /// Count practice leaves without drawing anything
    pub fn counters(&self) -> ProgressCounters {
        let mut counters = ProgressCounters::default();
        for (_, module) in self.regular_modules() {
            for subtopic in module.subtopics() {
                for practice in &subtopic.practices {
                    counters.record(practice.completed);
                }
            }
        }
        counters
    }

    /// Pending practices in display order
    pub fn pending_practices(&self) -> Vec<PendingPractice> {
        let mut pending = Vec::new();
        for (module_index, module) in self.regular_modules() {
            for (subtopic_index, subtopic) in module.subtopics().iter().enumerate() {
                for (practice_index, practice) in subtopic.practices.iter().enumerate() {
                    if practice.completed {
                        continue;
                    }
                    pending.push(PendingPractice {
                        module_index,
                        subtopic_index,
                        practice_index,
                        label: format!(
                            "[{}] {} -> {}",
                            module.short_name(),
                            subtopic.name,
                            practice.name
                        ),
                    });
                }
            }
        }
        pending
    }

    /// Mutable access to the practice a [`PendingPractice`] points at
    pub fn practice_mut(&mut self, location: &PendingPractice) -> Option<&mut Practice> {
        self.modules
            .get_mut(location.module_index)?
            .subtopics
            .as_mut()?
            .get_mut(location.subtopic_index)?
            .practices
            .get_mut(location.practice_index)
    }

    /// First regular module whose name contains `query`
    pub fn find_module_mut(&mut self, query: &str) -> Option<&mut Module> {
        self.modules
            .iter_mut()
            .filter(|m| !m.is_phase())
            .find(|m| m.name.contains(query))
    }
}
