//! Built-in article template catalog.
//!
//! A template is a named bundle of generation defaults: the audience the
//! article addresses, how long it should be, and the writing style. The
//! catalog is built once at startup and handed to the prompt builder by
//! reference; it is never mutated afterwards.
//!
//! Lookup is lenient: an unknown identifier resolves to the default
//! template (`tutorial`) instead of failing.

use crate::article::LengthClass;
use std::collections::BTreeMap;

/// Identifier of the template every unknown name falls back to.
pub const DEFAULT_TEMPLATE_ID: &str = "tutorial";

/// Generation defaults for one kind of article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub description: &'static str,
    pub audience: &'static str,
    pub length: LengthClass,
    pub style: &'static str,
}

/// Read-only lookup table of article templates.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: BTreeMap<&'static str, Template>,
    default_id: &'static str,
}

impl TemplateCatalog {
    /// The catalog shipped with quill.
    pub fn builtin() -> Self {
        let templates = [
            Template {
                id: "tutorial",
                description: "Step-by-step tutorial for beginners",
                audience: "beginner engineer",
                length: LengthClass::Long,
                style: "careful, step-by-step explanation",
            },
            Template {
                id: "tips",
                description: "Practical tips and small tricks",
                audience: "intermediate engineer",
                length: LengthClass::Medium,
                style: "practical content readers can apply immediately",
            },
            Template {
                id: "deep-dive",
                description: "In-depth technical explanation",
                audience: "advanced engineer",
                length: LengthClass::Long,
                style: "detailed technical explanation with background",
            },
            Template {
                id: "comparison",
                description: "Technology comparison and selection guide",
                audience: "engineers in general",
                length: LengthClass::Medium,
                style: "objective comparison with decision criteria",
            },
            Template {
                id: "troubleshooting",
                description: "Problem solving and troubleshooting",
                audience: "working engineer",
                length: LengthClass::Medium,
                style: "concrete problems and resolution steps",
            },
        ];

        Self {
            templates: templates.into_iter().map(|t| (t.id, t)).collect(),
            default_id: DEFAULT_TEMPLATE_ID,
        }
    }

    /// Resolve a template by identifier, falling back to the default entry.
    pub fn resolve(&self, id: &str) -> &Template {
        match self.get(id.trim()) {
            Some(template) => template,
            None => {
                tracing::warn!(
                    template = id,
                    fallback = self.default_id,
                    "unknown template, using default"
                );
                self.default_template()
            }
        }
    }

    /// Exact lookup without fallback.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    pub fn default_template(&self) -> &Template {
        &self.templates[self.default_id]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    /// `id: description` lines for help output.
    pub fn describe(&self) -> String {
        self.iter()
            .map(|t| format!("  {}: {}", t.id, t.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
