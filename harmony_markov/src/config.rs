// JSON configuration for chord graphs.
//
// A config names its templates once and refers to them by name in the
// transitions, so a table file reads like the graph it describes:
//
//   {
//     "root": "D0",
//     "start": "minor1",
//     "templates": {
//       "minor1": { "notes": ["D0", "F0", "A1"], "root": "D0", "treble": "D1", "quality": "min" },
//       ...
//     },
//     "transitions": [
//       { "from": "minor1", "to": [ { "degree": "fifth", "chord": "dom5" } ] },
//       ...
//     ]
//   }
//
// A degree is either an interval name known to `Interval::named` or a pair
// of note names, `["C0", "G0"]`. `end` defaults to false.
//
// `build` resolves names and produces a ready `Markov` engine. Each template
// name maps to a single shared `Arc<ChordTemplate>`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use harmony_lattice::{Interval, Note};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HarmonyError, Result};
use crate::markov::Markov;
use crate::table::{Successor, TransitionTable};
use crate::template::ChordTemplate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Note the start template is applied to.
    pub root: String,
    /// Name of the start template.
    pub start: String,
    pub templates: BTreeMap<String, TemplateSpec>,
    pub transitions: Vec<TransitionSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSpec {
    pub notes: Vec<String>,
    pub root: String,
    pub treble: String,
    pub quality: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub from: String,
    pub to: Vec<SuccessorSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessorSpec {
    pub degree: DegreeSpec,
    pub chord: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub end: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DegreeSpec {
    Named(String),
    Between([String; 2]),
}

impl DegreeSpec {
    pub fn resolve(&self) -> Result<Interval> {
        match self {
            DegreeSpec::Named(name) => {
                Interval::named(name).ok_or_else(|| HarmonyError::UnknownInterval(name.clone()))
            }
            DegreeSpec::Between([from, to]) => Ok(Interval::between(from, to)?),
        }
    }
}

impl ProgressionConfig {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_json(&data)?;
        debug!(
            path = %path.display(),
            templates = config.templates.len(),
            transitions = config.transitions.len(),
            "loaded progression config"
        );
        Ok(config)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Resolve every name and build the engine.
    pub fn build(&self) -> Result<Markov> {
        let mut templates: BTreeMap<&str, Arc<ChordTemplate>> = BTreeMap::new();
        for (name, spec) in &self.templates {
            let notes: Vec<&str> = spec.notes.iter().map(String::as_str).collect();
            let template = ChordTemplate::from_notes(&notes, &spec.root, &spec.treble, &spec.quality)
                .map_err(|e| match e {
                    HarmonyError::EmptyTemplate(_) => HarmonyError::EmptyTemplate(name.clone()),
                    other => other,
                })?;
            templates.insert(name.as_str(), Arc::new(template));
        }

        let lookup = |name: &str| {
            templates
                .get(name)
                .cloned()
                .ok_or_else(|| HarmonyError::UnknownTemplate(name.to_string()))
        };

        let mut table = TransitionTable::new();
        for transition in &self.transitions {
            let from = lookup(&transition.from)?;
            let to = transition
                .to
                .iter()
                .map(|s| -> Result<Successor> {
                    Ok(Successor {
                        degree: s.degree.resolve()?,
                        chord: lookup(&s.chord)?,
                        end: s.end,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            table.push(&from, to);
        }

        let root = Note::from_name(&self.root)?;
        let start = lookup(&self.start)?;
        Ok(Markov::new(root, start, table))
    }
}
