use crate::compile::SpecFilter;
use crate::extract::{ChannelMatch, ConnectorSpec, MountingType, SemanticHit, TypeMatch};
use crate::SpecValue;
use serde_json::Value;
use std::collections::BTreeMap;

bitflags::bitflags! {
    /// Coarse facts about a query that later stages branch on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct PipelineFlags: u8 {
        /// Connector subcategory, series or keyword: values feed free text.
        const CONNECTOR     = 1 << 0;
        /// Ferrite bead: bare numbers and ohms are impedance.
        const FERRITE       = 1 << 1;
        /// A component-type keyword was found in the text.
        const EXPLICIT_TYPE = 1 << 2;
    }
}

/// Everything the pipeline knows about one query at a stage boundary.
///
/// Stages take a `State` by value and return a new one; nothing is shared
/// between queries and nothing is mutated behind a stage's back.
#[derive(Debug, Clone, Default)]
pub(crate) struct State {
    pub original: String,
    /// Text not yet claimed by any stage.
    pub remaining: String,
    pub flags: PipelineFlags,

    pub model_number: Option<String>,
    pub package: Option<String>,
    pub package_suggestion: Option<&'static str>,
    pub mounting: Option<MountingType>,
    pub connector: Option<ConnectorSpec>,
    pub channel: Option<ChannelMatch>,
    pub component_type: Option<TypeMatch>,
    pub subcategory: Option<&'static str>,

    pub values: Vec<SpecValue>,
    pub semantic: Vec<SemanticHit>,
    pub filters: Vec<SpecFilter>,
    /// Tokens appended to the cleaned free text (pin counts, pitches and
    /// series names in connector queries).
    pub free_text_extras: Vec<String>,
    pub free_text: String,

    pub diagnostics: BTreeMap<&'static str, Value>,
}

impl State {
    pub fn new(query: &str) -> Self {
        Self { original: query.to_string(), remaining: query.to_string(), ..Self::default() }
    }

    pub fn matched_keyword(&self) -> Option<&'static str> {
        self.component_type.map(|t| t.keyword)
    }

    pub fn is_connector(&self) -> bool {
        self.flags.contains(PipelineFlags::CONNECTOR)
    }

    /// Record a diagnostic entry; later writes to the same key win.
    pub fn note(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.diagnostics.insert(key, value.into());
        self
    }

    /// Append to a list-valued diagnostic entry.
    pub fn note_push(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        let entry = self.diagnostics.entry(key).or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(items) = entry {
            items.push(value.into());
        }
        self
    }
}
