//! The mutable draft record backing one wizard session.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{json, Value};

use super::FormSchema;

/// Field values collected by the wizard for one form session.
///
/// The field set is fixed at construction from the schema; only values change.
/// Multi-selects use toggle semantics, so membership is all that matters and
/// duplicates cannot occur.
#[derive(Debug, Clone)]
pub struct DraftRecord {
    schema: &'static FormSchema,
    values: BTreeMap<String, String>,
    expertise: BTreeSet<String>,
    stack: BTreeMap<String, BTreeSet<String>>,
}

impl DraftRecord {
    /// Create an empty draft with every scalar field seeded to its default.
    pub fn new(schema: &'static FormSchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.default.to_string()))
            .collect();

        Self {
            schema,
            values,
            expertise: BTreeSet::new(),
            stack: BTreeMap::new(),
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    /// Current value of a scalar field ("" for unknown names).
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Overwrite one scalar field. Names outside the schema are ignored - the
    /// draft's shape never changes during a session.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => {
                tracing::debug!(field = name, "Ignoring write to unknown draft field");
                false
            }
        }
    }

    /// Symmetric-difference toggle on the expertise set.
    pub fn toggle_expertise(&mut self, tag: &str) {
        if !self.expertise.remove(tag) {
            self.expertise.insert(tag.to_string());
        }
    }

    /// Symmetric-difference toggle on one stack category.
    pub fn toggle_stack(&mut self, category: &str, option: &str) {
        let entry = self.stack.entry(category.to_string()).or_default();
        if !entry.remove(option) {
            entry.insert(option.to_string());
        }
    }

    pub fn expertise(&self) -> &BTreeSet<String> {
        &self.expertise
    }

    pub fn stack(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.stack
    }

    /// Whether every required field of the given step is non-empty.
    /// Steps without required fields (and unknown step numbers) pass.
    pub fn is_step_complete(&self, step: u8) -> bool {
        self.schema
            .required_for_step(step)
            .all(|f| !self.get(f.name).is_empty())
    }

    /// Serialize to the wire payload the backend expects: all scalars at the
    /// top level, the expertise set as an array, the stack as an object of
    /// arrays.
    pub fn to_payload(&self) -> Value {
        let mut body = serde_json::Map::new();
        for (name, value) in &self.values {
            body.insert(name.clone(), Value::String(value.clone()));
        }
        body.insert(
            self.schema.expertise.name.to_string(),
            json!(self.expertise.iter().collect::<Vec<_>>()),
        );
        let stack: serde_json::Map<String, Value> = self
            .stack
            .iter()
            .map(|(category, options)| {
                (category.clone(), json!(options.iter().collect::<Vec<_>>()))
            })
            .collect();
        body.insert(self.schema.stack.name.to_string(), Value::Object(stack));
        Value::Object(body)
    }
}
