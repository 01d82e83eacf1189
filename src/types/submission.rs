//! Immutable submission envelopes, constructed once per accepted request.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::forms::FormSchema;

/// A contact-form submission plus its server-assigned timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub service: String,
    pub message: String,
    /// Academic-variant extras, absent on the CodeCraft contact form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_level: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// A request-form submission normalized against its form schema.
///
/// Construction is the single normalization point: absent scalars take their
/// schema default, absent multi-selects become empty, duplicate facet entries
/// collapse, and stack categories with no remaining options are dropped.
#[derive(Debug, Clone)]
pub struct RequestSubmission {
    pub schema: &'static FormSchema,
    pub values: BTreeMap<String, String>,
    pub expertise: BTreeSet<String>,
    pub stack: BTreeMap<String, BTreeSet<String>>,
    pub submitted_at: DateTime<Utc>,
}

impl RequestSubmission {
    /// Normalize an inbound wire payload against the schema.
    pub fn from_payload(schema: &'static FormSchema, payload: &Value) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|f| {
                let value = payload
                    .get(f.name)
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .unwrap_or(f.default);
                (f.name.to_string(), value.to_string())
            })
            .collect();

        let expertise = payload
            .get(schema.expertise.name)
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let mut stack: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        if let Some(categories) = payload.get(schema.stack.name).and_then(Value::as_object) {
            for (category, options) in categories {
                let options: BTreeSet<String> = options
                    .as_array()
                    .map(|opts| {
                        opts.iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                if !options.is_empty() {
                    stack.insert(category.clone(), options);
                }
            }
        }

        Self {
            schema,
            values,
            expertise,
            stack,
            submitted_at: Utc::now(),
        }
    }

    /// Value of one scalar field ("" for unknown names).
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Names of schema-required fields that are empty in this submission.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        self.schema
            .server_required_fields()
            .filter(|f| self.get(f.name).is_empty())
            .map(|f| f.name)
            .collect()
    }

    /// Project to the flat document shape that gets persisted: scalars at the
    /// top level, facet array, stack object, RFC 3339 `submittedAt`.
    pub fn to_document(&self) -> Value {
        let mut doc = serde_json::Map::new();
        for (name, value) in &self.values {
            doc.insert(name.clone(), Value::String(value.clone()));
        }
        doc.insert(
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
        doc.insert(self.schema.stack.name.to_string(), Value::Object(stack));
        doc.insert(
            "submittedAt".to_string(),
            Value::String(self.submitted_at.to_rfc3339()),
        );
        Value::Object(doc)
    }
}

impl ContactSubmission {
    /// Flat persisted document, mirroring the serde representation.
    pub fn to_document(&self) -> Value {
        // Serialization of this struct cannot fail: all fields are strings
        // or timestamps.
        serde_json::to_value(self).unwrap_or_else(|_| json!({}))
    }
}
