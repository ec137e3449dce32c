//! JSON models for the FHIR bundle returned by the intake service.
//!
//! Only the parts the result panel reads are typed. Everything else is kept
//! in flattened maps so that re-serializing a bundle gives back the same
//! document the service sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// [Bundle](<https://hl7.org/fhir/bundle.html>)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FhirBundle {
    #[serde(default)]
    pub entry: Vec<BundleEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One `entry` of a bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleEntry {
    pub resource: Resource,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Any FHIR resource, tagged by its `resourceType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "resourceType")]
    pub resource_type: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl FhirBundle {
    pub fn len(&self) -> usize {
        self.entry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_empty()
    }

    /// Resource types of every entry, in entry order.
    pub fn resource_types(&self) -> Vec<&str> {
        self.entry
            .iter()
            .map(|e| e.resource.resource_type.as_str())
            .collect()
    }

    /// Resource types with duplicates dropped, first occurrence kept.
    pub fn distinct_resource_types(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for resource_type in self.resource_types() {
            if !seen.contains(&resource_type) {
                seen.push(resource_type);
            }
        }
        seen
    }
}
