//! JSON document parsing and serialization
//!
//! Parses external documents into a validated `Topology` and writes the
//! current topology back out as pretty-printed JSON.

use super::{DocumentError, DocumentResult};
use crate::types::Topology;
use std::path::Path;

/// Parse and validate a document from a string.
pub fn parse_document(json: &str) -> DocumentResult<Topology> {
    let topology: Topology = serde_json::from_str(json)?;
    validate_topology(&topology)?;
    Ok(topology)
}

/// Check that every object references existing points.
pub fn validate_topology(topology: &Topology) -> DocumentResult<()> {
    match topology.first_dangling_reference() {
        Some((object, index)) => Err(DocumentError::DanglingPoint {
            object,
            index,
            len: topology.points.len(),
        }),
        None => Ok(()),
    }
}

/// Serialize a topology as pretty-printed JSON.
pub fn to_document(topology: &Topology) -> DocumentResult<String> {
    Ok(serde_json::to_string_pretty(topology)?)
}

/// Read and validate a document file.
pub fn read_document(path: &Path) -> DocumentResult<Topology> {
    let content = std::fs::read_to_string(path)?;
    parse_document(&content)
}

/// Write a topology to a document file, replacing any existing content.
pub fn write_document(path: &Path, topology: &Topology) -> DocumentResult<()> {
    let json = to_document(topology)?;
    std::fs::write(path, json)?;
    Ok(())
}
