//! The tech-stack column round-trips through JSON text rather than a
//! native array column.

/// Serialize a tech stack for storage. `None` stays `NULL`.
pub fn encode_tech_stack(stack: Option<&[String]>) -> Option<String> {
    stack.map(|stack| serde_json::to_string(stack).unwrap_or_else(|_| "[]".to_string()))
}

/// Parse a stored tech stack. Absent or unreadable text yields `None`,
/// never an error.
pub fn decode_tech_stack(raw: Option<&str>) -> Option<Vec<String>> {
    raw.and_then(|raw| serde_json::from_str(raw).ok())
}
