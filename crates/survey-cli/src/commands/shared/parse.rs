use serde_json::Value;

/// Parse a JSON document passed on the command line.
pub fn parse_json(raw: &str, field: &str) -> anyhow::Result<Value> {
    serde_json::from_str(raw).map_err(|error| anyhow::anyhow!("invalid {field} JSON '{raw}': {error}"))
}

/// Parse an optional JSON argument.
pub fn parse_optional_json(raw: Option<&str>, field: &str) -> anyhow::Result<Option<Value>> {
    raw.map(|raw| parse_json(raw, field)).transpose()
}
