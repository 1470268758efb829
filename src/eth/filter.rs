use serde::Serialize;

/// Log filter for `eth_newFilter` and `eth_getLogs`. Unset or empty fields
/// are left out of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    #[serde(skip_serializing_if = "is_blank")]
    pub from_block: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub to_block: Option<String>,
    #[serde(skip_serializing_if = "is_empty_or_none")]
    pub address: Option<Vec<String>>,
    #[serde(skip_serializing_if = "is_empty_or_none")]
    pub topics: Option<Vec<Vec<String>>>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn is_empty_or_none<T>(value: &Option<Vec<T>>) -> bool {
    value.as_ref().map_or(true, Vec::is_empty)
}
