use crate::modules::notes::adapters::inbound::http_error::ApiError;

/// Every `id` value in a decoded query string, in the order given.
pub fn id_values(params: &[(String, String)]) -> Vec<&str> {
    params
        .iter()
        .filter(|(key, _)| key == "id")
        .map(|(_, value)| value.as_str())
        .collect()
}

/// Parses an `id` query value: a decimal integer with an optional sign.
pub fn parse_id(raw: &str, invalid: &'static str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::InvalidIdentifier(invalid))
}
