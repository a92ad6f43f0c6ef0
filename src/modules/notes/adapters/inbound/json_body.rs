use serde::de::DeserializeOwned;

use crate::modules::notes::adapters::inbound::http_error::ApiError;

/// Decodes the first JSON value in a request body, whatever its `Content-Type`.
///
/// Bytes after that value are ignored, and a `null` body decodes to `T::default()`.
/// An empty body is malformed.
pub fn decode_json<T>(bytes: &[u8], malformed: &'static str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let value = serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Option<T>>()
        .next()
        .ok_or(ApiError::MalformedInput(malformed))?
        .map_err(|_| ApiError::MalformedInput(malformed))?;
    Ok(value.unwrap_or_default())
}
