//! Client identification utilities
//!
//! The marketplace account id is the caller identity: every authenticated
//! request carries it in the `X-Steam-Id` header.

use axum::http::HeaderMap;

/// Header carrying the caller's Steam account id.
pub const STEAM_ID_HEADER: &str = "x-steam-id";

/// Error when identifying the caller
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Missing required header: {0}")]
    MissingHeader(String),
}

/// Extract the caller's Steam id from request headers
///
/// Header lookup is case-insensitive. Surrounding whitespace is trimmed.
///
/// ## Returns
/// * `Ok(String)` - non-empty Steam id
/// * `Err(IdentityError)` - header absent, empty, or not valid UTF-8
pub fn extract_steam_id(headers: &HeaderMap) -> Result<String, IdentityError> {
    headers
        .get(STEAM_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| IdentityError::MissingHeader("X-Steam-Id".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_steam_id() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Steam-Id", HeaderValue::from_static("76561198000000042"));

        assert_eq!(
            extract_steam_id(&headers),
            Ok("76561198000000042".to_string())
        );
    }

    #[test]
    fn test_extract_steam_id_lowercase_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-steam-id", HeaderValue::from_static("  123  "));

        assert_eq!(extract_steam_id(&headers), Ok("123".to_string()));
    }

    #[test]
    fn test_extract_steam_id_missing() {
        let headers = HeaderMap::new();
        assert!(matches!(
            extract_steam_id(&headers),
            Err(IdentityError::MissingHeader(_))
        ));
    }

    #[test]
    fn test_extract_steam_id_blank() {
        let mut headers = HeaderMap::new();
        headers.insert("x-steam-id", HeaderValue::from_static("   "));
        assert!(extract_steam_id(&headers).is_err());
    }
}
