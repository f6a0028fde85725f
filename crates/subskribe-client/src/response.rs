//! Normalized successful responses.

use std::borrow::Cow;

use reqwest::header::{HeaderMap, LOCATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// Header carrying the URL of a resource created by a POST.
pub const LOCATION_HEADER: &str = "Location";

/// A 200 or 201 response, fully read.
#[derive(Debug, Clone)]
pub struct Response {
    /// Status code, always 200 or 201.
    pub status: StatusCode,
    /// Exact response body bytes.
    pub body: Vec<u8>,
    /// Response headers, including repeated values.
    pub headers: HeaderMap,
}

impl Response {
    /// Body decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserialize the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialization`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Identifier of the created resource, taken from the `Location` header.
    ///
    /// # Errors
    ///
    /// See [`location_key`].
    pub fn location_key(&self) -> Result<String> {
        location_key(&self.headers)
    }
}

/// Extract the last path segment of the `Location` header.
///
/// `Location: /v1/widgets/abc123` yields `abc123`. Trailing slashes are ignored
/// and only the first value is considered.
///
/// # Errors
///
/// Returns [`ClientError::MissingHeader`] if there is no `Location` header and
/// [`ClientError::InvalidLocation`] if its value is not text or has no final
/// segment.
pub fn location_key(headers: &HeaderMap) -> Result<String> {
    let value = headers
        .get(LOCATION)
        .ok_or(ClientError::MissingHeader(LOCATION_HEADER))?;

    let location = value.to_str().map_err(|_| {
        ClientError::InvalidLocation(String::from_utf8_lossy(value.as_bytes()).into_owned())
    })?;

    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ClientError::InvalidLocation(location.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn with_location(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn extracts_last_segment() {
        assert_eq!(location_key(&with_location("/v1/widgets/abc123")).unwrap(), "abc123");
    }

    #[test]
    fn absolute_url_and_trailing_slash() {
        let headers = with_location("https://example.test/v1/widgets/abc123/");
        assert_eq!(location_key(&headers).unwrap(), "abc123");
    }

    #[test]
    fn bare_identifier() {
        assert_eq!(location_key(&with_location("abc123")).unwrap(), "abc123");
    }

    #[test]
    fn absent_header_is_error() {
        let err = location_key(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, ClientError::MissingHeader(LOCATION_HEADER)));
    }

    #[test]
    fn empty_segment_is_error() {
        for value in ["/", "", "///"] {
            let err = location_key(&with_location(value)).unwrap_err();
            assert!(matches!(err, ClientError::InvalidLocation(_)), "{value:?}");
        }
    }

    #[test]
    fn non_ascii_location_is_error() {
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, HeaderValue::from_bytes(b"/v1/\xff").unwrap());
        let err = location_key(&headers).unwrap_err();
        assert!(matches!(err, ClientError::InvalidLocation(_)), "{err:?}");
    }

    #[test]
    fn first_value_wins() {
        let mut headers = with_location("/v1/a/first");
        headers.append(LOCATION, HeaderValue::from_static("/v1/a/second"));
        assert_eq!(location_key(&headers).unwrap(), "first");
    }

    #[test]
    fn response_helpers() {
        let response = Response {
            status: StatusCode::CREATED,
            body: br#"{"id":"t1"}"#.to_vec(),
            headers: with_location("/tenants/t1"),
        };
        assert_eq!(response.text(), r#"{"id":"t1"}"#);
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["id"], "t1");
        assert_eq!(response.location_key().unwrap(), "t1");
    }

    #[test]
    fn invalid_json_is_serialization_error() {
        let response = Response {
            status: StatusCode::OK,
            body: b"not json".to_vec(),
            headers: HeaderMap::new(),
        };
        let err = response.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, ClientError::Serialization(_)));
    }
}
