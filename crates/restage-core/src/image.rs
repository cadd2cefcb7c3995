//! Input image sources.
//!
//! Operations that upload an image accept it as raw bytes, a local file
//! path, or a remote URL. This module provides the tagged union over those
//! three forms and the resolution step that turns any of them into the
//! bytes handed to the transport.

use bytes::Bytes;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::http::SOURCE_FETCH_TIMEOUT;

/// Where an input image comes from.
///
/// Resolution is lazy: bytes are read from disk or fetched over HTTP only
/// when the owning operation actually runs, exactly once per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Raw image bytes, used as-is
    Bytes(Bytes),
    /// Path to a local file, read at resolution time
    Path(PathBuf),
    /// Remote URL, fetched at resolution time
    Url(Url),
}

impl ImageSource {
    /// Classify a string as a URL or a file path.
    ///
    /// A string is treated as a URL only when it parses as absolute and
    /// carries a host; everything else is a file path. `mailto:` style
    /// URLs and Windows drive prefixes therefore fall through to paths.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) if url.has_host() => Self::Url(url),
            _ => Self::Path(PathBuf::from(input)),
        }
    }

    /// Create a source from in-memory bytes.
    #[must_use]
    pub fn bytes(data: impl Into<Bytes>) -> Self {
        Self::Bytes(data.into())
    }

    /// Create a source from a local file path.
    #[must_use]
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Create a source from a URL string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not an absolute URL with a host.
    pub fn url(url: impl AsRef<str>) -> Result<Self> {
        match Url::parse(url.as_ref()) {
            Ok(parsed) if parsed.has_host() => Ok(Self::Url(parsed)),
            Ok(_) => Err(Error::ImageSourceError(format!(
                "URL has no host: {}",
                url.as_ref()
            ))),
            Err(err) => Err(Error::ImageSourceError(format!(
                "Invalid image URL `{}`: {err}",
                url.as_ref()
            ))),
        }
    }

    /// Returns a short tag describing the variant, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bytes(_) => "bytes",
            Self::Path(_) => "path",
            Self::Url(_) => "url",
        }
    }

    /// Resolve the source into image bytes.
    ///
    /// Bytes are returned unchanged; paths are read from disk; URLs are
    /// fetched with a single GET. No size or format checks are applied,
    /// matching what the API itself accepts.
    ///
    /// # Errors
    ///
    /// Any read or fetch failure is reported as
    /// [`Error::ImageSourceError`] naming the offending path or URL.
    pub async fn resolve(&self, http: &reqwest::Client) -> Result<Bytes> {
        match self {
            Self::Bytes(data) => Ok(data.clone()),
            Self::Path(path) => {
                debug!(path = %path.display(), "reading input image");
                tokio::fs::read(path).await.map(Bytes::from).map_err(|err| {
                    Error::ImageSourceError(format!("{}: {err}", path.display()))
                })
            }
            Self::Url(url) => {
                debug!(url = %url, "fetching input image");
                let response = http
                    .get(url.clone())
                    .timeout(Duration::from_secs(SOURCE_FETCH_TIMEOUT))
                    .send()
                    .await
                    .and_then(reqwest::Response::error_for_status)
                    .map_err(|err| Error::ImageSourceError(format!("{url}: {err}")))?;

                response
                    .bytes()
                    .await
                    .map_err(|err| Error::ImageSourceError(format!("{url}: {err}")))
            }
        }
    }
}

impl From<Bytes> for ImageSource {
    fn from(data: Bytes) -> Self {
        Self::Bytes(data)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(data: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(data))
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Url> for ImageSource {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<&str> for ImageSource {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<String> for ImageSource {
    fn from(input: String) -> Self {
        Self::parse(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_parse_classifies_urls() {
        let source = ImageSource::parse("https://images.example/room.jpg");
        assert!(matches!(source, ImageSource::Url(_)));

        let source = ImageSource::parse("http://localhost:8080/room.jpg");
        assert!(matches!(source, ImageSource::Url(_)));
    }

    #[test]
    fn test_parse_classifies_paths() {
        assert!(matches!(
            ImageSource::parse("room.jpg"),
            ImageSource::Path(_)
        ));
        assert!(matches!(
            ImageSource::parse("/tmp/photos/room.jpg"),
            ImageSource::Path(_)
        ));
        assert!(matches!(
            ImageSource::parse("./relative/room.jpg"),
            ImageSource::Path(_)
        ));
        // Scheme but no host
        assert!(matches!(
            ImageSource::parse("mailto:user@example.com"),
            ImageSource::Path(_)
        ));
        // Windows drive prefix parses as a one-letter scheme
        assert!(matches!(
            ImageSource::parse("c:/photos/room.jpg"),
            ImageSource::Path(_)
        ));
    }

    #[test]
    fn test_url_constructor_rejects_non_urls() {
        assert!(ImageSource::url("https://images.example/room.jpg").is_ok());

        let err = ImageSource::url("room.jpg").unwrap_err();
        assert!(matches!(err, Error::ImageSourceError(_)));

        let err = ImageSource::url("mailto:user@example.com").unwrap_err();
        assert!(matches!(err, Error::ImageSourceError(_)));
    }

    #[test]
    fn test_kind() {
        assert_eq!(ImageSource::bytes(vec![1u8, 2]).kind(), "bytes");
        assert_eq!(ImageSource::path("room.jpg").kind(), "path");
        assert_eq!(
            ImageSource::url("https://images.example/a.jpg").unwrap().kind(),
            "url"
        );
    }

    #[test]
    fn test_from_conversions() {
        assert!(matches!(
            ImageSource::from("https://images.example/a.jpg"),
            ImageSource::Url(_)
        ));
        assert!(matches!(ImageSource::from("a.jpg"), ImageSource::Path(_)));
        assert!(matches!(
            ImageSource::from(vec![0xffu8, 0xd8]),
            ImageSource::Bytes(_)
        ));
    }

    #[tokio::test]
    async fn test_resolve_bytes_passthrough() {
        let data = vec![0xffu8, 0xd8, 0xff, 0xe0];
        let source = ImageSource::bytes(data.clone());
        let resolved = source.resolve(&reqwest::Client::new()).await.unwrap();
        assert_eq!(resolved, Bytes::from(data));
    }

    #[tokio::test]
    async fn test_resolve_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"jpeg-bytes").unwrap();

        let source = ImageSource::path(file.path());
        let resolved = source.resolve(&reqwest::Client::new()).await.unwrap();
        assert_eq!(resolved, Bytes::from_static(b"jpeg-bytes"));
    }

    #[tokio::test]
    async fn test_resolve_missing_file() {
        let source = ImageSource::path("/nonexistent/room.jpg");
        let err = source.resolve(&reqwest::Client::new()).await.unwrap_err();
        assert!(matches!(err, Error::ImageSourceError(_)));
        assert!(err.to_string().contains("/nonexistent/room.jpg"));
    }

    #[tokio::test]
    async fn test_resolve_fetches_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/room.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"remote-bytes".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let source = ImageSource::url(format!("{}/room.jpg", server.uri())).unwrap();
        let resolved = source.resolve(&reqwest::Client::new()).await.unwrap();
        assert_eq!(resolved, Bytes::from_static(b"remote-bytes"));
    }

    #[tokio::test]
    async fn test_resolve_url_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing.jpg"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let source = ImageSource::url(format!("{}/missing.jpg", server.uri())).unwrap();
        let err = source.resolve(&reqwest::Client::new()).await.unwrap_err();
        assert!(matches!(err, Error::ImageSourceError(_)));
    }

    #[test]
    fn test_equivalent_sources_compare_equal() {
        let a = ImageSource::parse("https://images.example/room.jpg");
        let b = ImageSource::url("https://images.example/room.jpg").unwrap();
        assert_eq!(a, b);
    }

    // All three variants must hand the transport the same bytes for the
    // same logical image.
    #[tokio::test]
    async fn test_variants_resolve_to_identical_bytes() {
        let data = b"identical-image-bytes".to_vec();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/room.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(data.clone()))
            .mount(&server)
            .await;

        let http = reqwest::Client::new();
        let from_bytes = ImageSource::bytes(data.clone()).resolve(&http).await.unwrap();
        let from_path = ImageSource::path(file.path()).resolve(&http).await.unwrap();
        let from_url = ImageSource::url(format!("{}/room.jpg", server.uri()))
            .unwrap()
            .resolve(&http)
            .await
            .unwrap();

        assert_eq!(from_bytes, from_path);
        assert_eq!(from_path, from_url);
    }
}
