/*
 * Copyright (c) 2025 Yiff Guru Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v1::errors::YiffGuruError;
use base64::Engine;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use bytes::Bytes;
use regex::Regex;
use std::sync::LazyLock;

// Heuristic for URL-looking strings, not a URL grammar. It is loose on
// purpose and not anchored to the start of the input.
static HTTP_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)",
    )
    .unwrap()
});

// Decoder that accepts padded and unpadded payloads alike.
const BASE64_PADDING_INDIFFERENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// An image to upload, in any of the accepted shapes.
///
/// `From` conversions cover byte buffers, parsed URLs, and strings; a
/// string is classified on upload as a URL, a local file path, or a base64
/// payload.
#[derive(Debug, Clone)]
pub enum ImageInput {
    /// Raw image bytes.
    Bytes(Bytes),

    /// A previously parsed URL to fetch the image from.
    Url(url::Url),

    /// A string classified at upload time.
    Text(String),
}

impl From<Bytes> for ImageInput {
    fn from(bytes: Bytes) -> Self {
        ImageInput::Bytes(bytes)
    }
}

impl From<Vec<u8>> for ImageInput {
    fn from(bytes: Vec<u8>) -> Self {
        ImageInput::Bytes(bytes.into())
    }
}

impl From<&[u8]> for ImageInput {
    fn from(bytes: &[u8]) -> Self {
        ImageInput::Bytes(Bytes::copy_from_slice(bytes))
    }
}

impl From<url::Url> for ImageInput {
    fn from(url: url::Url) -> Self {
        ImageInput::Url(url)
    }
}

impl From<String> for ImageInput {
    fn from(text: String) -> Self {
        ImageInput::Text(text)
    }
}

impl From<&str> for ImageInput {
    fn from(text: &str) -> Self {
        ImageInput::Text(text.to_string())
    }
}

/// An image input normalized to the bytes to upload plus an optional
/// filename to attach as metadata. Built per upload and discarded once the
/// request body is assembled.
#[derive(Debug)]
pub(crate) struct ResolvedImage {
    pub(crate) bytes: Bytes,
    pub(crate) file_name: Option<String>,
}

// What a text input turned out to be. Classification is ordered and the
// first match wins; reordering changes which branch ambiguous inputs take.
#[derive(Debug)]
pub(crate) enum Classified {
    Url(url::Url),
    Path { path: String, file_name: String },
    Base64(String),
}

// Ordered classifier: URL pattern, then `<dir>/<name>`, then base64.
//
// A URL-looking substring anywhere in the input selects the URL branch,
// after which the whole string must still parse as a URL. The path branch
// requires a non-empty part on both sides of the last separator; existence
// of the file is checked by the resolver, not here.
pub(crate) fn classify(text: &str) -> Result<Classified, YiffGuruError> {
    if HTTP_URL_REGEX.is_match(text) {
        return Ok(Classified::Url(url::Url::parse(text)?));
    }

    if let Some((dir, name)) = text.rsplit_once('/') {
        if !dir.is_empty() && !name.is_empty() {
            return Ok(Classified::Path {
                path: text.to_string(),
                file_name: name.to_string(),
            });
        }
    }

    Ok(Classified::Base64(text.to_string()))
}

pub(crate) fn resolve_path(path: &str, file_name: &str) -> Result<ResolvedImage, YiffGuruError> {
    if !std::path::Path::new(path).exists() {
        return Err(YiffGuruError::FileNotFound(path.to_string()));
    }
    let bytes = std::fs::read(path)?;
    Ok(ResolvedImage {
        bytes: bytes.into(),
        file_name: Some(file_name.to_string()),
    })
}

pub(crate) fn resolve_base64(text: &str) -> Result<ResolvedImage, YiffGuruError> {
    let bytes = BASE64_PADDING_INDIFFERENT.decode(text)?;
    Ok(ResolvedImage {
        bytes: bytes.into(),
        file_name: None,
    })
}

// Final segment of the URL path, kept in its percent-encoded form. Empty
// for URLs with a bare `/` path.
pub(crate) fn file_name_from_url(url: &url::Url) -> Option<String> {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .map(|segment| segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use std::io::Write;

    #[test]
    fn url_strings_classify_as_urls() {
        let classified = classify("https://example.com/images/photo.png?size=full").unwrap();
        match classified {
            Classified::Url(url) => {
                assert_eq!(url.host_str(), Some("example.com"));
                assert_eq!(url.path(), "/images/photo.png");
            }
            other => panic!("expected Url, got {other:?}"),
        }

        assert!(matches!(
            classify("http://www.example.org/a").unwrap(),
            Classified::Url(_)
        ));
    }

    #[test]
    fn url_match_inside_a_larger_string_fails_to_parse() {
        // The pattern is unanchored, so the URL branch is selected, but the
        // whole string is not a parseable URL.
        let err = classify("see https://example.com/a.png there").unwrap_err();
        assert!(matches!(err, YiffGuruError::UrlParsing(_)));
    }

    #[test]
    fn separator_strings_classify_as_paths() {
        match classify("albums/cover.png").unwrap() {
            Classified::Path { path, file_name } => {
                assert_eq!(path, "albums/cover.png");
                assert_eq!(file_name, "cover.png");
            }
            other => panic!("expected Path, got {other:?}"),
        }

        match classify("/var/tmp/cover.png").unwrap() {
            Classified::Path { file_name, .. } => assert_eq!(file_name, "cover.png"),
            other => panic!("expected Path, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_separator_strings_fall_through_to_base64() {
        // No non-empty part on both sides of the last separator.
        assert!(matches!(
            classify("trailing/").unwrap(),
            Classified::Base64(_)
        ));
        assert!(matches!(classify("/leading").unwrap(), Classified::Base64(_)));
    }

    #[test]
    fn plain_strings_classify_as_base64() {
        assert!(matches!(
            classify("aGVsbG8gd29ybGQ=").unwrap(),
            Classified::Base64(_)
        ));
    }

    #[test]
    fn base64_round_trips_with_no_filename() {
        let data = b"\x89PNG\r\n\x1a\n fake image body";
        let encoded = STANDARD.encode(data);

        let resolved = resolve_base64(&encoded).unwrap();
        assert_eq!(resolved.bytes.as_ref(), data);
        assert!(resolved.file_name.is_none());
        assert_eq!(STANDARD.encode(&resolved.bytes), encoded);
    }

    #[test]
    fn base64_accepts_unpadded_payloads() {
        let resolved = resolve_base64("aGVsbG8").unwrap();
        assert_eq!(resolved.bytes.as_ref(), b"hello");
    }

    #[test]
    fn invalid_base64_is_a_hard_failure() {
        let err = resolve_base64("definitely not base64!!!").unwrap_err();
        assert!(matches!(err, YiffGuruError::Base64Decode(_)));
    }

    #[test]
    fn existing_files_resolve_to_their_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        let contents = b"on-disk image bytes";
        std::fs::File::create(&path)
            .unwrap()
            .write_all(contents)
            .unwrap();

        let text = path.to_str().unwrap();
        let Classified::Path { path, file_name } = classify(text).unwrap() else {
            panic!("expected Path");
        };
        let resolved = resolve_path(&path, &file_name).unwrap();
        assert_eq!(resolved.bytes.as_ref(), contents);
        assert_eq!(resolved.file_name.as_deref(), Some("sample.png"));
    }

    #[test]
    fn missing_files_fail_without_reading() {
        let err = resolve_path("no/such/file.png", "file.png").unwrap_err();
        match err {
            YiffGuruError::FileNotFound(path) => assert_eq!(path, "no/such/file.png"),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn url_filenames_come_from_the_last_path_segment() {
        let url = url::Url::parse("https://example.com/a/b/photo.png?x=1").unwrap();
        assert_eq!(file_name_from_url(&url).as_deref(), Some("photo.png"));

        // A bare origin has `/` for a path, which names nothing.
        let url = url::Url::parse("https://example.com").unwrap();
        assert_eq!(file_name_from_url(&url).as_deref(), Some(""));
    }
}
