/*
 * Copyright (c) 2025 Yiff Guru Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v1::properties::Rating;
use num_enum::TryFromPrimitiveError;
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum YiffGuruError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("An api key is required")]
    ApiKeyRequired(),

    #[error("An album title is required")]
    AlbumTitleRequired(),

    #[error("Provided file \"{0}\" does not exist")]
    FileNotFound(String),

    #[error("Base64 decode error")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("Rating is not one of the accepted values")]
    InvalidRating(#[from] TryFromPrimitiveError<Rating>),

    #[error("Invalid JSON content at {url}: {body}")]
    ApiResponseMalformed { url: String, body: String },
}
