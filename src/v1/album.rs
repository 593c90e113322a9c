/*
 * Copyright (c) 2025 Yiff Guru Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v1::properties::ExternalLink;
use serde::{Deserialize, Serialize};

/// Holds information returned from the Album API.
///
/// Albums are owned by the server; this client only sends the creation
/// request and receives this shape back. `artist` and `vanity` are nullable
/// on the wire, and `externalLinks` may be absent on older responses.
#[derive(Deserialize, Debug)]
pub struct Album {
    pub id: String,

    pub title: String,

    pub tags: String,

    pub creator: String,

    pub artist: Option<String>,

    pub vanity: Option<String>,

    #[serde(default, rename = "externalLinks")]
    pub external_links: Vec<ExternalLink>,
}

/// Properties that can be used in the creation of an Album
#[derive(Serialize, Default, Debug)]
pub struct CreateAlbumProps {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "externalLinks")]
    pub external_links: Option<Vec<ExternalLink>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}
