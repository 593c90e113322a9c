/*
 * Copyright (c) 2025 Yiff Guru Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize, Serializer};
use strum_macros::{EnumString, IntoStaticStr};

/// Platforms an album can carry an external profile link for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExternalLinkType {
    E621,
    FurAffinity,
    Inkbunny,
    Patreon,
    Twitter,
    DeviantArt,
}

/// A reference to a profile on a third-party platform, attached to an
/// album. The `info` field is opaque to this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    #[serde(rename = "type")]
    pub link_type: ExternalLinkType,

    pub info: String,
}

/// Image rating accepted on upload.
///
/// The scale is defined by the Yiff Guru service and travels as a bare
/// integer; the variant names are client-side labels for the wire values
/// -1 through 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(i8)]
pub enum Rating {
    Unrated = -1,
    General = 0,
    Mature = 1,
    Explicit = 2,
    Extreme = 3,
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i8((*self).into())
    }
}
