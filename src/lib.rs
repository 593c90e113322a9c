/*
 * Copyright (c) 2025 Yiff Guru Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Yiff Guru
//!
//! This library was created for working with the Yiff Guru APIv1 interface.
//!
//! ## Features
//!
//! - Album creation
//! - Image upload into an existing album
//!     - Accepts raw bytes, a URL, a local file path, or a base64 string
//!     - URLs are fetched and file paths are read before the upload
//!
//! *Authentication uses a single static API key sent on every request.
//! Obtaining the key is left up to the consumer of this library.*
//!
//! *The service reports application-level rejections inside a
//! success/failure envelope rather than through HTTP statuses, so every
//! call returns a [`v1::ApiResult`] to match on.*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! yiffguru = "0.2.0"
//! ```
//!
//! ## Usage
//!
//! **You will need an API key from Yiff Guru prior to using the API**
//!
//! ```rust
//! use yiffguru::v1::{ApiResult, Client, CreateAlbumProps, Rating};
//!
//! async fn create_and_upload(api_key: &str, image: &[u8]) -> anyhow::Result<()> {
//!     let client = Client::new(api_key)?;
//!
//!     // Create the album to upload into
//!     let created = client
//!         .create_album(CreateAlbumProps {
//!             title: "Commissions".into(),
//!             artist: Some("ArtistX".into()),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     if let ApiResult::Success(album) = created {
//!         // Upload raw bytes; a URL, file path, or base64 string works too
//!         match client
//!             .add_image_to_album(image, &album.id, Some(Rating::General))
//!             .await?
//!         {
//!             ApiResult::Success(img) => println!("uploaded image {}", img.id),
//!             ApiResult::Failure(reason) => eprintln!("upload rejected: {reason}"),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
pub mod v1;
