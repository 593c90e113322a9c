/*
 * Copyright (c) 2025 Yiff Guru Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod album;
pub mod client;
pub mod errors;
pub mod image;
pub mod input;
pub mod properties;

pub use album::*;
pub use client::*;
pub use errors::*;
pub use image::*;
pub use input::*;
pub use properties::*;
