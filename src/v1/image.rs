/*
 * Copyright (c) 2025 Yiff Guru Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use serde::Deserialize;

/// Holds information returned from a successful image upload.
#[derive(Deserialize, Debug)]
pub struct Image {
    pub id: String,
}
