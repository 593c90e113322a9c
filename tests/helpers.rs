/*
 * Copyright (c) 2025 Yiff Guru Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde_json::{Value, json};

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn album_created_response(id: &str, title: &str) -> Value {
    json!({
        "success": true,
        "data": {
            "id": id,
            "title": title,
            "tags": "commission digital",
            "creator": "1098762",
            "artist": "ArtistX",
            "vanity": null,
            "externalLinks": [
                { "type": "twitter", "info": "artistx" }
            ]
        }
    })
}

#[allow(dead_code)]
pub(crate) fn image_uploaded_response(id: &str) -> Value {
    json!({
        "success": true,
        "data": { "id": id }
    })
}

#[allow(dead_code)]
pub(crate) fn failure_response(error: &str) -> Value {
    json!({
        "success": false,
        "error": error
    })
}
