// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};

/// Placeholder tokens recognized in the layout template
pub const TITLE_TOKEN: &str = "{{title}}";
pub const CONTENT_TOKEN: &str = "{{content}}";
pub const IMAGE_URL_TOKEN: &str = "{{imageUrl}}";

/// File name attached to the rendered download
pub const DOWNLOAD_FILENAME: &str = "renderedTemplate.html";

/// The fields a render request may carry. Absent fields substitute as
/// the empty string.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
}

impl RenderRequest {
    /// The ordered token/value substitution list for this request
    pub fn substitutions(&self) -> [(&'static str, &str); 3] {
        [
            (TITLE_TOKEN, self.title.as_str()),
            (CONTENT_TOKEN, self.content.as_str()),
            (IMAGE_URL_TOKEN, self.image_url.as_str()),
        ]
    }
}

/// Apply an ordered list of literal token substitutions to a layout.
///
/// Only the FIRST occurrence of each token is replaced; later occurrences
/// are left untouched. Tokens missing from the layout are skipped. This
/// single-occurrence behavior is intentional and relied upon by clients.
pub fn render_layout(layout: &str, substitutions: &[(&str, &str)]) -> String {
    let mut rendered = layout.to_string();
    for (token, value) in substitutions {
        rendered = rendered.replacen(token, value, 1);
    }
    rendered
}
