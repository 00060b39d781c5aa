//! Wire shapes exchanged with the device-sync peer.
//!
//! The transport lives outside the engine; these types only pin down what an artwork has to
//! produce for it: a metadata entry and its flattened RGBA buffer.

use std::collections::BTreeMap;

use pixel_engine::{Color, Size};
use serde::{Deserialize, Serialize};

use crate::Artwork;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Only artworks whose id contains this text are sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub base_directory: String,
}

impl SyncRequest {
    pub fn matches(&self, metadata: &ArtworkMetadata) -> bool {
        self.filter.as_deref().is_none_or(|filter| metadata.id.contains(filter))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkMetadata {
    pub id: String,
    pub size: Size,
    pub palette_size: usize,
    /// Semantics below the root, "Default" included.
    pub semantic_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    pub artwork_list: Vec<ArtworkMetadata>,
    pub pixel_data: BTreeMap<String, Vec<Color>>,
}

impl SyncResponse {
    pub fn from_artworks<'a>(request: &SyncRequest, artworks: impl IntoIterator<Item = &'a Artwork>) -> Self {
        let mut response = SyncResponse::default();
        for artwork in artworks {
            let metadata = artwork.metadata();
            if !request.matches(&metadata) {
                continue;
            }
            response.pixel_data.insert(metadata.id.clone(), artwork.flattened_pixels());
            response.artwork_list.push(metadata);
        }
        log::debug!("sync response with {} artworks for {}", response.artwork_list.len(), request.base_directory);
        response
    }
}
