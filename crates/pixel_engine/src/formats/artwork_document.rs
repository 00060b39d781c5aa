use serde::{Deserialize, Serialize};

use crate::{Color, ColorIdentifier, ColorPalette, DecodingError, IdentifiableColor, PixelBuffer, PixelImage, Result, SemanticIdentifier, SemanticPixel, Size};

/// One artwork as stored on disk or sent to a peer.
///
/// `pixels` holds the composited colors so readers without a palette can still display the
/// artwork. `color_ids` carries the palette id of every pixel; documents written before it
/// existed recover the ids by looking the colors up in the palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDocument {
    pub pixels: Vec<Color>,
    pub semantics: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_ids: Option<Vec<ColorIdentifier>>,
    pub color_palettes: Vec<IdentifiableColor>,
    pub identifier_tree: SemanticIdentifier,
    pub size: Size,
    pub id: String,
}

/// The validated model parts of an [`ArtworkDocument`].
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedArtwork {
    pub id: String,
    pub root: SemanticIdentifier,
    pub image: PixelImage,
    pub palette: ColorPalette,
}

impl ArtworkDocument {
    pub fn encode(id: &str, root: &SemanticIdentifier, image: &PixelImage, palette: &ColorPalette) -> Self {
        let cells = image.cells();
        Self {
            pixels: cells.iter().map(|pixel| palette.resolve(pixel.color)).collect(),
            semantics: cells.iter().map(|pixel| pixel.semantic).collect(),
            color_ids: Some(cells.iter().map(|pixel| pixel.color).collect()),
            color_palettes: palette.colors().to_vec(),
            identifier_tree: root.clone(),
            size: image.size(),
            id: id.to_string(),
        }
    }

    /// Rebuilds the model, checking that the parallel arrays match `size` and that every
    /// referenced semantic id exists in the identifier tree.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn decode(self) -> std::result::Result<DecodedArtwork, DecodingError> {
        if self.size.width < 0 || self.size.height < 0 {
            return Err(DecodingError::InvalidSize { size: self.size });
        }
        let expected = self.size.area();
        if self.pixels.len() != expected || self.semantics.len() != expected {
            return Err(DecodingError::PixelCountMismatch {
                pixels: self.pixels.len(),
                semantics: self.semantics.len(),
                expected,
            });
        }

        self.identifier_tree.validate()?;
        if let Some(id) = self.semantics.iter().find(|id| !self.identifier_tree.contains(**id)) {
            return Err(DecodingError::UnknownSemantic { id: *id });
        }

        let mut palette = ColorPalette::from_colors(self.color_palettes)?;
        let color_ids = match self.color_ids {
            Some(ids) => {
                if ids.len() != expected {
                    return Err(DecodingError::ColorIdCountMismatch { expected, actual: ids.len() });
                }
                ids
            }
            None => self
                .pixels
                .iter()
                .map(|color| match palette.find_id(*color) {
                    Some(id) => id,
                    None => {
                        log::debug!("adding {color} to the palette of {}", self.id);
                        palette.add(*color, false)
                    }
                })
                .collect(),
        };

        let cells = self
            .semantics
            .iter()
            .zip(color_ids)
            .map(|(semantic, color)| SemanticPixel::new(*semantic, color))
            .collect();
        let image = PixelBuffer::from_cells(self.size, cells)?;

        Ok(DecodedArtwork {
            id: self.id,
            root: self.identifier_tree,
            image,
            palette,
        })
    }

    /// # Errors
    ///
    /// Fails if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let text = if pretty { serde_json::to_string_pretty(self)? } else { serde_json::to_string(self)? };
        Ok(text)
    }

    /// # Errors
    ///
    /// Fails on malformed JSON. The document isn't validated, see [`ArtworkDocument::decode`].
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
