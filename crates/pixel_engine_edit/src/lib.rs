#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::fn_params_excessive_bools,
    clippy::module_name_repetitions
)]

mod operation;
pub use operation::*;

mod history;
pub use history::*;

mod artwork;
pub use artwork::*;

mod config;
pub use config::*;

pub mod sync;
pub use sync::{ArtworkMetadata, SyncRequest, SyncResponse};

// Re-export the data model so callers only need this crate
pub use pixel_engine::{
    ArtworkDocument, BitmapImage, BoundarySegment, Color, ColorIdentifier, ColorPalette, DEFAULT_COLOR_ID, DEFAULT_SEMANTIC_ID, DecodedArtwork,
    DecodingError, EngineError, IdentifiableColor, PixelBuffer, PixelImage, PointTransform, Position, ROOT_SEMANTIC_ID, Rectangle, Result,
    SelectedRegion, SelectionMode, SemanticIdentifier, SemanticPixel, Size, shapes,
};
