use pixel_engine::{
    ArtworkDocument, BitmapImage, Color, ColorPalette, DecodedArtwork, PixelBuffer, PixelImage, PointTransform, Position, Rectangle, Result,
    SelectedRegion, SemanticIdentifier, SemanticPixel, Size,
    shapes::{get_ellipse_points, get_line_points},
};

use crate::{ArtworkMetadata, EngineConfig, History, Operation, UndoState};

/// An editable artwork: the semantic pixel layer, its palette and semantic tree, and the
/// history of every edit.
///
/// All mutations go through methods that record an [`Operation`] first, so they can be undone.
/// Not thread safe; callers serialize access per artwork.
pub struct Artwork {
    id: String,
    root: SemanticIdentifier,
    image: PixelImage,
    palette: ColorPalette,
    history: History<SemanticPixel>,
    bitmap: Option<BitmapImage>,
    config: EngineConfig,
}

impl Default for Artwork {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Artwork {
    /// Blank canvas of `config.default_size` filled with the default semantic and color id.
    pub fn new(config: EngineConfig) -> Self {
        let size = config.default_size;
        Self::with_size(size, config)
    }

    pub fn with_size(size: impl Into<Size>, config: EngineConfig) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            root: SemanticIdentifier::root(),
            image: PixelBuffer::new(size, SemanticPixel::default()),
            palette: ColorPalette::new(config.default_color),
            history: History::new(),
            bitmap: None,
            config,
        }
    }

    pub fn from_decoded(decoded: DecodedArtwork, config: EngineConfig) -> Self {
        Self {
            id: decoded.id,
            root: decoded.root,
            image: decoded.image,
            palette: decoded.palette,
            history: History::new(),
            bitmap: None,
            config,
        }
    }

    /// # Errors
    ///
    /// Fails if the document is inconsistent, see [`ArtworkDocument::decode`].
    pub fn from_document(document: ArtworkDocument, config: EngineConfig) -> Result<Self> {
        let decoded = document.decode()?;
        Ok(Self::from_decoded(decoded, config))
    }

    /// Like [`Artwork::from_document`] but substitutes a blank artwork for a broken document.
    pub fn from_document_or_default(document: ArtworkDocument, config: EngineConfig) -> Self {
        let id = document.id.clone();
        match document.decode() {
            Ok(decoded) => Self::from_decoded(decoded, config),
            Err(err) => {
                log::error!("artwork {id} failed to load: {err}");
                let mut artwork = Self::new(config);
                artwork.id = id;
                artwork
            }
        }
    }

    /// # Errors
    ///
    /// Fails on malformed JSON or an inconsistent document.
    pub fn from_json(text: &str, config: EngineConfig) -> Result<Self> {
        Self::from_document(ArtworkDocument::from_json(text)?, config)
    }

    pub fn to_document(&self) -> ArtworkDocument {
        ArtworkDocument::encode(&self.id, &self.root, &self.image, &self.palette)
    }

    /// # Errors
    ///
    /// Fails if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        self.to_document().to_json(self.config.pretty_print)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn size(&self) -> Size {
        self.image.size()
    }

    pub fn root(&self) -> &SemanticIdentifier {
        &self.root
    }

    pub fn image(&self) -> &PixelImage {
        &self.image
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Palette edits aren't recorded in the history but do recolor the bitmap.
    pub fn palette_mut(&mut self) -> &mut ColorPalette {
        self.bitmap = None;
        &mut self.palette
    }

    pub fn history(&self) -> &History<SemanticPixel> {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Appends a semantic named `name` below `parent` and returns its id.
    pub fn add_semantic(&mut self, parent: i32, name: impl Into<String>) -> Option<i32> {
        self.root.add_child(parent, name)
    }

    /// Composited colors, recomputed after every mutation.
    pub fn bitmap_image(&mut self) -> &BitmapImage {
        let image = &self.image;
        let palette = &self.palette;
        self.bitmap.get_or_insert_with(|| image.map(|pixel| palette.resolve(pixel.color)))
    }

    pub fn render_bitmap(&self) -> BitmapImage {
        self.image.map(|pixel| self.palette.resolve(pixel.color))
    }

    /// Composited colors in row-major order, the shape peers exchange.
    pub fn flattened_pixels(&self) -> Vec<Color> {
        self.render_bitmap().into_cells()
    }

    pub fn metadata(&self) -> ArtworkMetadata {
        ArtworkMetadata {
            id: self.id.clone(),
            size: self.size(),
            palette_size: self.palette.len(),
            semantic_count: self.root.ids().len() - 1,
        }
    }

    fn log_operation(&self, action: &str, operation: &Operation<SemanticPixel>) {
        log::log!(self.config.operation_log_level(), "{action} '{}' on artwork {}", operation.description(), self.id);
    }

    /// True if `pixel` references a semantic of this artwork's tree.
    fn knows_semantic(&self, pixel: SemanticPixel) -> bool {
        if self.root.contains(pixel.semantic) {
            return true;
        }
        log::warn!("semantic {} is not part of artwork {}, edit ignored", pixel.semantic, self.id);
        false
    }

    fn apply(&mut self, operation: Operation<SemanticPixel>) {
        operation.redo(&mut self.image);
        self.log_operation("record", &operation);
        self.history.record(operation);
        self.bitmap = None;
    }

    /// Writes `pixel` at every valid point. Invalid points are skipped, a `pixel` with an
    /// unknown semantic is ignored.
    pub fn assign(&mut self, pixel: SemanticPixel, points: Vec<Position>) {
        if !self.knows_semantic(pixel) {
            return;
        }
        let total = points.len();
        let points: Vec<Position> = points.into_iter().filter(|pos| self.image.is_valid(*pos)).collect();
        if points.len() < total {
            log::warn!("assign: skipped {} points outside of {}", total - points.len(), self.size());
        }
        if points.is_empty() {
            return;
        }
        let operation = Operation::assignment(&self.image, points, &pixel);
        self.apply(operation);
    }

    pub fn draw_line(&mut self, from: Position, to: Position, pixel: SemanticPixel) {
        self.assign(pixel, get_line_points(from, to));
    }

    pub fn draw_ellipse(&mut self, from: Position, to: Position, pixel: SemanticPixel) {
        self.assign(pixel, get_ellipse_points(from, to));
    }

    /// Paint bucket: assigns `pixel` to the area 4-connected to `start` that equals the pixel at `start`.
    pub fn fill(&mut self, start: Position, pixel: SemanticPixel) {
        if !self.image.is_valid(start) {
            return;
        }
        let original = *self.image.get(start);
        if original == pixel {
            return;
        }
        let points = self.image.flood_search(start, |_, candidate| *candidate == original);
        self.assign(pixel, points);
    }

    /// Mirrors (per flag) and moves the selected pixels, filling the vacated cells with `background`.
    pub fn transform(&mut self, selection: &SelectedRegion, flip_horizontal: bool, flip_vertical: bool, offset: Position, background: SemanticPixel) {
        let transform = PointTransform::new(selection.bounding_rectangle(), flip_horizontal, flip_vertical, offset);
        if transform.is_identity() || selection.is_empty() || !self.knows_semantic(background) {
            return;
        }
        let points: Vec<Position> = selection.selected_points().into_iter().filter(|pos| self.image.is_valid(*pos)).collect();
        let operation = Operation::transformation(&self.image, points, transform, background);
        self.apply(operation);
    }

    /// Moves the rectangle spanned by `p1`/`p2` by `offset`, leaving `background` behind.
    pub fn move_rectangle(&mut self, p1: Position, p2: Position, offset: Position, background: SemanticPixel) {
        let rect = Rectangle::from_pt(p1, p2);
        let points: Vec<Position> = rect.points().filter(|pos| self.image.is_valid(*pos)).collect();
        if points.is_empty() || offset == Position::ZERO || !self.knows_semantic(background) {
            return;
        }
        let operation = Operation::transformation(&self.image, points, PointTransform::translation(rect, offset), background);
        self.apply(operation);
    }
}

impl UndoState for Artwork {
    fn undo_description(&self) -> Option<String> {
        self.history.head_operation().map(Operation::description)
    }

    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn undo(&mut self) -> bool {
        if let Some(operation) = self.history.head_operation() {
            self.log_operation("undo", operation);
        }
        let changed = self.history.undo(&mut self.image);
        if changed {
            self.bitmap = None;
        }
        changed
    }

    fn redo_description(&self) -> Option<String> {
        self.history.redo_operation().map(Operation::description)
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn redo(&mut self) -> bool {
        if let Some(operation) = self.history.redo_operation() {
            self.log_operation("redo", operation);
        }
        let changed = self.history.redo(&mut self.image);
        if changed {
            self.bitmap = None;
        }
        changed
    }
}
