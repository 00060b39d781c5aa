//! Artwork editing tests
//!
//! Every edit has to be undoable, and undo/redo must walk exactly through the recorded states.

use pixel_engine_edit::{
    Artwork, Color, EngineConfig, HistoryState, PixelImage, Position, Rectangle, SelectedRegion, SemanticPixel, Size, UndoState,
};
use pretty_assertions::assert_eq;

const RED: Color = Color::opaque(0xFF, 0, 0);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn artwork(width: i32, height: i32) -> Artwork {
    init_logging();
    Artwork::with_size((width, height), EngineConfig::default())
}

fn pixel_at(artwork: &Artwork, x: i32, y: i32) -> SemanticPixel {
    *artwork.image().get(Position::new(x, y))
}

#[test]
fn test_new_artwork() {
    init_logging();
    let artwork = Artwork::default();
    assert_eq!(Size::new(32, 32), artwork.size());
    assert_eq!(1, artwork.palette().len());
    assert_eq!(Color::WHITE, artwork.palette().resolve(0));
    assert!(artwork.root().contains(0));
    assert_eq!(HistoryState::Empty, artwork.history().state());
    assert!(artwork.image().cells().iter().all(|pixel| *pixel == SemanticPixel::default()));
    assert!(uuid::Uuid::parse_str(artwork.id()).is_ok());
    assert_ne!(artwork.id(), Artwork::default().id());
}

#[test]
fn test_paint_bucket_fills_uniform_canvas() {
    let mut artwork = artwork(4, 4);
    let red = artwork.palette_mut().add(RED, false);
    let pixel = SemanticPixel::new(0, red);

    artwork.fill(Position::new(0, 0), pixel);

    assert!(artwork.image().cells().iter().all(|cell| *cell == pixel));
    assert_eq!(1, artwork.history().len());
}

#[test]
fn test_paint_bucket_stops_at_borders() {
    let mut artwork = artwork(4, 3);
    let wall = SemanticPixel::new(0, 1);
    let paint = SemanticPixel::new(0, 2);
    artwork.draw_line(Position::new(2, 0), Position::new(2, 2), wall);

    artwork.fill(Position::new(0, 1), paint);

    for y in 0..3 {
        assert_eq!(paint, pixel_at(&artwork, 0, y));
        assert_eq!(paint, pixel_at(&artwork, 1, y));
        assert_eq!(wall, pixel_at(&artwork, 2, y));
        assert_eq!(SemanticPixel::default(), pixel_at(&artwork, 3, y));
    }
}

#[test]
fn test_fill_with_same_pixel_is_noop() {
    let mut artwork = artwork(4, 4);
    artwork.fill(Position::new(1, 1), SemanticPixel::default());
    artwork.fill(Position::new(-1, 1), SemanticPixel::new(0, 1));
    assert!(artwork.history().is_empty());
}

#[test]
fn test_undo_redo_walks_through_every_state() {
    let mut artwork = artwork(8, 8);
    let skin = artwork.add_semantic(0, "skin").unwrap();
    let p1 = SemanticPixel::new(skin, 1);
    let p2 = SemanticPixel::new(0, 2);
    let p3 = SemanticPixel::new(skin, 3);

    let mut states: Vec<PixelImage> = vec![artwork.image().clone()];

    artwork.assign(p1, vec![Position::new(0, 0), Position::new(1, 1), Position::new(1, 1)]);
    states.push(artwork.image().clone());

    artwork.draw_line(Position::new(0, 7), Position::new(7, 0), p2);
    states.push(artwork.image().clone());

    artwork.draw_ellipse(Position::new(1, 1), Position::new(6, 5), p3);
    states.push(artwork.image().clone());

    let selection = SelectedRegion::from_points(artwork.size(), &Rectangle::from_coords(0, 0, 3, 3).points().collect::<Vec<_>>());
    artwork.transform(&selection, true, false, Position::new(2, 1), SemanticPixel::default());
    states.push(artwork.image().clone());

    artwork.move_rectangle(Position::new(4, 4), Position::new(7, 7), Position::new(-2, -3), p1);
    states.push(artwork.image().clone());

    artwork.fill(Position::new(7, 7), p2);
    states.push(artwork.image().clone());

    assert_eq!(6, artwork.history().len());
    for window in states.windows(2) {
        assert_ne!(window[0], window[1]);
    }

    for expected in states.iter().rev().skip(1) {
        assert!(artwork.undo());
        assert_eq!(expected, artwork.image());
    }
    assert!(!artwork.undo());

    for expected in states.iter().skip(1) {
        assert!(artwork.redo());
        assert_eq!(expected, artwork.image());
    }
    assert!(!artwork.redo());
}

#[test]
fn test_redo_after_fresh_edit_is_noop() {
    let mut artwork = artwork(4, 4);
    let a = SemanticPixel::new(0, 1);
    let b = SemanticPixel::new(0, 2);

    artwork.assign(a, vec![Position::new(0, 0)]);
    assert!(artwork.undo());
    artwork.assign(b, vec![Position::new(1, 0)]);

    assert!(!artwork.can_redo());
    assert!(!artwork.redo());
    assert_eq!(b, pixel_at(&artwork, 1, 0));
    assert_eq!(SemanticPixel::default(), pixel_at(&artwork, 0, 0));
}

#[test]
fn test_undo_descriptions() {
    let mut artwork = artwork(4, 4);
    assert_eq!(None, artwork.undo_description());

    artwork.draw_line(Position::new(0, 0), Position::new(3, 0), SemanticPixel::new(0, 1));
    assert_eq!(Some("Set 4 pixels".to_string()), artwork.undo_description());
    assert_eq!(None, artwork.redo_description());

    artwork.undo();
    assert_eq!(None, artwork.undo_description());
    assert_eq!(Some("Set 4 pixels".to_string()), artwork.redo_description());
}

#[test]
fn test_assign_skips_points_outside() {
    let mut artwork = artwork(4, 4);
    artwork.assign(SemanticPixel::new(0, 1), vec![Position::new(-1, 0), Position::new(4, 4)]);
    assert!(artwork.history().is_empty());

    artwork.draw_line(Position::new(-5, 0), Position::new(2, 0), SemanticPixel::new(0, 1));
    assert_eq!(3, artwork.history().head_operation().unwrap().points().len());
}

#[test]
fn test_move_rectangle() {
    let mut artwork = artwork(4, 4);
    let shape = SemanticPixel::new(0, 5);
    artwork.assign(shape, vec![Position::new(1, 1)]);

    artwork.move_rectangle(Position::new(0, 0), Position::new(2, 2), Position::new(1, 0), SemanticPixel::default());
    assert_eq!(shape, pixel_at(&artwork, 2, 1));
    assert_eq!(SemanticPixel::default(), pixel_at(&artwork, 1, 1));

    artwork.undo();
    assert_eq!(shape, pixel_at(&artwork, 1, 1));
    assert_eq!(SemanticPixel::default(), pixel_at(&artwork, 2, 1));
}

#[test]
fn test_flip_undo_redo() {
    let mut artwork = artwork(4, 1);
    for x in 0..4 {
        artwork.assign(SemanticPixel::new(0, x as u32 + 1), vec![Position::new(x, 0)]);
    }
    let selection = SelectedRegion::from_points(artwork.size(), &[Position::new(0, 0), Position::new(1, 0)]);

    artwork.transform(&selection, true, false, Position::ZERO, SemanticPixel::default());
    let colors = |artwork: &Artwork| artwork.image().cells().iter().map(|pixel| pixel.color).collect::<Vec<_>>();
    assert_eq!(vec![2, 1, 3, 4], colors(&artwork));

    artwork.undo();
    assert_eq!(vec![1, 2, 3, 4], colors(&artwork));

    artwork.redo();
    assert_eq!(vec![2, 1, 3, 4], colors(&artwork));
}

#[test]
fn test_degenerate_edits_are_not_recorded() {
    let mut artwork = artwork(4, 4);
    let selection = SelectedRegion::new(artwork.size());
    artwork.transform(&selection, true, true, Position::new(1, 1), SemanticPixel::default());

    let selection = SelectedRegion::from_points(artwork.size(), &[Position::new(1, 1)]);
    artwork.transform(&selection, false, false, Position::ZERO, SemanticPixel::default());

    artwork.move_rectangle(Position::new(0, 0), Position::new(2, 2), Position::ZERO, SemanticPixel::default());
    artwork.move_rectangle(Position::new(8, 8), Position::new(9, 9), Position::new(1, 0), SemanticPixel::default());

    assert!(artwork.history().is_empty());
}

#[test]
fn test_bitmap_follows_edits() {
    let mut artwork = artwork(2, 2);
    assert_eq!(Color::WHITE, *artwork.bitmap_image().get(Position::new(0, 0)));

    let red = artwork.palette_mut().add(RED, false);
    artwork.assign(SemanticPixel::new(0, red), vec![Position::new(0, 0)]);
    assert_eq!(RED, *artwork.bitmap_image().get(Position::new(0, 0)));

    artwork.undo();
    assert_eq!(Color::WHITE, *artwork.bitmap_image().get(Position::new(0, 0)));

    artwork.palette_mut().set(0, Color::BLACK);
    assert_eq!(Color::BLACK, *artwork.bitmap_image().get(Position::new(1, 1)));
    assert_eq!(vec![Color::BLACK; 4], artwork.flattened_pixels());
}

#[test]
fn test_json_round_trip() {
    let mut artwork = artwork(5, 3);
    let skin = artwork.add_semantic(0, "skin").unwrap();
    let red = artwork.palette_mut().add(RED, true);
    artwork.draw_ellipse(Position::new(0, 0), Position::new(4, 2), SemanticPixel::new(skin, red));

    let json = artwork.to_json().unwrap();
    let loaded = Artwork::from_json(&json, EngineConfig::default()).unwrap();

    assert_eq!(artwork.id(), loaded.id());
    assert_eq!(artwork.image(), loaded.image());
    assert_eq!(artwork.root(), loaded.root());
    assert_eq!(artwork.palette().colors(), loaded.palette().colors());
    assert!(loaded.history().is_empty());
}

#[test]
fn test_pretty_json() {
    init_logging();
    let config = EngineConfig {
        pretty_print: true,
        ..Default::default()
    };
    let artwork = Artwork::with_size((1, 1), config);
    assert!(artwork.to_json().unwrap().contains('\n'));
}

#[test]
fn test_broken_document_falls_back_to_blank() {
    let artwork = artwork(3, 3);
    let mut document = artwork.to_document();
    document.semantics.truncate(1);

    assert!(Artwork::from_document(document.clone(), EngineConfig::default()).is_err());

    let fallback = Artwork::from_document_or_default(document, EngineConfig::default());
    assert_eq!(Size::new(32, 32), fallback.size());
    assert_eq!(artwork.id(), fallback.id());
    assert!(fallback.history().is_empty());
}

#[test]
fn test_unknown_semantic_is_not_written() {
    let mut artwork = artwork(3, 3);
    let stranger = SemanticPixel::new(42, 1);

    artwork.assign(stranger, vec![Position::new(0, 0)]);
    artwork.draw_line(Position::new(0, 0), Position::new(2, 2), stranger);
    artwork.fill(Position::new(1, 1), stranger);
    let selection = SelectedRegion::from_points(artwork.size(), &[Position::new(0, 0)]);
    artwork.transform(&selection, false, false, Position::new(1, 0), stranger);
    artwork.move_rectangle(Position::new(0, 0), Position::new(1, 1), Position::new(1, 1), stranger);

    assert!(artwork.history().is_empty());
    assert!(artwork.image().cells().iter().all(|pixel| *pixel == SemanticPixel::default()));

    let loaded = Artwork::from_json(&artwork.to_json().unwrap(), EngineConfig::default()).unwrap();
    assert_eq!(artwork.image(), loaded.image());
}

#[test]
fn test_semantic_added_later_can_be_written() {
    let mut artwork = artwork(2, 2);
    let pixel = SemanticPixel::new(1, 0);
    artwork.assign(pixel, vec![Position::new(1, 1)]);
    assert!(artwork.history().is_empty());

    assert_eq!(Some(1), artwork.add_semantic(0, "skin"));
    artwork.assign(pixel, vec![Position::new(1, 1)]);
    assert_eq!(pixel, pixel_at(&artwork, 1, 1));

    let loaded = Artwork::from_json(&artwork.to_json().unwrap(), EngineConfig::default()).unwrap();
    assert_eq!(artwork.image(), loaded.image());
}

#[test]
fn test_flip_twice_restores_selection() {
    let mut artwork = artwork(4, 3);
    for y in 0..3 {
        for x in 0..4 {
            artwork.assign(SemanticPixel::new(0, (y * 4 + x) as u32), vec![Position::new(x, y)]);
        }
    }
    let before = artwork.image().clone();
    let selection = SelectedRegion::from_points(artwork.size(), &Rectangle::from_coords(1, 0, 3, 1).points().collect::<Vec<_>>());

    artwork.transform(&selection, true, false, Position::ZERO, SemanticPixel::default());
    assert_ne!(&before, artwork.image());
    assert_eq!(SemanticPixel::new(0, 3), pixel_at(&artwork, 1, 0));

    artwork.transform(&selection, true, false, Position::ZERO, SemanticPixel::default());
    assert_eq!(&before, artwork.image());

    artwork.undo();
    artwork.undo();
    assert_eq!(&before, artwork.image());
}

#[test]
fn test_metadata() {
    let mut artwork = artwork(6, 2);
    artwork.add_semantic(0, "skin");
    artwork.palette_mut().add(RED, false);

    let metadata = artwork.metadata();
    assert_eq!(artwork.id(), metadata.id);
    assert_eq!(Size::new(6, 2), metadata.size);
    assert_eq!(2, metadata.palette_size);
    assert_eq!(2, metadata.semantic_count);
}
