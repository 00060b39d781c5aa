use pixel_engine_edit::{Artwork, Color, EngineConfig, Position, SemanticPixel, Size, SyncRequest, SyncResponse};
use pretty_assertions::assert_eq;

fn request(filter: Option<&str>) -> SyncRequest {
    SyncRequest {
        project: Some("demo".to_string()),
        filter: filter.map(str::to_string),
        base_directory: "/tmp/artworks".to_string(),
    }
}

#[test]
fn test_response_contains_every_artwork() {
    let mut first = Artwork::with_size((2, 2), EngineConfig::default());
    let red = first.palette_mut().add(Color::opaque(0xFF, 0, 0), false);
    first.assign(SemanticPixel::new(0, red), vec![Position::new(1, 0)]);
    let second = Artwork::with_size((3, 1), EngineConfig::default());

    let response = SyncResponse::from_artworks(&request(None), [&first, &second]);

    assert_eq!(2, response.artwork_list.len());
    assert_eq!(first.id(), response.artwork_list[0].id);
    assert_eq!(Size::new(3, 1), response.artwork_list[1].size);
    assert_eq!(
        &vec![Color::WHITE, Color::opaque(0xFF, 0, 0), Color::WHITE, Color::WHITE],
        &response.pixel_data[first.id()]
    );
    assert_eq!(3, response.pixel_data[second.id()].len());
}

#[test]
fn test_filter_by_id() {
    let first = Artwork::with_size((2, 2), EngineConfig::default());
    let second = Artwork::with_size((2, 2), EngineConfig::default());

    let response = SyncResponse::from_artworks(&request(Some(second.id())), [&first, &second]);
    assert_eq!(1, response.artwork_list.len());
    assert_eq!(second.id(), response.artwork_list[0].id);
    assert!(!response.pixel_data.contains_key(first.id()));

    let response = SyncResponse::from_artworks(&request(Some("no such artwork")), [&first, &second]);
    assert!(response.artwork_list.is_empty());
    assert!(response.pixel_data.is_empty());
}

#[test]
fn test_wire_names() {
    let parsed: SyncRequest = serde_json::from_str(r#"{"baseDirectory": "/sync", "filter": "abc"}"#).unwrap();
    assert_eq!("/sync", parsed.base_directory);
    assert_eq!(Some("abc".to_string()), parsed.filter);
    assert_eq!(None, parsed.project);

    let artwork = Artwork::with_size((1, 1), EngineConfig::default());
    let response = SyncResponse::from_artworks(&request(None), [&artwork]);
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(1, value["artworkList"][0]["paletteSize"]);
    assert_eq!(1, value["artworkList"][0]["semanticCount"]);
    assert_eq!(255, value["pixelData"][artwork.id()][0]["a"]);
}
