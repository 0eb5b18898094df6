use super::*;

// =============================================================
// Canonical snake_case decoding
// =============================================================

#[test]
fn profile_decodes_minimal_payload() {
    let profile: UserProfile =
        serde_json::from_str(r#"{"id":"u1","display_name":"Jo"}"#).unwrap();
    assert_eq!(profile.id, "u1");
    assert_eq!(profile.display_name, "Jo");
    assert!(profile.email.is_empty());
    assert!(profile.images.is_empty());
}

#[test]
fn track_decodes_snake_case() {
    let track: Track = serde_json::from_str(
        r#"{"id":"t1","name":"Song","duration_ms":199000,"track_number":3}"#,
    )
    .unwrap();
    assert_eq!(track.duration_ms, 199_000);
    assert_eq!(track.track_number, Some(3));
    assert!(track.album.is_none());
}

#[test]
fn search_results_default_missing_buckets() {
    let results: SearchResults =
        serde_json::from_str(r#"{"tracks":[{"id":"t1","name":"Song"}]}"#).unwrap();
    assert_eq!(results.tracks.len(), 1);
    assert!(results.albums.is_empty());
    assert!(results.artists.is_empty());
    assert!(results.playlists.is_empty());
}

// =============================================================
// Legacy camelCase aliases
// =============================================================

#[test]
fn track_accepts_camel_case_aliases() {
    let track: Track = serde_json::from_str(
        r#"{"id":"t1","name":"Song","durationMs":65000,"previewURL":"https://x/p"}"#,
    )
    .unwrap();
    assert_eq!(track.duration_ms, 65_000);
    assert_eq!(track.preview_url.as_deref(), Some("https://x/p"));
}

#[test]
fn artist_page_accepts_camel_case_aliases() {
    let page: ArtistPage = serde_json::from_str(
        r#"{
            "artistProfile": {"id":"a1","name":"Band","followers":{"total":1200}},
            "topTracks": [{"id":"t1","name":"Hit"}],
            "albums": []
        }"#,
    )
    .unwrap();
    let artist = page.artist_profile.unwrap();
    assert_eq!(artist.name, "Band");
    assert_eq!(artist.followers.unwrap().total, 1200);
    assert_eq!(page.top_tracks.len(), 1);
}

#[test]
fn album_accepts_camel_case_aliases() {
    let album: Album = serde_json::from_str(
        r#"{"id":"al1","name":"LP","albumType":"album","totalTracks":12,"releaseDate":"2019-06-21"}"#,
    )
    .unwrap();
    assert_eq!(album.album_type.as_deref(), Some("album"));
    assert_eq!(album.total_tracks, Some(12));
    assert_eq!(album.release_date.as_deref(), Some("2019-06-21"));
}

// =============================================================
// Album track listing shapes
// =============================================================

#[test]
fn album_tracks_decode_as_array() {
    let album: Album = serde_json::from_str(
        r#"{"id":"al1","name":"LP","tracks":[{"id":"t1","name":"One"},{"id":"t2","name":"Two"}]}"#,
    )
    .unwrap();
    assert_eq!(album.tracks.len(), 2);
}

#[test]
fn album_tracks_summary_object_decodes_as_empty() {
    let album: Album = serde_json::from_str(
        r#"{"id":"al1","name":"LP","tracks":{"href":"https://x/t","total":12}}"#,
    )
    .unwrap();
    assert!(album.tracks.is_empty());
}
