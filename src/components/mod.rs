//! Reusable view components.

pub mod album_card;
pub mod artist_card;
pub mod guard;
pub mod loading;
pub mod navigation;
pub mod playlist_card;
pub mod track_card;
pub mod user_profile_card;
