use std::sync::Arc;

use serde::Deserialize;

use crate::data::Category;

#[derive(Clone, Debug, Deserialize)]
pub struct Playlist {
    pub id: Arc<str>,
    pub name: Arc<str>,
    #[serde(rename = "tracks_total")]
    #[serde(default)]
    pub track_count: usize,
}

impl Playlist {
    pub fn label(&self) -> String {
        format!("{} ({} tracks)", self.name, self.track_count)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Track {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub artist: Arc<str>,
}

impl Track {
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.artist)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Album {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub artist: Arc<str>,
}

impl Album {
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.artist)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Artist {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub followers: Option<u64>,
}

impl Artist {
    pub fn label(&self) -> String {
        match self.followers {
            Some(count) => format!("{} ({} followers)", self.name, count),
            None => self.name.to_string(),
        }
    }
}

/// A single selectable unit of content, tagged with its category.
#[derive(Clone, Debug)]
pub enum Item {
    Playlist(Playlist),
    Track(Track),
    Album(Album),
    Artist(Artist),
}

impl Item {
    pub fn category(&self) -> Category {
        match self {
            Self::Playlist(_) => Category::Playlists,
            Self::Track(_) => Category::LikedSongs,
            Self::Album(_) => Category::Albums,
            Self::Artist(_) => Category::Artists,
        }
    }

    pub fn id(&self) -> &Arc<str> {
        match self {
            Self::Playlist(playlist) => &playlist.id,
            Self::Track(track) => &track.id,
            Self::Album(album) => &album.id,
            Self::Artist(artist) => &artist.id,
        }
    }

    pub fn name(&self) -> &Arc<str> {
        match self {
            Self::Playlist(playlist) => &playlist.name,
            Self::Track(track) => &track.name,
            Self::Album(album) => &album.name,
            Self::Artist(artist) => &artist.name,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Playlist(playlist) => playlist.label(),
            Self::Track(track) => track.label(),
            Self::Album(album) => album.label(),
            Self::Artist(artist) => artist.label(),
        }
    }

    pub fn link(&self) -> ItemLink {
        ItemLink {
            category: self.category(),
            id: self.id().clone(),
            name: self.name().clone(),
        }
    }
}

/// Lightweight reference to an item, enough to display and to sync it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemLink {
    pub category: Category,
    pub id: Arc<str>,
    pub name: Arc<str>,
}
