/// The four kinds of syncable content. A closed enumeration; adding a
/// category means extending every match below.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    Playlists,
    LikedSongs,
    Albums,
    Artists,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Playlists,
        Category::LikedSongs,
        Category::Albums,
        Category::Artists,
    ];

    /// Backend read endpoint, root-relative.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Playlists => "/spotify-playlists",
            Self::LikedSongs => "/spotify-liked-songs",
            Self::Albums => "/spotify-albums",
            Self::Artists => "/spotify-artists",
        }
    }

    /// Key holding the item list in the endpoint's JSON payload.
    pub fn payload_key(self) -> &'static str {
        match self {
            Self::Playlists => "playlists",
            Self::LikedSongs => "liked_songs",
            Self::Albums => "albums",
            Self::Artists => "artists",
        }
    }

    /// Value of the `type` parameter in a sync request.
    pub fn sync_type(self) -> &'static str {
        match self {
            Self::Playlists => "playlist",
            Self::LikedSongs => "liked_songs",
            Self::Albums => "album",
            Self::Artists => "artist",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Playlists => "No playlists found.",
            Self::LikedSongs => "No liked songs found.",
            Self::Albums => "No saved albums found.",
            Self::Artists => "No followed artists found.",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Playlists => "Playlists",
            Self::LikedSongs => "Liked Songs",
            Self::Albums => "Albums",
            Self::Artists => "Artists",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "playlists" => Some(Self::Playlists),
            "liked_songs" | "liked-songs" => Some(Self::LikedSongs),
            "albums" => Some(Self::Albums),
            "artists" => Some(Self::Artists),
            _ => None,
        }
    }
}
