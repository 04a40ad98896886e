pub mod category;
pub mod config;
pub mod feedback;
pub mod item;
pub mod nav;
pub mod promise;
pub mod service;
pub mod utils;

pub use crate::data::{
    category::Category,
    config::Config,
    feedback::{Feedback, FeedbackKind},
    item::{Album, Artist, Item, ItemLink, Playlist, Track},
    nav::Nav,
    promise::{Promise, PromiseState},
    service::{AuthCallback, AuthStatus, Connections, Service},
};

use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub config: Config,
    pub library: Library,
    pub selection: Option<ItemLink>,
    pub feedback: Option<Feedback>,
    pub feedback_generation: u64,
    pub connections: Connections,
}

impl AppState {
    pub fn default_with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replaces any prior selection, across all categories.
    pub fn select(&mut self, link: ItemLink) {
        self.selection.replace(link);
    }

    pub fn selected_item(&self) -> Option<&ItemLink> {
        self.selection.as_ref()
    }

    pub fn show_feedback(&mut self, kind: FeedbackKind, message: impl Into<Arc<str>>) -> u64 {
        self.feedback_generation += 1;
        self.feedback.replace(Feedback {
            kind,
            message: message.into(),
            generation: self.feedback_generation,
        });
        self.feedback_generation
    }

    /// Clears the visible message, but only if it is still the one the
    /// timer was scheduled for.
    pub fn hide_feedback(&mut self, generation: u64) {
        if self
            .feedback
            .as_ref()
            .is_some_and(|feedback| feedback.generation == generation)
        {
            self.feedback.take();
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Library {
    pub playlists: Shelf,
    pub liked_songs: Shelf,
    pub albums: Shelf,
    pub artists: Shelf,
}

impl Library {
    pub fn shelf(&self, category: Category) -> &Shelf {
        match category {
            Category::Playlists => &self.playlists,
            Category::LikedSongs => &self.liked_songs,
            Category::Albums => &self.albums,
            Category::Artists => &self.artists,
        }
    }

    pub fn shelf_mut(&mut self, category: Category) -> &mut Shelf {
        match category {
            Category::Playlists => &mut self.playlists,
            Category::LikedSongs => &mut self.liked_songs,
            Category::Albums => &mut self.albums,
            Category::Artists => &mut self.artists,
        }
    }
}

/// One collapsible category section: its load state and accordion flag.
#[derive(Clone, Debug, Default)]
pub struct Shelf {
    pub items: Promise<Vec<Item>>,
    pub open: bool,
}

impl Shelf {
    pub fn resolved_items(&self) -> &[Item] {
        self.items.resolved().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn icon_rotation(&self) -> f32 {
        if self.open {
            180.0
        } else {
            0.0
        }
    }
}
