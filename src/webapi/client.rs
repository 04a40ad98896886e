use std::time::Duration;

use serde::{de::DeserializeOwned, Deserialize};
use ureq::Agent;
use url::Url;

use crate::{
    data::{Album, Artist, Category, Item, Playlist, Track},
    error::Error,
};

/// Every list endpoint wraps its payload in the same envelope: either an
/// `error` field, or the item array under the category's key.
#[derive(Deserialize)]
struct ShelfEnvelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    lists: serde_json::Map<String, serde_json::Value>,
}

pub struct WebApi {
    agent: Agent,
    base: Url,
}

impl WebApi {
    pub fn new(server_url: &str) -> Result<Self, Error> {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(5)))
            .build();
        Ok(Self {
            agent: agent.into(),
            base: Url::parse(server_url)?,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Loads one category's items. Transport failures, non-success
    /// statuses, and payload-level errors all come back as `Err`; a
    /// missing or empty list is a valid empty shelf.
    pub fn load_shelf(&self, category: Category) -> Result<Vec<Item>, Error> {
        match category {
            Category::Playlists => self
                .load_items::<Playlist>(category)
                .map(|items| items.into_iter().map(Item::Playlist).collect()),
            Category::LikedSongs => self
                .load_items::<Track>(category)
                .map(|items| items.into_iter().map(Item::Track).collect()),
            Category::Albums => self
                .load_items::<Album>(category)
                .map(|items| items.into_iter().map(Item::Album).collect()),
            Category::Artists => self
                .load_items::<Artist>(category)
                .map(|items| items.into_iter().map(Item::Artist).collect()),
        }
    }

    fn load_items<T: DeserializeOwned>(&self, category: Category) -> Result<Vec<T>, Error> {
        let url = self.base.join(category.endpoint())?;
        let mut response = self.agent.get(url.as_str()).call()?;
        let mut envelope: ShelfEnvelope = response
            .body_mut()
            .read_json()
            .map_err(|err| Error::Transport(err.to_string()))?;
        if let Some(message) = envelope.error {
            return Err(Error::Api(message));
        }
        let Some(value) = envelope.lists.remove(category.payload_key()) else {
            return Ok(Vec::new());
        };
        serde_json::from_value(value).map_err(|err| Error::Transport(err.to_string()))
    }
}
