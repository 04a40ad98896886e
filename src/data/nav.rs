use url::Url;

use crate::{
    data::{ItemLink, Service},
    error::Error,
};

/// A full-page navigation request. The shell resolves it against the
/// configured server URL and hands it to the browser.
#[derive(Clone, Debug)]
pub enum Nav {
    Login(Service),
    Sync(ItemLink),
}

impl Nav {
    pub fn url(&self, base: &Url) -> Result<Url, Error> {
        match self {
            Self::Login(service) => Ok(base.join(&format!("/login/{}", service.key()))?),
            Self::Sync(link) => {
                let mut url = base.join("/sync")?;
                url.query_pairs_mut()
                    .append_pair("type", link.category.sync_type())
                    .append_pair("id", &link.id);
                Ok(url)
            }
        }
    }
}
