use url::Url;

use crate::data::utils::capitalized;

/// External services with a connect button on the page.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Service {
    Spotify,
    YouTube,
}

impl Service {
    pub const ALL: [Service; 2] = [Service::Spotify, Service::YouTube];

    pub fn key(self) -> &'static str {
        match self {
            Self::Spotify => "spotify",
            Self::YouTube => "youtube",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "spotify" => Some(Self::Spotify),
            "youtube" => Some(Self::YouTube),
            _ => None,
        }
    }

    pub fn display_name(self) -> String {
        capitalized(self.key())
    }
}

/// Per-service linked state. Connect-only, so the state is monotonic for
/// the lifetime of the page.
#[derive(Clone, Debug, Default)]
pub struct Connections {
    spotify: bool,
    youtube: bool,
}

impl Connections {
    pub fn connect(&mut self, service: Service) {
        match service {
            Service::Spotify => self.spotify = true,
            Service::YouTube => self.youtube = true,
        }
    }

    pub fn is_connected(&self, service: Service) -> bool {
        match service {
            Service::Spotify => self.spotify,
            Service::YouTube => self.youtube,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuthStatus {
    Success,
    Error,
}

impl AuthStatus {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// One-time outcome signal carried in the location's query after the
/// backend redirects back from a service login. The service name is
/// free-form; only known services flip a connection state.
#[derive(Clone, Debug)]
pub struct AuthCallback {
    pub status: AuthStatus,
    pub service: String,
}

impl AuthCallback {
    const STATUS_PARAM: &'static str = "auth_status";
    const SERVICE_PARAM: &'static str = "service";

    pub fn from_url(url: &Url) -> Option<Self> {
        let mut status = None;
        let mut service = None;
        for (key, value) in url.query_pairs() {
            match &*key {
                Self::STATUS_PARAM => status = AuthStatus::from_key(&value),
                Self::SERVICE_PARAM => service = Some(value.into_owned()),
                _ => {}
            }
        }
        Some(Self {
            status: status?,
            service: service?,
        })
    }

    /// The location with the auth parameters removed, so reloading or
    /// sharing it does not replay the callback. Other parameters survive.
    pub fn strip(url: &Url) -> Url {
        let remaining: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != Self::STATUS_PARAM && key != Self::SERVICE_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        let mut cleaned = url.clone();
        cleaned.set_query(None);
        if !remaining.is_empty() {
            cleaned.query_pairs_mut().extend_pairs(remaining);
        }
        cleaned
    }
}
