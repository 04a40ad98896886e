use std::{sync::Arc, thread, time::Duration};

use crossbeam_channel::Sender;
use threadpool::ThreadPool;

use crate::{
    cmd::Cmd,
    data::{utils::capitalized, AppState, AuthCallback, AuthStatus, Category, FeedbackKind, Nav, Service},
    webapi::WebApi,
};

const FEEDBACK_TTL: Duration = Duration::from_secs(5);
const MAX_SHELF_THREADS: usize = 4;

/// Applies commands to the app state. Asynchronous work (shelf loading,
/// feedback expiry) is spawned here and reports back through the command
/// channel, so the state itself is only ever touched by the shell's loop.
pub struct Delegate {
    web_api: Arc<WebApi>,
    sender: Sender<Cmd>,
    shelf_pool: ThreadPool,
}

impl Delegate {
    pub fn new(web_api: Arc<WebApi>, sender: Sender<Cmd>) -> Self {
        Self {
            web_api,
            sender,
            shelf_pool: ThreadPool::with_name("shelf_loading".into(), MAX_SHELF_THREADS),
        }
    }

    /// Handles one command, returning the navigation it triggers, if any.
    pub fn command(&mut self, state: &mut AppState, cmd: Cmd) -> Option<Nav> {
        match cmd {
            Cmd::Connect(service) => self.connect(state, service),
            Cmd::LoadLibrary => {
                self.load_library(state);
                None
            }
            Cmd::UpdateShelf(category, result) => {
                if let Err(err) = &result {
                    log::error!("failed to load {}: {}", category.title(), err);
                }
                state.library.shelf_mut(category).items.resolve_or_reject(result);
                None
            }
            Cmd::SelectItem(link) => {
                state.select(link);
                None
            }
            Cmd::SyncSelected => self.sync_selected(state),
            Cmd::ToggleShelf(category) => {
                let shelf = state.library.shelf_mut(category);
                shelf.open = !shelf.open;
                None
            }
            Cmd::HideFeedback(generation) => {
                state.hide_feedback(generation);
                None
            }
            Cmd::AuthCallback(callback) => {
                self.auth_callback(state, callback);
                None
            }
            Cmd::Quit => None,
        }
    }

    fn connect(&self, state: &mut AppState, service: Service) -> Option<Nav> {
        if state.connections.is_connected(service) {
            // The button is disabled once connected.
            return None;
        }
        self.show_feedback(
            state,
            FeedbackKind::Success,
            format!("Redirecting to {}...", service.display_name()),
        );
        Some(Nav::Login(service))
    }

    fn sync_selected(&self, state: &mut AppState) -> Option<Nav> {
        let Some(link) = state.selected_item().cloned() else {
            self.show_feedback(
                state,
                FeedbackKind::Error,
                "Please select an item to sync.".to_string(),
            );
            return None;
        };
        self.show_feedback(state, FeedbackKind::Success, "Starting sync...".to_string());
        Some(Nav::Sync(link))
    }

    fn auth_callback(&self, state: &mut AppState, callback: AuthCallback) {
        let display = capitalized(&callback.service);
        match callback.status {
            AuthStatus::Success => {
                self.show_feedback(
                    state,
                    FeedbackKind::Success,
                    format!("Connected to {display} successfully!"),
                );
                if let Some(service) = Service::from_key(&callback.service) {
                    state.connections.connect(service);
                    if service == Service::Spotify {
                        self.load_library(state);
                    }
                }
            }
            AuthStatus::Error => {
                self.show_feedback(
                    state,
                    FeedbackKind::Error,
                    format!("Failed to connect to {display}. Try again."),
                );
            }
        }
    }

    /// Fans the four shelf loads out on the pool. Each settles on its own;
    /// a slow or failed category never blocks the rest.
    fn load_library(&self, state: &mut AppState) {
        for category in Category::ALL {
            state.library.shelf_mut(category).items.defer();
            let web_api = self.web_api.clone();
            let sender = self.sender.clone();
            self.shelf_pool.execute(move || {
                let result = web_api.load_shelf(category);
                let _ = sender.send(Cmd::UpdateShelf(category, result));
            });
        }
    }

    fn show_feedback(&self, state: &mut AppState, kind: FeedbackKind, message: String) {
        let generation = state.show_feedback(kind, message);
        self.after_delay(FEEDBACK_TTL, Cmd::HideFeedback(generation));
    }

    fn after_delay(&self, duration: Duration, cmd: Cmd) {
        let sender = self.sender.clone();
        thread::spawn(move || {
            thread::sleep(duration);
            let _ = sender.send(cmd);
        });
    }
}
