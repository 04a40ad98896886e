use crate::{
    data::{AuthCallback, Category, Item, ItemLink, Service},
    error::Error,
};

/// Everything the page can be asked to do. Clicks arrive as commands, and
/// so do the follow-ups the delegate schedules for itself (shelf results,
/// feedback expiry).
#[derive(Clone, Debug)]
pub enum Cmd {
    /// Connect-button click for a service.
    Connect(Service),
    /// Load all four category shelves concurrently.
    LoadLibrary,
    /// Settlement of a single shelf's load.
    UpdateShelf(Category, Result<Vec<Item>, Error>),
    /// Item-button click.
    SelectItem(ItemLink),
    /// Sync-now button click.
    SyncSelected,
    /// Accordion header click.
    ToggleShelf(Category),
    /// Feedback timer expiry for a given message generation.
    HideFeedback(u64),
    /// Auth outcome carried back in the location's query.
    AuthCallback(AuthCallback),
    /// Shell shutdown.
    Quit,
}
