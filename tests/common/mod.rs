#![allow(dead_code)]

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver};

use streamsync::{
    cmd::Cmd,
    data::{AppState, Category, Config, ItemLink},
    delegate::Delegate,
    webapi::WebApi,
};

/// Delegate wired to a throwaway channel and the default (unreachable)
/// backend. Good enough for everything that does not actually load.
pub fn delegate() -> (Delegate, Receiver<Cmd>) {
    let (sender, receiver) = unbounded();
    let web_api = Arc::new(WebApi::new("http://127.0.0.1:5000").unwrap());
    (Delegate::new(web_api, sender), receiver)
}

pub fn state() -> AppState {
    AppState::default_with_config(Config::default())
}

pub fn link(category: Category, id: &str, name: &str) -> ItemLink {
    ItemLink {
        category,
        id: id.into(),
        name: name.into(),
    }
}
