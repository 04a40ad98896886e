use crate::{
    data::{AppState, Category, Promise, Service},
    error::Error,
};

pub fn connect_button_label(state: &AppState, service: Service) -> String {
    if state.connections.is_connected(service) {
        format!("{} Connected", service.display_name())
    } else {
        format!("Connect {}", service.display_name())
    }
}

pub fn feedback_line(state: &AppState) -> Option<String> {
    state
        .feedback
        .as_ref()
        .map(|feedback| format!("[{}] {}", feedback.kind.as_str(), feedback.message))
}

pub fn shelf_header(state: &AppState, category: Category) -> String {
    let arrow = if state.library.shelf(category).open {
        "▾"
    } else {
        "▸"
    };
    format!("{arrow} {}", category.title())
}

/// Body of one category section, one line per rendered button. Failures
/// and the empty state render in place of the list, never outside it.
pub fn shelf_lines(state: &AppState, category: Category) -> Vec<String> {
    let shelf = state.library.shelf(category);
    match &shelf.items {
        Promise::Empty => Vec::new(),
        Promise::Deferred => vec!["Loading...".to_string()],
        Promise::Rejected(Error::Api(message)) => vec![message.clone()],
        Promise::Rejected(_) => vec!["Failed to load data.".to_string()],
        Promise::Resolved(items) if items.is_empty() => {
            vec![category.empty_message().to_string()]
        }
        Promise::Resolved(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let selected = state
                    .selected_item()
                    .is_some_and(|link| link.category == category && link.id == *item.id());
                let marker = if selected { ">" } else { " " };
                format!("{marker} {index}. {}", item.label())
            })
            .collect(),
    }
}
