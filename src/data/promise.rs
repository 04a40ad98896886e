use crate::error::Error;

#[derive(Eq, PartialEq, Debug)]
pub enum PromiseState {
    Empty,
    Deferred,
    Resolved,
    Rejected,
}

/// Lifecycle of a value loaded from the backend.
#[derive(Clone, Debug)]
pub enum Promise<T, E = Error> {
    Empty,
    Deferred,
    Resolved(T),
    Rejected(E),
}

impl<T, E> Promise<T, E> {
    pub fn state(&self) -> PromiseState {
        match self {
            Self::Empty => PromiseState::Empty,
            Self::Deferred => PromiseState::Deferred,
            Self::Resolved(_) => PromiseState::Resolved,
            Self::Rejected(_) => PromiseState::Rejected,
        }
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Self::Resolved(val) => Some(val),
            _ => None,
        }
    }

    pub fn defer(&mut self) {
        *self = Self::Deferred;
    }

    pub fn resolve_or_reject(&mut self, res: Result<T, E>) {
        *self = match res {
            Ok(ok) => Self::Resolved(ok),
            Err(err) => Self::Rejected(err),
        };
    }
}

impl<T, E> Default for Promise<T, E> {
    fn default() -> Self {
        Self::Empty
    }
}
