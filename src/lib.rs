pub mod cmd;
pub mod data;
pub mod delegate;
pub mod error;
pub mod ui;
pub mod webapi;
