mod client;

pub use client::WebApi;
