//! The poll loop and its availability window.

pub(crate) mod watcher;
pub(crate) mod window;

pub(crate) use watcher::Watcher;
