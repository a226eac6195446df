//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Node`], [`Manifest`], [`ManifestEntry`] - Virtual filesystem representation
//! - [`VirtualPath`] - Locations inside the filesystem
//! - [`Entry`], [`Presentation`], [`SideEffect`] - Terminal transcript and outcomes

mod filesystem;
mod path;
mod terminal;

pub use filesystem::{Manifest, ManifestEntry, Node};
pub use path::VirtualPath;
pub use terminal::{Entry, Presentation, SideEffect};
