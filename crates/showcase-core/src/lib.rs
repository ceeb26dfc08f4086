//! # Showcase Core
//!
//! Picks one project view and composes it into the page shell.
//!
//! - [`ProjectRegistry`] - immutable set of view providers plus the default
//! - [`resolve`] / [`select`] - name to project/provider with fallback to the default
//! - [`shell`] - the fixed outer document
//! - [`PageRenderer`] - select, render and wrap in one call

pub mod registry;
pub mod renderer;
pub mod selector;
pub mod shell;

pub use registry::{ProjectRegistry, ProjectRegistryBuilder};
pub use renderer::{PageRenderer, RenderedPage};
pub use selector::{resolve, select, Selection};
