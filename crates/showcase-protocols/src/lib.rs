//! # Showcase Protocols
//!
//! Core protocol definitions for the Showcase page host.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Types
//!
//! - [`ProjectId`] - Closed set of projects the host knows how to serve
//! - [`ViewProvider`] - Trait for project view implementations
//! - [`Fragment`] - Markup produced by a view provider
//! - [`TemperatureUnit`] - Display unit shared by config and the weather view

pub mod error;
pub mod project;
pub mod unit;
pub mod view;

pub use error::{ParseProjectError, RegistryError};
pub use project::ProjectId;
pub use unit::{TemperatureUnit, UnknownUnitError};
pub use view::{escape_html, Fragment, ViewProvider};
