//! Extensions manager - browse, filter, toggle and remove browser extensions.
//!
//! # Architecture
//!
//! - [`catalog`] - Extension records and the catalog that seeds a session
//! - [`filter`] - Filter modes and the predicate deriving the visible list
//! - [`store`] - The single owner of the collection; all intents go through it
//! - [`config`] - Configuration loading and management
//! - [`theme`] - Dark/light display mode
//! - `ui` - iced front end (feature `iced-ui`)
//!
//! # Example
//!
//! ```
//! use extensions_manager::{catalog, ExtensionStore, Filter, Intent};
//!
//! let mut store = ExtensionStore::new(catalog::builtin()).expect("unique ids");
//! store.dispatch(Intent::SetFilter(Filter::Active));
//! assert!(store.visible_extensions().iter().all(|e| e.is_active));
//! ```

pub mod catalog;
pub mod config;
pub mod filter;
pub mod store;
pub mod theme;
pub mod ui;

mod error;

pub use catalog::{Extension, ExtensionId};
pub use config::Config;
pub use error::{ManagerError, ManagerResult};
pub use filter::Filter;
pub use store::{ExtensionStore, FilterCounts, Intent};
pub use theme::ThemeMode;
