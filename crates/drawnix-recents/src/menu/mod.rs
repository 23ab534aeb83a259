//! "Recent Files" submenu: view models and the injector that attaches
//! them to host menu containers.

pub mod injector;
pub mod render;

pub use injector::{InjectorState, MenuInjector};
pub use render::{build_submenu, Submenu, SubmenuRow, EMPTY_PLACEHOLDER, RECENT_FILES_LABEL};
