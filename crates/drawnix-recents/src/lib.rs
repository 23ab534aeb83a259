//! Drawnix recent-files integration core.
//!
//! `drawnix-recents` provides the recent-files tracking and menu-injection
//! logic the Drawnix desktop shell bolts onto the drawing application. It
//! is intentionally decoupled from the shell: the host UI drives it
//! through explicit notices and consumes the events it emits, so the same
//! core serves any frontend (and the test suite drives it with stubs).
//!
//! # Modules
//!
//! - [`store`] — The recent-files backing store: [`RecentFileEntry`], the MRU list, JSON persistence.
//! - [`registry`] — Best-effort client facade over the store's four operations.
//! - [`menu`] — The "Recent Files" submenu: injector state machine and row rendering.
//! - [`timefmt`] — Humanized "time ago" labels.
//! - [`event`] — Notice and event types for host ↔ core communication.
//! - [`fsio`] — Filesystem collaborator and the tracked save/load pair.
//! - [`preview`] — Content snippets attached to entries at add time.
//! - [`config`] — TOML-based settings.
//! - [`error`] — Unified error type ([`RecentsError`]) and result alias ([`RecentsResult`]).

pub mod config;
pub mod error;
pub mod event;
pub mod fsio;
pub mod menu;
pub mod preview;
pub mod registry;
pub mod store;
pub mod timefmt;

pub use config::{MenuSettings, RegistrySettings, Settings};
pub use error::{RecentsError, RecentsResult};
pub use event::{HostEvent, LoadFilePayload, MenuNotice, LOAD_FILE_EVENT};
pub use fsio::{load_file_with_tracking, save_file_with_tracking, LocalFs, TextSource};
pub use menu::{build_submenu, InjectorState, MenuInjector, Submenu, SubmenuRow};
pub use registry::RegistryClient;
pub use store::entry::RecentFileEntry;
pub use store::json::JsonStore;
pub use store::list::RecentList;
pub use store::RecentStore;
pub use timefmt::format_relative;
