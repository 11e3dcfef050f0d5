//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — the controller: tick loop, key handling, command dispatch
//! - **[`session`]** — selected algorithm and direction, the active sort run
//! - **[`panes`]** — stateless render functions for the header, chart and
//!   status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Config`] and call [`App::run`] to start the event loop.
//!
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod session;
pub mod theme;

pub use app::App;
