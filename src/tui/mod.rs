//! Terminal User Interface for the process dashboard.
//!
//! The core is split into the grid composer (`layout`), the widget set
//! (`widgets`), the page model (`page`) and the update binder (`binder`).
//! `app`, `event`, `input` and `render` drive it against a real terminal.

mod app;
pub mod binder;
pub mod error;
mod event;
mod input;
pub mod layout;
pub mod page;
mod render;
pub mod state;
pub mod style;
pub mod widgets;

pub use app::App;
pub use error::{DashboardError, Result};
pub use page::{AllProcessesPage, Page, PageEvent, SingleProcessPage};
pub use state::AppState;
pub use style::DashboardStyle;
