//! Swipe-to-reveal row actions for scrollable lists.
//!
//! A horizontal pan on a row reveals a strip of action buttons; at most one
//! row is ever open; travel past the limits is rubber-banded; open/close
//! decisions weigh the release velocity. The host list stays in charge of
//! rendering and business logic: it implements [`SwipeHost`], dispatches
//! pointer events into [`SwipeController::handle_pointer_event`] (or calls
//! the begin/changed/ended operations from its own recognizers), ticks
//! [`SwipeController::on_frame`] from its frame clock, and reads per-row
//! translations back when laying out row content.

mod coordinator;
mod host;
mod strip;
mod theme;

pub use coordinator::*;
pub use host::*;
pub use strip::*;
pub use theme::*;
