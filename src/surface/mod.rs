//! User-facing surface
//!
//! Everything between the core display model and the terminal:
//! - `text` - The `ViewRenderer` seam and the plain-text implementation
//! - `debounce` - Reset-on-input debouncing for search keystrokes
//! - `session` - The interactive command loop

pub mod debounce;
pub mod session;
pub mod text;

pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use session::{parse_command, Outcome, Session, SessionEvent};
pub use text::{TextRenderer, ViewRenderer};
