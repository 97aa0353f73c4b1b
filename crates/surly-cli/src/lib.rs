//! Interactive front end for the Surly URL shortener.
//!
//! The library half holds everything a front end needs besides I/O: deciding
//! whether input should be shortened or expanded, turning registry results
//! into user-facing replies and notices, and rendering the history table.

pub mod command;
pub mod mode;
pub mod notice;
pub mod render;
pub mod session;

pub use command::{Command, HELP};
pub use mode::Mode;
pub use notice::Notice;
pub use render::render_history;
pub use session::{Reply, Session};
