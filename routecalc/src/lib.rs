//! routecalc, an interactive calculator for the cheapest route across a
//! terrain map.
//!
//! The binary is a thin loop over [`Menu`], which reads choices from any
//! `BufRead`, forwards them as [`Command`]s to a [`Session`] and prints the
//! [`Outcome`].

pub mod cli;
pub mod menu;
pub mod session;

pub use cli::Args;
pub use menu::Menu;
pub use session::{Command, Outcome, Session, SessionConfig, SessionError};
