#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # dosh
//!
//! The core library of a small DOS-style interactive filesystem shell.
//!
//! This library provides path resolution, tree metrics, safety
//! predicates, the recursive copy/delete primitives, and the command
//! engine that ties them together. The companion binary crate supplies
//! the read/eval loop, rendering, and confirmation prompts.
//!
//! ## Core Types
//!
//! - [`Session`] and [`Outcome`]: the command engine and its results
//! - [`TreeReport`] and [`NodeReport`]: directory listing metrics
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use dosh::{ConfirmPrompt, Outcome, Session};
//!
//! struct Yes;
//! impl ConfirmPrompt for Yes {
//!     fn confirm(&mut self, _description: &str) -> bool { true }
//! }
//!
//! let mut session = Session::new("/tmp").unwrap();
//! session.execute("md", &["projects".to_string()], &mut Yes).unwrap();
//! let outcome = session.execute("dir", &[], &mut Yes).unwrap();
//! assert!(matches!(outcome, Outcome::Listing(_)));
//! ```

pub mod error;
pub mod guard;
pub mod logging;
pub mod metrics;
pub mod ops;
pub mod path;
pub mod session;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use metrics::{format_size, NodeKind, NodeReport, TreeReport};
pub use path::{resolve, PathRelationship};
pub use session::{ConfirmPrompt, Outcome, Session};
