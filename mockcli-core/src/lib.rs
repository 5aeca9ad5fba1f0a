//! Core command model for the mock CLI harness: flag declarations,
//! command descriptors with action callbacks, name-path resolution, and
//! the shared output/stdin endpoints actions run against.

pub mod command;
pub mod context;
pub mod error;
pub mod flags;
pub mod output;

pub use command::{build_flag_set, resolve, validate, CmdAction, CommandSpec, TRAILING_ARGS};
pub use context::{CmdContext, API_URL_FLAG};
pub use error::{HarnessError, Result};
pub use flags::{FlagKind, FlagSpec};
pub use output::{OutputSink, StdinPipe};
