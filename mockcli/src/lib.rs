//! mockcli - In-process CLI harness for test suites
//!
//! Invokes CLI commands programmatically against a simulated node and
//! captures what they write, so tests can assert on command output without
//! spawning a binary:
//! - Build a [`MockCli`] over the command set under test
//! - Bind a [`MockCliClient`] to a node address; the harness injects the
//!   hidden `--api-url` routing flag into every invocation
//! - `run` requires success, `run_raw` also surfaces the handler's error,
//!   `run_interactive` stages stdin lines first

pub mod harness;
pub mod tracing_setup;

pub use harness::{MockCli, MockCliClient};
pub use mockcli_core::{CmdContext, CommandSpec, FlagSpec, API_URL_FLAG};
pub use tracing_setup::init_tracing;
