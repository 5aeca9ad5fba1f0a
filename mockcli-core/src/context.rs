//! The context object handed to a running action.

use std::io::Cursor;

use clap::ArgMatches;

use crate::command::TRAILING_ARGS;
use crate::output::{OutputSink, StdinPipe};

/// Name of the hidden app-level flag routing an invocation to a node.
pub const API_URL_FLAG: &str = "api-url";

/// Everything a command action gets to see: parsed flags, trailing
/// positional args, the output sink it writes to, and any staged
/// interactive input.
pub struct CmdContext {
    matches: ArgMatches,
    out: OutputSink,
    stdin: StdinPipe,
}

impl CmdContext {
    pub fn new(matches: ArgMatches, out: OutputSink, stdin: StdinPipe) -> Self {
        Self {
            matches,
            out,
            stdin,
        }
    }

    /// Address of the node this invocation targets (the synthesized
    /// routing flag). `None` only when the context was built outside the
    /// harness, e.g. directly in a unit test.
    pub fn api_url(&self) -> Option<&str> {
        self.string_flag(API_URL_FLAG)
    }

    /// Value of a declared string flag.
    pub fn string_flag(&self, name: &str) -> Option<&str> {
        self.matches.get_one::<String>(name).map(String::as_str)
    }

    /// Value of a declared boolean flag. Panics if the flag was never
    /// declared, which is a broken fixture.
    pub fn bool_flag(&self, name: &str) -> bool {
        self.matches.get_flag(name)
    }

    /// Positional tokens left over after flag parsing, in input order.
    pub fn args(&self) -> Vec<&str> {
        self.matches
            .get_many::<String>(TRAILING_ARGS)
            .map(|vals| vals.map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Writable handle on the shared output sink.
    pub fn out(&self) -> OutputSink {
        self.out.clone()
    }

    /// Consume the staged interactive input. Empty if nothing was staged.
    pub fn stdin(&self) -> Cursor<Vec<u8>> {
        self.stdin.take_reader()
    }
}
