//! The harness surface: an app-level builder over a borrowed command set,
//! and per-node client views that invoke commands and capture output.
//!
//! Setup failures (unknown command path, broken flag declarations) panic
//! immediately: they mean the test fixture is wrong, not the command under
//! test. Errors returned by the invoked action are the subject under test
//! and are handed back to the caller via [`MockCliClient::run_raw`].

use std::fmt;

use mockcli_core::{
    build_flag_set, resolve, validate, CmdContext, CommandSpec, FlagSpec, HarnessError,
    OutputSink, StdinPipe, API_URL_FLAG,
};
use tracing::debug;

/// App view over a caller-owned command set.
///
/// Installs the hidden app-level `--api-url` flag so every invocation can
/// be routed to a specific node, and owns the shared output sink.
pub struct MockCli<'a> {
    cmds: &'a [CommandSpec],
    app_flags: Vec<FlagSpec>,
    out: OutputSink,
    stdin: StdinPipe,
}

impl<'a> MockCli<'a> {
    /// Build the app view. Panics if the command tree is invalid, since
    /// that is a broken fixture rather than behavior under test.
    pub fn new(cmds: &'a [CommandSpec]) -> Self {
        if let Err(err) = validate(cmds) {
            panic!("invalid command set: {err}");
        }

        Self {
            cmds,
            app_flags: vec![FlagSpec::string(API_URL_FLAG).hidden()],
            out: OutputSink::new(),
            stdin: StdinPipe::new(),
        }
    }

    /// A client view bound to one node address. Clients share the app's
    /// output sink and stdin pipe.
    pub fn client(&self, addr: impl fmt::Display) -> MockCliClient<'a> {
        MockCliClient {
            cmds: self.cmds,
            app_flags: self.app_flags.clone(),
            addr: addr.to_string(),
            out: self.out.clone(),
            stdin: self.stdin.clone(),
        }
    }
}

/// Runs commands against a particular node.
pub struct MockCliClient<'a> {
    cmds: &'a [CommandSpec],
    app_flags: Vec<FlagSpec>,
    addr: String,
    out: OutputSink,
    stdin: StdinPipe,
}

impl MockCliClient<'_> {
    /// Node address this client routes invocations to.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Run a command, requiring success. Returns the trimmed captured
    /// output; panics if the action returns an error.
    pub fn run(&self, input: &[&str]) -> String {
        let (out, result) = self.run_raw(input);
        if let Err(err) = result {
            panic!("command '{}' failed: {err:#}", input.join(" "));
        }
        out
    }

    /// Run a command, returning both the trimmed captured output and the
    /// action's result for the caller to inspect. The output buffer is
    /// drained even when the action fails.
    pub fn run_raw(&self, input: &[&str]) -> (String, anyhow::Result<()>) {
        let tokens: Vec<String> = input.iter().map(|s| s.to_string()).collect();
        let (cmd, rest) = match resolve(self.cmds, &tokens) {
            Ok(found) => found,
            Err(err) => panic!("{err}"),
        };
        let action = cmd
            .get_action()
            .unwrap_or_else(|| panic!("{}", HarnessError::missing_action(input.join(" "))));

        // Prepend --api-url=<node api address> so the action knows which
        // node it targets.
        let mut argv = Vec::with_capacity(rest.len() + 1);
        argv.push(format!("--{API_URL_FLAG}={}", self.addr));
        argv.extend(rest);

        debug!(command = %input.join(" "), addr = %self.addr, "invoking command");

        let matches = match build_flag_set(&self.app_flags, cmd).try_get_matches_from(&argv) {
            Ok(matches) => matches,
            Err(source) => panic!("{}", HarnessError::flag_parse(cmd.name(), source)),
        };

        let mut ctx = CmdContext::new(matches, self.out.clone(), self.stdin.clone());
        let result = action(&mut ctx);

        (self.out.take_trimmed(), result)
    }

    /// Stage interactive input lines, then run the command requiring
    /// success. The action reads the lines through its context's stdin.
    pub fn run_interactive(&self, input: &[&str], lines: &[&str]) -> String {
        self.stdin.stage(&(lines.join("\n") + "\n"));
        self.run(input)
    }
}
