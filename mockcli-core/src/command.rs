//! Command descriptors and name-path resolution.
//!
//! A test suite hands the harness a tree of [`CommandSpec`]s. Resolution
//! walks a name path ("paych add-funds") through that tree to a concrete
//! action; flag-set synthesis turns the resolved command's declarations
//! into a clap argument set the input tokens are parsed against.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use clap::Arg;

use crate::context::CmdContext;
use crate::error::{HarnessError, Result};
use crate::flags::FlagSpec;

/// Callback invoked when a resolved command runs.
pub type CmdAction = Arc<dyn Fn(&mut CmdContext) -> anyhow::Result<()> + Send + Sync>;

/// Id of the synthesized positional capturing everything after the first
/// non-flag token.
pub const TRAILING_ARGS: &str = "args";

/// Descriptor for one command or sub-command.
///
/// Leaf commands carry an action; branch commands carry sub-commands.
/// The harness borrows descriptor lists from the caller and never clones
/// the tree.
#[derive(Clone)]
pub struct CommandSpec {
    name: String,
    about: Option<String>,
    flags: Vec<FlagSpec>,
    subcommands: Vec<CommandSpec>,
    action: Option<CmdAction>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            about: None,
            flags: Vec::new(),
            subcommands: Vec::new(),
            action: None,
        }
    }

    pub fn about(mut self, text: impl Into<String>) -> Self {
        self.about = Some(text.into());
        self
    }

    pub fn flag(mut self, flag: FlagSpec) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn subcommand(mut self, cmd: CommandSpec) -> Self {
        self.subcommands.push(cmd);
        self
    }

    pub fn action<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut CmdContext) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(f));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flags(&self) -> &[FlagSpec] {
        &self.flags
    }

    pub fn subcommands(&self) -> &[CommandSpec] {
        &self.subcommands
    }

    pub fn get_action(&self) -> Option<&CmdAction> {
        self.action.as_ref()
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("about", &self.about)
            .field("flags", &self.flags)
            .field("subcommands", &self.subcommands)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Walk `input` through the command tree.
///
/// The first token selects a top-level command; while the current command
/// has sub-commands the next token must select one. Returns the resolved
/// command and the tokens left over for flag parsing.
pub fn resolve<'a>(cmds: &'a [CommandSpec], input: &[String]) -> Result<(&'a CommandSpec, Vec<String>)> {
    let (name, rest) = input.split_first().ok_or(HarnessError::EmptyPath)?;
    let cmd = cmds
        .iter()
        .find(|c| c.name == *name)
        .ok_or_else(|| HarnessError::unknown_command(input.join(" ")))?;
    find_subcommand(cmd, rest, input)
}

fn find_subcommand<'a>(
    cmd: &'a CommandSpec,
    input: &[String],
    full: &[String],
) -> Result<(&'a CommandSpec, Vec<String>)> {
    // A command without sub-commands terminates the walk; what's left is
    // flag/arg input.
    if cmd.subcommands.is_empty() {
        return Ok((cmd, input.to_vec()));
    }

    let (name, rest) = input
        .split_first()
        .ok_or_else(|| HarnessError::unknown_command(full.join(" ")))?;
    for sub in &cmd.subcommands {
        if sub.name == *name {
            return find_subcommand(sub, rest, full);
        }
    }
    Err(HarnessError::unknown_command(full.join(" ")))
}

/// Synthesize the flag set for one invocation: app-level flags first (so
/// the routing flag always parses), then the resolved command's flags,
/// then a trailing positional. Flag parsing stops at the first non-flag
/// token, as with classic getopt-style flag sets.
pub fn build_flag_set(app_flags: &[FlagSpec], cmd: &CommandSpec) -> clap::Command {
    let mut fs = clap::Command::new(cmd.name.clone())
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true);

    for flag in app_flags {
        fs = fs.arg(flag.to_arg());
    }
    for flag in &cmd.flags {
        fs = fs.arg(flag.to_arg());
    }

    fs.arg(Arg::new(TRAILING_ARGS).num_args(..).trailing_var_arg(true))
}

/// Reject command trees where two siblings share a name. Run once when
/// the app view is built; a duplicate means the fixture itself is broken.
pub fn validate(cmds: &[CommandSpec]) -> Result<()> {
    validate_level("(top level)", cmds)
}

fn validate_level(parent: &str, cmds: &[CommandSpec]) -> Result<()> {
    let mut seen = HashSet::new();
    for cmd in cmds {
        if !seen.insert(cmd.name.as_str()) {
            return Err(HarnessError::duplicate_command(parent, &cmd.name));
        }
        validate_level(&cmd.name, &cmd.subcommands)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    fn sample_cmds() -> Vec<CommandSpec> {
        vec![
            CommandSpec::new("version").action(|_| Ok(())),
            CommandSpec::new("paych")
                .subcommand(
                    CommandSpec::new("add-funds")
                        .flag(FlagSpec::bool("restart-retrievals"))
                        .action(|_| Ok(())),
                )
                .subcommand(CommandSpec::new("list").action(|_| Ok(()))),
        ]
    }

    #[test]
    fn resolves_top_level_command() {
        let cmds = sample_cmds();
        let (cmd, rest) = resolve(&cmds, &tokens(&["version"])).unwrap();
        assert_eq!(cmd.name(), "version");
        assert!(rest.is_empty());
    }

    #[test]
    fn resolves_nested_path_and_keeps_leftover_tokens() {
        let cmds = sample_cmds();
        let input = tokens(&["paych", "add-funds", "addr1", "addr2", "100"]);
        let (cmd, rest) = resolve(&cmds, &input).unwrap();
        assert_eq!(cmd.name(), "add-funds");
        assert_eq!(rest, tokens(&["addr1", "addr2", "100"]));
    }

    #[test]
    fn unknown_path_is_an_error() {
        let cmds = sample_cmds();
        let err = resolve(&cmds, &tokens(&["paych", "drain"])).unwrap_err();
        assert!(matches!(err, HarnessError::UnknownCommand { .. }));
        assert!(err.to_string().contains("paych drain"));
    }

    #[test]
    fn exhausted_path_with_subcommands_is_an_error() {
        let cmds = sample_cmds();
        let err = resolve(&cmds, &tokens(&["paych"])).unwrap_err();
        assert!(matches!(err, HarnessError::UnknownCommand { .. }));
    }

    #[test]
    fn empty_path_is_an_error() {
        let cmds = sample_cmds();
        assert!(matches!(
            resolve(&cmds, &[]).unwrap_err(),
            HarnessError::EmptyPath
        ));
    }

    #[test]
    fn flag_set_carries_app_and_command_flags() {
        let cmds = sample_cmds();
        let (cmd, _) = resolve(&cmds, &tokens(&["paych", "add-funds"])).unwrap();
        let app_flags = [FlagSpec::string("api-url").hidden()];

        let fs = build_flag_set(&app_flags, cmd);
        let matches = fs
            .try_get_matches_from(["--api-url=/ip4/127.0.0.1/tcp/1234", "--restart-retrievals", "addr1"])
            .unwrap();

        assert_eq!(
            matches.get_one::<String>("api-url").map(String::as_str),
            Some("/ip4/127.0.0.1/tcp/1234")
        );
        assert!(matches.get_flag("restart-retrievals"));
        let args: Vec<&String> = matches.get_many::<String>(TRAILING_ARGS).unwrap().collect();
        assert_eq!(args, ["addr1"]);
    }

    #[test]
    fn flag_parsing_stops_at_first_positional() {
        let cmds = sample_cmds();
        let (cmd, _) = resolve(&cmds, &tokens(&["paych", "list"])).unwrap();

        let fs = build_flag_set(&[], cmd);
        let matches = fs.try_get_matches_from(["addr1", "--not-a-flag"]).unwrap();
        let args: Vec<&String> = matches.get_many::<String>(TRAILING_ARGS).unwrap().collect();
        assert_eq!(args, ["addr1", "--not-a-flag"]);
    }

    #[test]
    fn validate_rejects_duplicate_siblings() {
        let cmds = vec![
            CommandSpec::new("wallet"),
            CommandSpec::new("wallet"),
        ];
        assert!(matches!(
            validate(&cmds).unwrap_err(),
            HarnessError::DuplicateCommand { .. }
        ));
    }

    #[test]
    fn validate_rejects_duplicate_subcommands() {
        let cmds = vec![CommandSpec::new("paych")
            .subcommand(CommandSpec::new("list"))
            .subcommand(CommandSpec::new("list"))];
        let err = validate(&cmds).unwrap_err();
        assert!(err.to_string().contains("paych"));
    }

    #[test]
    fn validate_accepts_same_name_under_different_parents() {
        let cmds = vec![
            CommandSpec::new("paych").subcommand(CommandSpec::new("list")),
            CommandSpec::new("wallet").subcommand(CommandSpec::new("list")),
        ];
        assert!(validate(&cmds).is_ok());
    }
}
