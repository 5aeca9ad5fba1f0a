use clap::{Arg, ArgAction};

/// Declarative description of a single `--long` flag.
///
/// Flags are declared on commands (or at the app level) and register
/// themselves onto a synthesized argument set via [`FlagSpec::to_arg`].
#[derive(Debug, Clone)]
pub struct FlagSpec {
    name: String,
    kind: FlagKind,
    default: Option<String>,
    help: Option<String>,
    hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Takes a single string value (`--name=value` or `--name value`).
    String,
    /// Presence-only boolean (`--name`).
    Bool,
}

impl FlagSpec {
    /// A flag carrying a single string value.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FlagKind::String)
    }

    /// A presence-only boolean flag.
    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, FlagKind::Bool)
    }

    fn new(name: impl Into<String>, kind: FlagKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            help: None,
            hidden: false,
        }
    }

    /// Default value used when the flag is absent from the input.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }

    /// Hide the flag from generated help output.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FlagKind {
        self.kind
    }

    /// Register this flag as a clap argument.
    pub fn to_arg(&self) -> Arg {
        let mut arg = Arg::new(self.name.clone())
            .long(self.name.clone())
            .hide(self.hidden);

        arg = match self.kind {
            FlagKind::String => arg.action(ArgAction::Set).value_name("VALUE"),
            FlagKind::Bool => arg.action(ArgAction::SetTrue),
        };

        if let Some(default) = &self.default {
            arg = arg.default_value(default.clone());
        }
        if let Some(help) = &self.help {
            arg = arg.help(help.clone());
        }

        arg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_flag_parses_value() {
        let cmd = clap::Command::new("t")
            .no_binary_name(true)
            .arg(FlagSpec::string("from").to_arg());

        let matches = cmd.try_get_matches_from(["--from=alice"]).unwrap();
        assert_eq!(
            matches.get_one::<String>("from").map(String::as_str),
            Some("alice")
        );
    }

    #[test]
    fn bool_flag_defaults_to_false() {
        let cmd = clap::Command::new("t")
            .no_binary_name(true)
            .arg(FlagSpec::bool("watch").to_arg());

        let matches = cmd.try_get_matches_from(Vec::<String>::new()).unwrap();
        assert!(!matches.get_flag("watch"));
    }

    #[test]
    fn default_value_applies_when_absent() {
        let cmd = clap::Command::new("t")
            .no_binary_name(true)
            .arg(FlagSpec::string("confidence").default_value("0.9").to_arg());

        let matches = cmd.try_get_matches_from(Vec::<String>::new()).unwrap();
        assert_eq!(
            matches.get_one::<String>("confidence").map(String::as_str),
            Some("0.9")
        );
    }
}
