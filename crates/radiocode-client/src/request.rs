//! Command selection and ordered request parameter building

use radiocode_core::RadioModel;

/// Server-side operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Login,
    Calc,
    Info,
    List,
}

impl Command {
    /// Wire value for the `command` parameter.
    pub fn name(self) -> &'static str {
        match self {
            Command::Login => "login",
            Command::Calc => "calc",
            Command::Info => "info",
            Command::List => "list",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Legal form-body parameter names.
///
/// `Key` is reserved for the client itself, which prepends the activation
/// key when the request is posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKey {
    Key,
    Command,
    RadioModel,
    Serial,
    Extra,
}

impl ParamKey {
    pub fn name(self) -> &'static str {
        match self {
            ParamKey::Key => "key",
            ParamKey::Command => "command",
            ParamKey::RadioModel => "radio_model",
            ParamKey::Serial => "serial",
            ParamKey::Extra => "extra",
        }
    }
}

/// Ordered parameter set for one request.
///
/// Built fresh per call and never reused; entries keep insertion order so
/// the form body is stable. The `command` entry is always present and
/// always first.
#[derive(Debug, Clone)]
pub struct RequestParams {
    command: Command,
    entries: Vec<(ParamKey, String)>,
}

impl RequestParams {
    /// Start a parameter set for `command`.
    pub fn command(command: Command) -> Self {
        Self {
            command,
            entries: vec![(ParamKey::Command, command.name().to_string())],
        }
    }

    /// Append the `radio_model` parameter.
    pub fn radio_model(mut self, name: &str) -> Self {
        self.entries.push((ParamKey::RadioModel, name.to_string()));
        self
    }

    /// Append the `serial` parameter.
    pub fn serial(mut self, serial: &str) -> Self {
        self.entries.push((ParamKey::Serial, serial.to_string()));
        self
    }

    /// Append the `extra` parameter.
    pub fn extra(mut self, extra: &str) -> Self {
        self.entries.push((ParamKey::Extra, extra.to_string()));
        self
    }

    /// The command this set was built for.
    pub fn command_kind(&self) -> Command {
        self.command
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (ParamKey, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

/// Anything that can stand in for the `radio_model` request parameter:
/// a [`RadioModel`] or a plain model name.
pub trait AsModelName {
    fn as_model_name(&self) -> &str;
}

impl AsModelName for str {
    fn as_model_name(&self) -> &str {
        self
    }
}

impl AsModelName for String {
    fn as_model_name(&self) -> &str {
        self
    }
}

impl AsModelName for RadioModel {
    fn as_model_name(&self) -> &str {
        self.name()
    }
}

impl<T: AsModelName + ?Sized> AsModelName for &T {
    fn as_model_name(&self) -> &str {
        (**self).as_model_name()
    }
}
