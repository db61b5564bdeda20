/// One parsed REPL line: `<name> [arg1 arg2 ...]`.
///
/// Arguments are kept as the raw tokens the user typed; coercion happens in
/// the registry so that error messages can quote them verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandLine {
    pub name: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        CommandLine {
            name: name.into(),
            args,
        }
    }
}
