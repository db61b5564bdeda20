use pest::error::{Error, ErrorVariant};
use pest::iterators::Pair;
use pest::{Parser, Position};
use pest_derive::Parser;

use super::ast::CommandLine;

#[derive(Parser)]
#[grammar = "parser/command_line.pest"] // relative to src
pub struct CommandLineParser;

impl CommandLineParser {
    /// Split one line of user input into a command name and its raw argument
    /// tokens. Blank lines yield `Ok(None)`.
    pub fn parse_line(line: &str) -> Result<Option<CommandLine>, Error<Rule>> {
        match CommandLineParser::parse(Rule::command_line, line)?.next() {
            Some(command_line) => build_command_line(command_line),
            None => Err(Error::new_from_pos(
                ErrorVariant::CustomError {
                    message: "Empty parse result".to_string(),
                },
                Position::from_start(line),
            )),
        }
    }
}

fn build_command_line(pair: Pair<Rule>) -> Result<Option<CommandLine>, Error<Rule>> {
    let mut name = None;
    let mut args = vec![];
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::command_name => name = Some(inner_pair.as_str().to_string()),
            Rule::argument => args.push(inner_pair.as_str().to_string()),
            Rule::EOI => { /* Do nothing */ }
            _ => return Err(get_unexpected_error(&inner_pair)),
        }
    }
    Ok(name.map(|name| CommandLine { name, args }))
}

fn get_unexpected_error(pair: &Pair<Rule>) -> Error<Rule> {
    let message = format!("Unexpected state reached [{:?}]", pair.as_rule());
    Error::new_from_span(ErrorVariant::CustomError { message }, pair.as_span())
}
