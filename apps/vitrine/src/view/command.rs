//! Shell command parsing.

use std::str::FromStr;

use thiserror::Error;
use vitrine_core::{CategoryFilter, ProductId};

/// One line typed at the storefront prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `list [category]`: fetch and show products; no argument keeps the
    /// current filter
    List(Option<CategoryFilter>),
    Categories,
    Show(ProductId),
    Add {
        id: ProductId,
        quantity: Option<i64>,
    },
    Increment(ProductId),
    Decrement(ProductId),
    Remove(ProductId),
    Cart,
    Clear,
    Checkout,
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a product id")]
    InvalidProductId(String),

    #[error("'{0}' is not a quantity")]
    InvalidQuantity(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Too many arguments for '{0}'")]
    TooManyArguments(&'static str),
}

impl ShellCommand {
    /// Parses a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<ShellCommand>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => {
                // Category tags may contain spaces ("men's clothing")
                let tag = args.join(" ");
                if tag.is_empty() {
                    ShellCommand::List(None)
                } else {
                    let filter = CategoryFilter::parse(&tag)
                        .map_err(|e| ParseError::InvalidCategory(e.to_string()))?;
                    ShellCommand::List(Some(filter))
                }
            }
            "categories" | "cats" => no_args("categories", &args, ShellCommand::Categories)?,
            "show" => ShellCommand::Show(single_id("show", &args)?),
            "add" => match args.as_slice() {
                [] => return Err(missing("add")),
                [id] => ShellCommand::Add {
                    id: parse_id(id)?,
                    quantity: None,
                },
                [id, qty] => ShellCommand::Add {
                    id: parse_id(id)?,
                    quantity: Some(parse_quantity(qty)?),
                },
                _ => return Err(ParseError::TooManyArguments("add")),
            },
            "inc" | "+" => ShellCommand::Increment(single_id("inc", &args)?),
            "dec" | "-" => ShellCommand::Decrement(single_id("dec", &args)?),
            "rm" | "remove" => ShellCommand::Remove(single_id("rm", &args)?),
            "cart" => no_args("cart", &args, ShellCommand::Cart)?,
            "clear" => no_args("clear", &args, ShellCommand::Clear)?,
            "checkout" => no_args("checkout", &args, ShellCommand::Checkout)?,
            "refresh" => no_args("refresh", &args, ShellCommand::Refresh)?,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            _ => return Err(ParseError::UnknownCommand(verb.to_string())),
        };

        Ok(Some(command))
    }
}

impl FromStr for ShellCommand {
    type Err = ParseError;

    /// Like [`ShellCommand::parse`], treating a blank line as `help`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ShellCommand::parse(s)?.unwrap_or(ShellCommand::Help))
    }
}

fn missing(command: &'static str) -> ParseError {
    ParseError::MissingArgument {
        command,
        argument: "a product id",
    }
}

fn no_args(
    command: &'static str,
    args: &[&str],
    parsed: ShellCommand,
) -> Result<ShellCommand, ParseError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(ParseError::TooManyArguments(command))
    }
}

fn single_id(command: &'static str, args: &[&str]) -> Result<ProductId, ParseError> {
    match args {
        [] => Err(missing(command)),
        [id] => parse_id(id),
        _ => Err(ParseError::TooManyArguments(command)),
    }
}

fn parse_id(raw: &str) -> Result<ProductId, ParseError> {
    raw.parse()
        .map_err(|_| ParseError::InvalidProductId(raw.to_string()))
}

fn parse_quantity(raw: &str) -> Result<i64, ParseError> {
    raw.parse()
        .map_err(|_| ParseError::InvalidQuantity(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ShellCommand {
        ShellCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(ShellCommand::parse("   ").unwrap(), None);
        assert_eq!("".parse::<ShellCommand>().unwrap(), ShellCommand::Help);
    }

    #[test]
    fn test_list() {
        assert_eq!(parse("list"), ShellCommand::List(None));
        assert_eq!(parse("list all"), ShellCommand::List(Some(CategoryFilter::All)));
        assert_eq!(
            parse("LIST men's   clothing"),
            ShellCommand::List(Some(CategoryFilter::Category("men's clothing".into())))
        );
        assert!(matches!(
            ShellCommand::parse("list shoes/boots"),
            Err(ParseError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_cart_commands() {
        let id = ProductId::new(3);
        assert_eq!(parse("add 3"), ShellCommand::Add { id, quantity: None });
        assert_eq!(parse("add 3 4"), ShellCommand::Add { id, quantity: Some(4) });
        assert_eq!(parse("inc 3"), ShellCommand::Increment(id));
        assert_eq!(parse("dec 3"), ShellCommand::Decrement(id));
        assert_eq!(parse("rm 3"), ShellCommand::Remove(id));
        assert_eq!(parse("show 3"), ShellCommand::Show(id));
        assert_eq!(parse("checkout"), ShellCommand::Checkout);
        assert_eq!(parse("q"), ShellCommand::Quit);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            ShellCommand::parse("buy 3"),
            Err(ParseError::UnknownCommand("buy".into()))
        );
        assert_eq!(
            ShellCommand::parse("add"),
            Err(ParseError::MissingArgument {
                command: "add",
                argument: "a product id"
            })
        );
        assert_eq!(
            ShellCommand::parse("show abc"),
            Err(ParseError::InvalidProductId("abc".into()))
        );
        assert_eq!(
            ShellCommand::parse("add 3 lots"),
            Err(ParseError::InvalidQuantity("lots".into()))
        );
        assert_eq!(
            ShellCommand::parse("cart now"),
            Err(ParseError::TooManyArguments("cart"))
        );
    }
}
