use std::str::FromStr;

use strum::IntoEnumIterator;
use swap_core::{Condition, ItemType, ListingDraft, Location};

pub const HELP: &str = "\
commands:
  login <email> <password...>
  signup <email> <password> <confirm...>
  forgot <email>
  verify <code>
  verify-forgot <code>
  update <new password...>
  signout
  query <text...>
  filter type|location|condition <value|none>
  search
  preview | browse
  list <type> <condition> <location> <emoji> <title...>
  status
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login {
        email: String,
        password: String,
    },
    Signup {
        email: String,
        password: String,
        confirm: String,
    },
    Forgot { email: String },
    Verify { code: String },
    VerifyForgot { code: String },
    Update { password: String },
    SignOut,
    Query(String),
    FilterType(Option<ItemType>),
    FilterLocation(Option<Location>),
    FilterCondition(Option<Condition>),
    Search,
    Preview,
    Browse,
    List(ListingDraft),
    Status,
    Help,
    Quit,
}

/// Parses one input line. `Ok(None)` means a blank line.
///
/// The last password argument runs to the end of the line, so it may contain spaces.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some((verb, rest)) = next_word(line) else {
        return Ok(None);
    };

    let command = match verb {
        "login" => {
            let (email, rest) = next_word(rest).ok_or_else(|| usage(line))?;
            Command::Login {
                email: email.to_string(),
                password: rest_of_line(rest).ok_or_else(|| usage(line))?,
            }
        }
        "signup" => {
            let (email, rest) = next_word(rest).ok_or_else(|| usage(line))?;
            let (password, rest) = next_word(rest).ok_or_else(|| usage(line))?;
            Command::Signup {
                email: email.to_string(),
                password: password.to_string(),
                confirm: rest_of_line(rest).ok_or_else(|| usage(line))?,
            }
        }
        "update" => Command::Update {
            password: rest_of_line(rest).ok_or_else(|| usage(line))?,
        },
        _ => parse_words(verb, rest).ok_or_else(|| usage(line))??,
    };
    Ok(Some(command))
}

/// Commands whose arguments are plain whitespace-separated words.
fn parse_words(verb: &str, rest: &str) -> Option<Result<Command, String>> {
    let args: Vec<&str> = rest.split_whitespace().collect();
    let command = match (verb, args.as_slice()) {
        ("forgot", [email]) => Command::Forgot {
            email: email.to_string(),
        },
        ("verify", [code]) => Command::Verify {
            code: code.to_string(),
        },
        ("verify-forgot", [code]) => Command::VerifyForgot {
            code: code.to_string(),
        },
        ("signout", []) => Command::SignOut,
        ("query", words) => Command::Query(words.join(" ")),
        ("filter", [field, value @ ..]) if !value.is_empty() => {
            return Some(parse_filter(field, &value.join(" ")));
        }
        ("search", []) => Command::Search,
        ("preview", []) => Command::Preview,
        ("browse", []) => Command::Browse,
        ("list", [item_type, condition, location, emoji, title @ ..]) if !title.is_empty() => {
            let title = title.join(" ");
            return Some(parse_listing(item_type, condition, location, emoji, &title));
        }
        ("status", []) => Command::Status,
        ("help", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        _ => return None,
    };
    Some(Ok(command))
}

fn parse_listing(
    item_type: &str,
    condition: &str,
    location: &str,
    emoji: &str,
    title: &str,
) -> Result<Command, String> {
    Ok(Command::List(ListingDraft {
        item_type: catalog_value(item_type)?,
        condition: catalog_value(condition)?,
        location: catalog_value(location)?,
        emoji: catalog_value(emoji)?,
        title: title.to_string(),
        description: String::new(),
    }))
}

fn parse_filter(field: &str, value: &str) -> Result<Command, String> {
    let clear = value.eq_ignore_ascii_case("none");
    match field {
        "type" if clear => Ok(Command::FilterType(None)),
        "type" => Ok(Command::FilterType(Some(catalog_value(value)?))),
        "location" if clear => Ok(Command::FilterLocation(None)),
        "location" => Ok(Command::FilterLocation(Some(catalog_value(value)?))),
        "condition" if clear => Ok(Command::FilterCondition(None)),
        "condition" => Ok(Command::FilterCondition(Some(catalog_value(value)?))),
        other => Err(format!("unknown filter field {other:?}")),
    }
}

fn catalog_value<T>(input: &str) -> Result<T, String>
where
    T: FromStr + IntoEnumIterator + AsRef<str>,
{
    input.parse().map_err(|_| {
        let options: Vec<String> = T::iter().map(|v| v.as_ref().to_string()).collect();
        format!("unknown value {input:?}; expected one of {}", options.join(", "))
    })
}

fn next_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(end) => Some(input.split_at(end)),
        None => Some((input, "")),
    }
}

/// The remainder of the line, minus the separating whitespace.
fn rest_of_line(input: &str) -> Option<String> {
    let rest = input.trim_start();
    (!rest.is_empty()).then(|| rest.to_string())
}

fn usage(line: &str) -> String {
    format!("cannot parse {line:?}; try `help`")
}
