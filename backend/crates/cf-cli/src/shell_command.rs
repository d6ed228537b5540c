//! Parsing of interactive shell lines.

use crate::{CliError, CliResult};

use cf_core::{CollectionDraft, ProjectDraft, Role};

use std::path::PathBuf;
use std::str::FromStr;

pub const HELP: &str = "\
commands:
  signup <email> <password> <investor|project>
  signin <email> <password> <investor|project>
  signout
  whoami
  goto <path>
  projects
  project-create <title> <location> <target> <min-investment> <apy> <months> [description]
  collection-create <name> <price> <supply> <apy> [image-file]
  collections
  help
  quit
arguments containing spaces go in double quotes";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    SignUp {
        email: String,
        password: String,
        role: Role,
    },
    SignIn {
        email: String,
        password: String,
        role: Role,
    },
    SignOut,
    WhoAmI,
    Goto {
        path: String,
    },
    Projects,
    ProjectCreate {
        draft: ProjectDraft,
    },
    CollectionCreate {
        draft: CollectionDraft,
        image: Option<PathBuf>,
    },
    Collections,
    Help,
    Quit,
}

impl ShellCommand {
    /// `None` for blank lines and `#` comments.
    pub fn parse(line: &str) -> CliResult<Option<Self>> {
        let words = tokenize(line)?;
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };
        if name.starts_with('#') {
            return Ok(None);
        }

        let command = match (name.as_str(), args) {
            ("signup", [email, password, role]) => Self::SignUp {
                email: email.clone(),
                password: password.clone(),
                role: parse_role(role)?,
            },
            ("signin", [email, password, role]) => Self::SignIn {
                email: email.clone(),
                password: password.clone(),
                role: parse_role(role)?,
            },
            ("signout", []) => Self::SignOut,
            ("whoami", []) => Self::WhoAmI,
            ("goto", [path]) => Self::Goto { path: path.clone() },
            ("projects", []) => Self::Projects,
            ("project-create", [title, location, target, min, apy, months, rest @ ..])
                if rest.len() <= 1 =>
            {
                Self::ProjectCreate {
                    draft: ProjectDraft {
                        title: title.clone(),
                        location: location.clone(),
                        target_amount: parse_number("target", target)?,
                        min_investment: parse_number("min-investment", min)?,
                        apy: parse_number("apy", apy)?,
                        duration: parse_number("months", months)?,
                        description: rest.first().cloned().unwrap_or_default(),
                        sections: Vec::new(),
                    },
                }
            }
            ("collection-create", [name, price, supply, apy, rest @ ..]) if rest.len() <= 1 => {
                Self::CollectionCreate {
                    draft: CollectionDraft {
                        name: name.clone(),
                        price: parse_number("price", price)?,
                        supply: parse_number("supply", supply)?,
                        apy: parse_number("apy", apy)?,
                        ..CollectionDraft::default()
                    },
                    image: rest.first().map(PathBuf::from),
                }
            }
            ("collections", []) => Self::Collections,
            ("help" | "?", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            (
                "signup" | "signin" | "signout" | "whoami" | "goto" | "projects"
                | "project-create" | "collection-create" | "collections" | "help" | "quit"
                | "exit",
                _,
            ) => {
                return Err(CliError::usage(format!(
                    "wrong arguments for '{name}' (try 'help')"
                )));
            }
            _ => {
                return Err(CliError::usage(format!(
                    "unknown command '{name}' (try 'help')"
                )));
            }
        };
        Ok(Some(command))
    }
}

/// Split on whitespace, keeping double-quoted runs together.
pub fn tokenize(line: &str) -> CliResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err(CliError::usage("unterminated quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn parse_role(value: &str) -> CliResult<Role> {
    Role::from_str(value)
        .map_err(|_| CliError::usage(format!("role must be investor or project, got '{value}'")))
}

fn parse_number<T: FromStr>(field: &str, value: &str) -> CliResult<T> {
    value
        .parse()
        .map_err(|_| CliError::usage(format!("{field} must be a number, got '{value}'")))
}
