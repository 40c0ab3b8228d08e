//! Interactive menu shown when no subcommand is given
//!
//! Uses dialoguer on a terminal and plain line reads when stdin is piped,
//! so the menu can also be driven by scripts.

use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;

use dialoguer::Input;
use fixity_fs::ALGORITHM_NAME;

use crate::commands;
use crate::error::Result;

/// Option picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Generate,
    Verify,
}

impl MenuChoice {
    /// Parse the option typed by the user; anything but `1` or `2` is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Generate),
            "2" => Some(Self::Verify),
            _ => None,
        }
    }

    fn path_prompt(self) -> &'static str {
        match self {
            Self::Generate => "Enter the directory path",
            Self::Verify => "Enter the directory path to verify",
        }
    }
}

/// Print the menu, read a choice and a directory, and run the command.
pub fn run_menu() -> Result<()> {
    println!("Hashing Program using {}", ALGORITHM_NAME);
    println!("Select an option:");
    println!("1. Generate Hash");
    println!("2. Verify Hash");

    let answer = prompt("Option")?;
    let Some(choice) = MenuChoice::parse(&answer) else {
        println!("Invalid option selected. Program will exit.");
        return Ok(());
    };

    let path = directory_from_input(&prompt(choice.path_prompt())?);

    match choice {
        MenuChoice::Generate => commands::run_generate(&path),
        MenuChoice::Verify => commands::run_verify(&path, false),
    }
}

/// An empty answer means the current directory.
fn directory_from_input(input: &str) -> PathBuf {
    match input.trim() {
        "" => PathBuf::from("."),
        dir => PathBuf::from(dir),
    }
}

fn prompt(text: &str) -> Result<String> {
    if std::io::stdin().is_terminal() {
        let answer: String = Input::new()
            .with_prompt(text)
            .allow_empty(true)
            .interact_text()?;
        return Ok(answer.trim().to_string());
    }

    println!("{}:", text);
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
