//! Interactive mode
//!
//! Asks for a card count, prints the period, and offers another round.
//! Bad input is retried a bounded number of times. Answers come from
//! dialoguer prompts on a terminal, or line by line from piped stdin.

use crate::report::PeriodReport;
use dialoguer::Input;
use shuffle_period_core_rs::SimulationConfig;
use std::io::{BufRead, Write};
use std::process::ExitCode;

/// Bad card counts tolerated before giving up
const MAX_RETRIES: u8 = 3;

/// Ways the interactive session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Stop {
    /// The user declined another round
    #[error("Bye!")]
    Bye,

    /// The user answered something other than yes or no
    #[error("I QUIT!")]
    Quit,

    /// Too many card counts that were not numbers
    #[error("Too many bad tries. Exiting program.")]
    TooManyBadTries,
}

impl Stop {
    /// Process exit status for this ending
    pub fn code(self) -> u8 {
        match self {
            Stop::Bye => 0,
            Stop::Quit => 1,
            Stop::TooManyBadTries => 2,
        }
    }
}

impl From<Stop> for ExitCode {
    fn from(stop: Stop) -> Self {
        ExitCode::from(stop.code())
    }
}

/// Answer to "Try again?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
    Other,
}

impl From<&str> for Answer {
    fn from(input: &str) -> Self {
        match input.trim().chars().next() {
            Some('y') | Some('Y') => Answer::Yes,
            Some('n') | Some('N') => Answer::No,
            _ => Answer::Other,
        }
    }
}

/// Where answers to the prompts come from
pub trait Prompt {
    /// Show `prompt` and read one line of input
    fn ask(&mut self, prompt: &str) -> anyhow::Result<String>;
}

/// dialoguer prompts, for an interactive terminal
pub struct Terminal;

impl Prompt for Terminal {
    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        Ok(Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }
}

/// Answers read one per line, for piped or scripted input
pub struct Lines<R>(pub R);

impl<R: BufRead> Prompt for Lines<R> {
    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        print!("{}: ", prompt);
        std::io::stdout().flush()?;

        let mut line = String::new();
        if self.0.read_line(&mut line)? == 0 {
            println!();
            log::info!("input closed");
            return Err(Stop::Quit.into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Parse a card count the way the prompt accepts it
fn parse_card_count(input: &str) -> Option<u16> {
    input.trim().parse().ok()
}

fn intro() {
    println!("This program counts how many shuffles it takes for a deck to return to its starting order.");
    println!("Each shuffle deals the whole deck: the top card goes onto the table, the next one goes under the deck, and so on, alternating.");
    println!("The last card always goes onto the table. The table pile is then picked up as the new deck.");
    println!("You choose how many cards the deck has.");
    println!("Periods above 65535 shuffles cannot be reported; decks of a few hundred cards often reach that.");
}

/// Run rounds on stdin until the user stops
pub fn run(config: &SimulationConfig) -> anyhow::Result<()> {
    // dialoguer draws on stderr and refuses to run without a terminal there
    if console::Term::stderr().is_term() {
        session(&mut Terminal, config)
    } else {
        session(&mut Lines(std::io::stdin().lock()), config)
    }
}

/// Run rounds until the user stops, always ending in a [`Stop`]
pub fn session(prompt: &mut impl Prompt, config: &SimulationConfig) -> anyhow::Result<()> {
    intro();
    loop {
        let num_cards = read_card_count(prompt)?;
        println!("Calculating...");
        log::info!("simulating {} cards", num_cards);
        println!("{}", PeriodReport::simulate(num_cards, config));
        ask_retry(prompt)?;
    }
}

fn read_card_count(prompt: &mut impl Prompt) -> anyhow::Result<u16> {
    let mut retries = MAX_RETRIES;
    loop {
        println!();
        println!("How many cards should the deck have?");
        let input = prompt.ask("Number")?;

        if let Some(num_cards) = parse_card_count(&input) {
            return Ok(num_cards);
        }

        if retries == 0 {
            return Err(Stop::TooManyBadTries.into());
        }
        println!("Incorrect input. Please enter numeric values only!");
        ask_retry(prompt)?;
        retries -= 1;
    }
}

fn ask_retry(prompt: &mut impl Prompt) -> anyhow::Result<()> {
    let input = prompt.ask("Try again? (y/n)")?;

    match Answer::from(input.as_str()) {
        Answer::Yes => Ok(()),
        Answer::No => Err(Stop::Bye.into()),
        Answer::Other => Err(Stop::Quit.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Play a scripted session and return how it stopped
    fn play(script: &str) -> Stop {
        let mut prompt = Lines(Cursor::new(script.as_bytes()));
        let err = session(&mut prompt, &SimulationConfig::default()).unwrap_err();
        *err.downcast_ref::<Stop>().expect("session ends with a Stop")
    }

    #[test]
    fn test_fourth_bad_count_gives_up() {
        assert_eq!(play("a\ny\nb\ny\nc\ny\nd\ny\n"), Stop::TooManyBadTries);
    }

    #[test]
    fn test_bad_count_then_good_count() {
        assert_eq!(play("ten\ny\n4\nn\n"), Stop::Bye);
    }

    #[test]
    fn test_bad_count_then_no_retry() {
        assert_eq!(play("ten\nn\n"), Stop::Bye);
    }

    #[test]
    fn test_unclear_retry_answer_quits() {
        assert_eq!(play("52\nx\n"), Stop::Quit);
    }

    #[test]
    fn test_declined_retry_says_bye() {
        assert_eq!(play("52\nn\n"), Stop::Bye);
    }

    #[test]
    fn test_several_rounds() {
        assert_eq!(play("1\ny\n2\nyes\n52\nN\n"), Stop::Bye);
    }

    #[test]
    fn test_closed_input_quits() {
        assert_eq!(play(""), Stop::Quit);
        assert_eq!(play("52\n"), Stop::Quit);
    }

    #[test]
    fn test_lines_strip_line_endings() {
        let mut prompt = Lines(Cursor::new("52\r\n y \n".as_bytes()));
        assert_eq!(prompt.ask("Number").unwrap(), "52");
        assert_eq!(prompt.ask("Try again? (y/n)").unwrap(), " y ");
    }

    #[test]
    fn test_answers() {
        assert_eq!(Answer::from("y"), Answer::Yes);
        assert_eq!(Answer::from(" Yes"), Answer::Yes);
        assert_eq!(Answer::from("N"), Answer::No);
        assert_eq!(Answer::from("maybe"), Answer::Other);
        assert_eq!(Answer::from(""), Answer::Other);
    }

    #[test]
    fn test_card_counts() {
        assert_eq!(parse_card_count("52"), Some(52));
        assert_eq!(parse_card_count(" 7\n"), Some(7));
        assert_eq!(parse_card_count("0"), Some(0));
        assert_eq!(parse_card_count("-3"), None);
        assert_eq!(parse_card_count("65536"), None);
        assert_eq!(parse_card_count("ten"), None);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Stop::Bye.code(), 0);
        assert_eq!(Stop::Quit.code(), 1);
        assert_eq!(Stop::TooManyBadTries.code(), 2);
    }
}
