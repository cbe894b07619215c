use log::info;

use crate::console::{Console, Reply};
use crate::error::GameError;
use crate::session::{Session, SessionOutcome};

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Answer {
    Yes,
    No,
}

/// Case-insensitive, ignores surrounding whitespace.
pub fn parse_answer(input: &str) -> Option<Answer> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(Answer::Yes),
        "n" | "no" => Some(Answer::No),
        _ => None,
    }
}

/// Asks until the player answers yes or no. `None` means the player cancelled.
pub async fn ask_play_again<C: Console>(console: &mut C) -> Result<Option<Answer>, GameError> {
    loop {
        match console
            .read_line("Would you like to play again? (y/n): ")
            .await?
        {
            Reply::Cancelled => return Ok(None),
            Reply::Line(line) => match parse_answer(&line) {
                Some(answer) => return Ok(Some(answer)),
                None => console.say("Please enter 'y' for yes or 'n' for no.")?,
            },
        }
    }
}

/// Plays sessions back to back until the player declines or cancels.
/// Returns the number of sessions won.
pub async fn run_forever<C, F>(console: &mut C, mut new_session: F) -> Result<u32, GameError>
where
    C: Console,
    F: FnMut() -> Session,
{
    console.say("Welcome to the Number Guessing Game!")?;
    console.say("========================================")?;
    let mut won = 0;
    loop {
        match new_session().run(console).await? {
            SessionOutcome::Cancelled => break,
            SessionOutcome::Won(_) => won += 1,
        }
        match ask_play_again(console).await? {
            Some(Answer::Yes) => console.say("Starting a new game...")?,
            Some(Answer::No) => {
                console.say("Thanks for playing! Goodbye!")?;
                break;
            }
            None => break,
        }
    }
    info!("Leaving after {} won sessions", won);
    Ok(won)
}
