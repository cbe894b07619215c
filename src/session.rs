use std::num::IntErrorKind;

use log::{debug, info, trace};
use rand::random_range;

use crate::console::{Console, Reply};
use crate::error::{GameError, GuessError};
use crate::feedback::{self, Direction, Proximity, VictoryTier};

pub const MIN_GUESS: u32 = 1;
pub const MAX_GUESS: u32 = 100;

const BANNER: &str = "==================================================";

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum SessionOutcome {
    Won(u32),
    Cancelled,
}

/// Result of feeding one line of input to a session.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Turn {
    Rejected(GuessError),
    Miss {
        proximity: Proximity,
        direction: Direction,
        attempts: u32,
    },
    Won {
        attempts: u32,
        secret: u32,
    },
}

pub fn parse_guess(line: &str) -> Result<u32, GuessError> {
    let line = line.trim();
    let value: i64 = match line.parse::<i64>() {
        Ok(value) => value,
        // still a whole number, just far outside the range
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => i64::MIN,
        Err(_) => return Err(GuessError::NotANumber(line.to_string())),
    };
    if value < MIN_GUESS as i64 || value > MAX_GUESS as i64 {
        return Err(GuessError::OutOfRange(value));
    }
    Ok(value as u32)
}

/// One round: a secret and the number of valid guesses made against it.
#[derive(Debug)]
pub struct Session {
    secret: u32,
    attempts: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_secret(random_range(MIN_GUESS..=MAX_GUESS))
    }

    pub fn with_secret(secret: u32) -> Self {
        debug_assert!((MIN_GUESS..=MAX_GUESS).contains(&secret));
        Session {
            secret,
            attempts: 0,
        }
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Attempts only move for guesses that parse and lie in range.
    pub fn evaluate(&mut self, line: &str) -> Turn {
        let guess = match parse_guess(line) {
            Ok(guess) => guess,
            Err(e) => return Turn::Rejected(e),
        };
        self.attempts += 1;
        match Direction::of(guess, self.secret) {
            None => Turn::Won {
                attempts: self.attempts,
                secret: self.secret,
            },
            Some(direction) => Turn::Miss {
                proximity: Proximity::from_distance(guess.abs_diff(self.secret)),
                direction,
                attempts: self.attempts,
            },
        }
    }

    pub async fn run<C: Console>(mut self, console: &mut C) -> Result<SessionOutcome, GameError> {
        info!("Session started");
        trace!("Secret is {}", self.secret);
        console.say(&format!(
            "I'm thinking of a number between {} and {}. Can you guess it?",
            MIN_GUESS, MAX_GUESS
        ))?;
        loop {
            let prompt = format!(
                "Enter your guess ({}-{}) [Attempts: {}]: ",
                MIN_GUESS, MAX_GUESS, self.attempts
            );
            let line = match console.read_line(&prompt).await? {
                Reply::Line(line) => line,
                Reply::Cancelled => {
                    console.say("Game cancelled. Thanks for playing!")?;
                    info!("Session cancelled after {} attempts", self.attempts);
                    return Ok(SessionOutcome::Cancelled);
                }
            };
            let turn = self.evaluate(&line);
            debug!("{:?} -> {:?}", line, turn);
            match turn {
                Turn::Rejected(e) => console.say(&e.to_string())?,
                Turn::Miss {
                    proximity,
                    direction,
                    attempts,
                } => console.say(&feedback::hint(proximity, direction, attempts))?,
                Turn::Won { attempts, secret } => {
                    console.say(BANNER)?;
                    console.say(&VictoryTier::from_attempts(attempts).message(attempts))?;
                    console.say(&format!("The number was: {}", secret))?;
                    console.say(BANNER)?;
                    info!("Session won in {} attempts", attempts);
                    return Ok(SessionOutcome::Won(attempts));
                }
            }
        }
    }
}
