use std::io::{self, BufRead, Write};
use std::thread;

use log::{debug, warn};
use tokio::sync::mpsc;

use crate::error::GameError;

/// What came back from the player for one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Line(String),
    /// Ctrl-C, or the input stream ended.
    Cancelled,
}

/// Everything the game needs from the outside world.
#[allow(async_fn_in_trait)]
pub trait Console {
    fn say(&mut self, text: &str) -> Result<(), GameError>;
    async fn read_line(&mut self, prompt: &str) -> Result<Reply, GameError>;
}

/// Stdin/stdout console.
///
/// Stdin is read on its own thread so that a pending read never keeps the
/// process alive after the game is over; lines are handed over in order
/// through a channel and raced against Ctrl-C.
pub struct Terminal {
    lines: mpsc::UnboundedReceiver<String>,
}

impl Terminal {
    pub fn new() -> Self {
        Self::from_reader(io::BufReader::new(io::stdin()))
    }

    /// Feeds the game from any line source. The source ending reads as a cancellation.
    pub fn from_reader<R: BufRead + Send + 'static>(reader: R) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read player input: {}", e);
                        break;
                    }
                }
            }
            debug!("input reader finished");
        });
        Terminal { lines: rx }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Terminal {
    fn say(&mut self, text: &str) -> Result<(), GameError> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text)?;
        Ok(())
    }

    async fn read_line(&mut self, prompt: &str) -> Result<Reply, GameError> {
        {
            let mut out = io::stdout().lock();
            write!(out, "{}", prompt)?;
            out.flush()?;
        }
        let reply = tokio::select! {
            res = tokio::signal::ctrl_c() => {
                res?;
                // keep the next message off the prompt line
                println!();
                Reply::Cancelled
            },
            line = self.lines.recv() => match line {
                Some(line) => Reply::Line(line),
                None => {
                    debug!("input closed, treating as cancellation");
                    println!();
                    Reply::Cancelled
                }
            },
        };
        Ok(reply)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned replies and records every line said and every prompt shown.
    /// Once the script runs out every read is a cancellation.
    #[derive(Default)]
    pub struct ScriptedConsole {
        replies: VecDeque<Reply>,
        pub said: Vec<String>,
        pub prompts: Vec<String>,
    }

    impl ScriptedConsole {
        pub fn new(lines: &[&str]) -> Self {
            ScriptedConsole {
                replies: lines.iter().map(|l| Reply::Line(l.to_string())).collect(),
                ..Default::default()
            }
        }

        pub fn cancel(mut self) -> Self {
            self.replies.push_back(Reply::Cancelled);
            self
        }

        pub fn then(mut self, lines: &[&str]) -> Self {
            self.replies
                .extend(lines.iter().map(|l| Reply::Line(l.to_string())));
            self
        }

        pub fn remaining(&self) -> usize {
            self.replies.len()
        }

        pub fn said_containing(&self, needle: &str) -> usize {
            self.said.iter().filter(|s| s.contains(needle)).count()
        }
    }

    impl Console for ScriptedConsole {
        fn say(&mut self, text: &str) -> Result<(), GameError> {
            self.said.push(text.to_string());
            Ok(())
        }

        async fn read_line(&mut self, prompt: &str) -> Result<Reply, GameError> {
            self.prompts.push(prompt.to_string());
            Ok(self.replies.pop_front().unwrap_or(Reply::Cancelled))
        }
    }
}
