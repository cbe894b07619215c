pub mod console;
pub mod driver;
pub mod error;
pub mod feedback;
pub mod session;

pub use console::{Console, Reply, Terminal};
pub use error::{GameError, GuessError};
pub use session::{Session, SessionOutcome};
