use std::fmt;

/// How close a wrong guess landed, hottest first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub enum Proximity {
    SoClose,
    VeryHot,
    Hot,
    Warm,
    Cool,
    Cold,
    VeryCold,
    Freezing,
}

impl Proximity {
    /// Boundaries are inclusive on the upper end: 3 is very hot, 5 is hot, 10 is warm.
    pub fn from_distance(distance: u32) -> Self {
        match distance {
            0 | 1 => Proximity::SoClose,
            2..=3 => Proximity::VeryHot,
            4..=5 => Proximity::Hot,
            6..=10 => Proximity::Warm,
            11..=15 => Proximity::Cool,
            16..=25 => Proximity::Cold,
            26..=35 => Proximity::VeryCold,
            _ => Proximity::Freezing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Proximity::SoClose => "so close",
            Proximity::VeryHot => "very hot",
            Proximity::Hot => "hot",
            Proximity::Warm => "warm",
            Proximity::Cool => "cool",
            Proximity::Cold => "cold",
            Proximity::VeryCold => "very cold",
            Proximity::Freezing => "freezing",
        }
    }

    fn text(self) -> &'static str {
        match self {
            Proximity::SoClose => "SO CLOSE! You're just 1 away!",
            Proximity::VeryHot => "Very hot! You're super close!",
            Proximity::Hot => "Hot! You're getting close!",
            Proximity::Warm => "Warm! You're in the right area!",
            Proximity::Cool => "Cool. You're somewhat close.",
            Proximity::Cold => "Cold. You're getting further away.",
            Proximity::VeryCold => "Very cold! You're quite far.",
            Proximity::Freezing => "Freezing! You're very far away!",
        }
    }
}

impl fmt::Display for Proximity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Direction {
    Higher,
    Lower,
}

impl Direction {
    /// `None` when the guess is the secret: there is nowhere left to go.
    pub fn of(guess: u32, secret: u32) -> Option<Self> {
        if guess < secret {
            Some(Direction::Higher)
        } else if guess > secret {
            Some(Direction::Lower)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Higher => "go higher",
            Direction::Lower => "go lower",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Higher => write!(f, "Go higher!"),
            Direction::Lower => write!(f, "Go lower!"),
        }
    }
}

/// Combined line shown after a wrong guess.
pub fn hint(proximity: Proximity, direction: Direction, attempts: u32) -> String {
    format!("{} {} (Attempts: {})", proximity, direction, attempts)
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub enum VictoryTier {
    SingleTry,
    Amazing,
    Great,
    Nice,
    Persistent,
}

impl VictoryTier {
    pub fn from_attempts(attempts: u32) -> Self {
        match attempts {
            0 | 1 => VictoryTier::SingleTry,
            2..=3 => VictoryTier::Amazing,
            4..=6 => VictoryTier::Great,
            7..=10 => VictoryTier::Nice,
            _ => VictoryTier::Persistent,
        }
    }

    pub fn message(self, attempts: u32) -> String {
        match self {
            VictoryTier::SingleTry => {
                "INCREDIBLE! You got it in just 1 try! Are you psychic?".to_string()
            }
            VictoryTier::Amazing => format!(
                "AMAZING! You got it in only {} attempts! You're a natural!",
                attempts
            ),
            VictoryTier::Great => {
                format!("GREAT JOB! You got it in {} attempts! Well done!", attempts)
            }
            VictoryTier::Nice => format!(
                "NICE WORK! You got it in {} attempts! Good guessing!",
                attempts
            ),
            VictoryTier::Persistent => format!(
                "CONGRATULATIONS! You got it in {} attempts! Persistence pays off!",
                attempts
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn proximity_table_boundaries() {
        let expected = [
            (1, Proximity::SoClose),
            (2, Proximity::VeryHot),
            (3, Proximity::VeryHot),
            (4, Proximity::Hot),
            (5, Proximity::Hot),
            (6, Proximity::Warm),
            (10, Proximity::Warm),
            (11, Proximity::Cool),
            (15, Proximity::Cool),
            (16, Proximity::Cold),
            (25, Proximity::Cold),
            (26, Proximity::VeryCold),
            (35, Proximity::VeryCold),
            (36, Proximity::Freezing),
            (40, Proximity::Freezing),
            (99, Proximity::Freezing),
        ];
        for (distance, proximity) in expected {
            assert_eq!(Proximity::from_distance(distance), proximity, "d={distance}");
        }
        assert_eq!(Proximity::from_distance(1).label(), "so close");
        assert_eq!(Proximity::from_distance(40).label(), "freezing");
    }

    #[test]
    fn proximity_never_gets_hotter_further_away() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let a: u32 = rng.random_range(1..=99);
            let b: u32 = rng.random_range(a..=99);
            assert!(Proximity::from_distance(a) <= Proximity::from_distance(b));
        }
    }

    #[test]
    fn direction() {
        assert_eq!(Direction::of(25, 50), Some(Direction::Higher));
        assert_eq!(Direction::of(75, 50), Some(Direction::Lower));
        assert_eq!(Direction::of(50, 50), None);
        assert_eq!(Direction::Higher.label(), "go higher");
        assert_eq!(Direction::Lower.label(), "go lower");
    }

    #[test]
    fn hint_text() {
        assert_eq!(
            hint(Proximity::Cold, Direction::Higher, 1),
            "Cold. You're getting further away. Go higher! (Attempts: 1)"
        );
    }

    #[test]
    fn victory_tiers() {
        assert_eq!(VictoryTier::from_attempts(1), VictoryTier::SingleTry);
        assert_eq!(VictoryTier::from_attempts(2), VictoryTier::Amazing);
        assert_eq!(VictoryTier::from_attempts(3), VictoryTier::Amazing);
        assert_eq!(VictoryTier::from_attempts(4), VictoryTier::Great);
        assert_eq!(VictoryTier::from_attempts(6), VictoryTier::Great);
        assert_eq!(VictoryTier::from_attempts(7), VictoryTier::Nice);
        assert_eq!(VictoryTier::from_attempts(10), VictoryTier::Nice);
        assert_eq!(VictoryTier::from_attempts(11), VictoryTier::Persistent);
        assert_eq!(VictoryTier::from_attempts(500), VictoryTier::Persistent);
    }

    #[test]
    fn victory_message_mentions_attempts() {
        assert!(VictoryTier::Great.message(5).contains("5 attempts"));
        assert!(VictoryTier::SingleTry.message(1).contains("1 try"));
    }
}
