//! Seats around the table and the two partnerships.

use core::fmt;

/// A seat at the table, numbered 1 to 4 clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Seat {
    /// Seat 1.
    One,
    /// Seat 2.
    Two,
    /// Seat 3.
    Three,
    /// Seat 4.
    Four,
}

/// A partnership. Partners sit across from each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    /// Seats 1 and 3.
    One,
    /// Seats 2 and 4.
    Two,
}

impl Seat {
    /// All seats in clockwise order.
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Seat number, 1 to 4.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Zero-based position in [`Seat::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
            Self::Four => 3,
        }
    }

    /// Looks a seat up by its number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// The next seat clockwise (to this seat's left).
    #[must_use]
    pub const fn left(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::Three,
            Self::Three => Self::Four,
            Self::Four => Self::One,
        }
    }

    /// The seat across the table.
    #[must_use]
    pub const fn partner(self) -> Self {
        self.left().left()
    }

    /// The team this seat plays for.
    #[must_use]
    pub const fn team(self) -> Team {
        match self {
            Self::One | Self::Three => Team::One,
            Self::Two | Self::Four => Team::Two,
        }
    }

    /// Seats in playing order, starting with `self`.
    #[must_use]
    pub const fn ring(self) -> [Self; 4] {
        let second = self.left();
        let third = second.left();
        [self, second, third, third.left()]
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player{}", self.number())
    }
}

impl Team {
    /// Both teams.
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    /// Zero-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// The other team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// The two seats on this team.
    #[must_use]
    pub const fn seats(self) -> [Seat; 2] {
        match self {
            Self::One => [Seat::One, Seat::Three],
            Self::Two => [Seat::Two, Seat::Four],
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {}", self.index() + 1)
    }
}
