//! Card types and value assignment.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the display color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Diamonds | Self::Hearts => Color::Red,
            Self::Clubs | Self::Spades => Color::Black,
        }
    }

    /// Returns a one-letter symbol for the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }
}

/// Card color. Display only, never used when comparing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
}

/// Card rank, Ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Converts a raw rank number (1 = Ace, 13 = King).
    #[must_use]
    pub const fn from_u8(rank: u8) -> Option<Self> {
        if rank >= 1 && rank <= 13 {
            Some(Self::ALL[rank as usize - 1])
        } else {
            None
        }
    }

    /// Returns the comparison value of the rank (Ace = 1, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the short display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

/// Maps a raw rank number to its War value.
///
/// Ranks outside `1..=13` map to `0`.
#[must_use]
pub const fn rank_value(rank: u8) -> u8 {
    match Rank::from_u8(rank) {
        Some(rank) => rank.value(),
        None => 0,
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    value: u8,
}

impl Card {
    /// Creates a new card with its value derived from the rank.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted and get a value of 0.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            value: rank_value(rank),
        }
    }

    /// Overrides the comparison value.
    ///
    /// The override only lasts until the next [`Card::assign_value`], which
    /// every session setup runs over the whole deck.
    #[must_use]
    pub const fn with_value(mut self, value: u8) -> Self {
        self.value = value;
        self
    }

    /// Returns the comparison value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Recomputes the value from the rank.
    pub const fn assign_value(&mut self) {
        self.value = rank_value(self.rank);
    }

    /// Returns the typed rank, or `None` for a non-standard rank.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        Rank::from_u8(self.rank)
    }

    /// Returns the display color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            Some(rank) => write!(f, "{}{}", rank.symbol(), self.suit.symbol()),
            None => write!(f, "?{}", self.suit.symbol()),
        }
    }
}

/// Assigns the War value to every card in `cards`. Idempotent.
pub fn assign_values(cards: &mut [Card]) {
    for card in cards {
        card.assign_value();
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Builds the canonical 52-card deck, one card per suit and rank.
#[must_use]
pub fn standard_deck() -> alloc::vec::Vec<Card> {
    let mut cards = alloc::vec::Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank.value()));
        }
    }
    cards
}
