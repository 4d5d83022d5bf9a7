//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Fixed timestep for the event loop (milliseconds)
pub const TICK_MS: u32 = 16;

/// Cumulative pointer movement (cells) a gesture must exceed before it
/// counts as a drag rather than a tap.
pub const DRAG_DEADZONE: u16 = 1;

/// Rows from the top/bottom of the scroll area where a drag starts
/// driving the scroll offset.
pub const EDGE_SCROLL_MARGIN: u16 = 3;

/// Scoring constants: every correct match is worth the base plus a time
/// bonus that decays one point per elapsed second down to the floor.
pub const BASE_MATCH_SCORE: u32 = 100;
pub const TIME_BONUS_START: u32 = 50;
pub const TIME_BONUS_FLOOR: u32 = 10;

/// How long the "try again" banner stays up after a rejected drop (ms).
pub const FLASH_MS: u32 = 1500;

/// Difficulty bucket controlling verse count and content pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl AgeTier {
    /// Parse a tier from its stored string form (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(AgeTier::Beginner),
            "intermediate" => Some(AgeTier::Intermediate),
            "advanced" => Some(AgeTier::Advanced),
            _ => None,
        }
    }

    /// Tier for a player's age. Ages 8 and up all map to Advanced.
    pub fn from_age(age: u8) -> Self {
        match age {
            0..=4 => AgeTier::Beginner,
            5..=7 => AgeTier::Intermediate,
            _ => AgeTier::Advanced,
        }
    }

    /// Number of verse/reference pairs dealt per round.
    pub fn verse_count(&self) -> usize {
        match self {
            AgeTier::Beginner => 3,
            AgeTier::Intermediate => 5,
            AgeTier::Advanced => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeTier::Beginner => "beginner",
            AgeTier::Intermediate => "intermediate",
            AgeTier::Advanced => "advanced",
        }
    }

    /// Human-readable label shown on the profile screen.
    pub fn label(&self) -> &'static str {
        match self {
            AgeTier::Beginner => "Beginner (Ages 2-4)",
            AgeTier::Intermediate => "Intermediate (Ages 5-7)",
            AgeTier::Advanced => "Advanced (Ages 8-12)",
        }
    }
}

/// Which side of the board a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Verse,
    Reference,
}

impl CardKind {
    /// The kind a dragged card can be dropped onto.
    pub fn opposite(&self) -> Self {
        match self {
            CardKind::Verse => CardKind::Reference,
            CardKind::Reference => CardKind::Verse,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Verse => "verse",
            CardKind::Reference => "reference",
        }
    }
}

/// Identity of a card within one round. Index is the deal position on the
/// card's own side; identity is never the reference string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId {
    pub kind: CardKind,
    pub index: u8,
}

impl CardId {
    pub fn verse(index: u8) -> Self {
        Self {
            kind: CardKind::Verse,
            index,
        }
    }

    pub fn reference(index: u8) -> Self {
        Self {
            kind: CardKind::Reference,
            index,
        }
    }
}

/// Screen position in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    pub fn bottom(&self) -> u16 {
        self.y + self.height
    }
}
