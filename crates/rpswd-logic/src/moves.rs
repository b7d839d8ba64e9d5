//! Move alphabet, sides, and the beats relation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A move in RPSWD
///
/// Variant order is the canonical iteration order used everywhere moves are
/// walked, including weighted sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    #[serde(rename = "R")]
    Rock,
    #[serde(rename = "P")]
    Paper,
    #[serde(rename = "S")]
    Scissors,
    #[serde(rename = "W")]
    Water,
    #[serde(rename = "D")]
    Dynamite,
}

impl Move {
    /// Every move, in canonical order
    pub const ALL: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Water,
        Move::Dynamite,
    ];

    /// The moves that are always legal
    pub const BASIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Position in canonical order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter wire symbol
    pub fn letter(self) -> char {
        match self {
            Move::Rock => 'R',
            Move::Paper => 'P',
            Move::Scissors => 'S',
            Move::Water => 'W',
            Move::Dynamite => 'D',
        }
    }

    /// Moves that defeat `self`
    pub fn counters(self) -> &'static [Move] {
        match self {
            Move::Rock => &[Move::Paper, Move::Dynamite],
            Move::Paper => &[Move::Scissors, Move::Dynamite],
            Move::Scissors => &[Move::Rock, Move::Dynamite],
            Move::Water => &[Move::Rock, Move::Paper, Move::Scissors],
            Move::Dynamite => &[Move::Water],
        }
    }

    pub fn beats(self, other: Move) -> bool {
        other.counters().contains(&self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Move {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(Move::Rock),
            "P" => Ok(Move::Paper),
            "S" => Ok(Move::Scissors),
            "W" => Ok(Move::Water),
            "D" => Ok(Move::Dynamite),
            other => Err(EngineError::UnknownMove(other.to_string())),
        }
    }
}

/// One of the two competing agents, tagged `p1` / `p2` in game state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "p1")]
    P1,
    #[serde(rename = "p2")]
    P2,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Side::P1 => "p1",
            Side::P2 => "p2",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Side {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p1" => Ok(Side::P1),
            "p2" => Ok(Side::P2),
            other => Err(EngineError::UnknownSide(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_map() {
        assert_eq!(Move::Rock.counters(), &[Move::Paper, Move::Dynamite]);
        assert_eq!(Move::Paper.counters(), &[Move::Scissors, Move::Dynamite]);
        assert_eq!(Move::Scissors.counters(), &[Move::Rock, Move::Dynamite]);
        assert_eq!(Move::Water.counters(), &[Move::Rock, Move::Paper, Move::Scissors]);
        assert_eq!(Move::Dynamite.counters(), &[Move::Water]);
    }

    #[test]
    fn test_beats_is_antisymmetric() {
        for a in Move::ALL {
            assert!(!a.beats(a), "{:?} should not beat itself", a);
            for b in Move::ALL {
                assert!(!(a.beats(b) && b.beats(a)), "{:?} and {:?} beat each other", a, b);
            }
        }
    }

    #[test]
    fn test_every_distinct_pair_is_decided() {
        for a in Move::ALL {
            for b in Move::ALL {
                if a != b {
                    assert!(a.beats(b) ^ b.beats(a), "{:?} vs {:?} undecided", a, b);
                }
            }
        }
    }

    #[test]
    fn test_canonical_order() {
        for (i, m) in Move::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
        assert!(Move::Rock < Move::Paper && Move::Water < Move::Dynamite);
    }

    #[test]
    fn test_letter_round_trip() {
        for m in Move::ALL {
            assert_eq!(m.to_string().parse::<Move>().unwrap(), m);
        }
        assert!(matches!("X".parse::<Move>(), Err(EngineError::UnknownMove(_))));
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!("p1".parse::<Side>().unwrap(), Side::P1);
        assert_eq!("p2".parse::<Side>().unwrap(), Side::P2);
        assert!(matches!("p3".parse::<Side>(), Err(EngineError::UnknownSide(_))));
        assert!(matches!("P1".parse::<Side>(), Err(EngineError::UnknownSide(_))));
        assert_eq!(Side::P1.opponent(), Side::P2);
        assert_eq!(Side::P2.opponent().opponent(), Side::P2);
    }

    #[test]
    fn test_serde_symbols() {
        assert_eq!(serde_json::to_string(&Move::Dynamite).unwrap(), "\"D\"");
        assert_eq!(serde_json::from_str::<Move>("\"W\"").unwrap(), Move::Water);
        assert_eq!(serde_json::to_string(&Side::P2).unwrap(), "\"p2\"");
    }
}
