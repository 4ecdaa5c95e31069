use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Hemisphere {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl Hemisphere {
    pub fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }
}

impl Display for Hemisphere {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An angle in degrees, minutes and seconds, e.g. `33° 52' 7.68" S`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Dms {
    degrees: u32,
    minutes: u32,
    seconds: f64,
    hemisphere: Hemisphere,
}

impl Dms {
    pub fn new(degrees: u32, minutes: u32, seconds: f64, hemisphere: Hemisphere) -> Self {
        Dms {
            degrees,
            minutes,
            seconds,
            hemisphere,
        }
    }

    pub fn degrees(&self) -> u32 {
        self.degrees
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Seconds, rounded to two decimals.
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}° {}' {:.2}\" {}", self.degrees, self.minutes, self.seconds, self.hemisphere)
    }
}
