use chrono::{NaiveDateTime, Timelike};
use derive_more::{Debug, Display};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{_0:02}")]
pub struct Hour(u8);

impl Hour {
    pub const COUNT: usize = 24;

    pub fn all() -> impl Iterator<Item = Hour> {
        (0..Self::COUNT as u8).map(Self)
    }
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<NaiveDateTime> for Hour {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.hour() as u8)
    }
}

/// Share of a whole, always within `0..=100`.
#[derive(Debug, Display, Clone, Copy, PartialEq, PartialOrd)]
#[display("{_0:.1}%")]
pub struct Percentage(f64);

impl Percentage {
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self(0.0);
        }
        Self((part as f64 / whole as f64) * 100.0)
    }
    pub fn value(self) -> f64 {
        self.0
    }
}
