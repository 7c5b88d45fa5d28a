use crate::data::stats::Stat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 25 natures. Each one boosts one non-HP stat by 10% and hinders
/// another by 10%, or does neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    pub fn boosted(self) -> Option<Stat> {
        match self {
            Nature::Lonely | Nature::Brave | Nature::Adamant | Nature::Naughty => {
                Some(Stat::Attack)
            }
            Nature::Bold | Nature::Relaxed | Nature::Impish | Nature::Lax => Some(Stat::Defense),
            Nature::Timid | Nature::Hasty | Nature::Jolly | Nature::Naive => Some(Stat::Speed),
            Nature::Modest | Nature::Mild | Nature::Quiet | Nature::Rash => {
                Some(Stat::SpecialAttack)
            }
            Nature::Calm | Nature::Gentle | Nature::Sassy | Nature::Careful => {
                Some(Stat::SpecialDefense)
            }
            _ => None,
        }
    }

    pub fn hindered(self) -> Option<Stat> {
        match self {
            Nature::Bold | Nature::Timid | Nature::Modest | Nature::Calm => Some(Stat::Attack),
            Nature::Lonely | Nature::Hasty | Nature::Mild | Nature::Gentle => Some(Stat::Defense),
            Nature::Brave | Nature::Relaxed | Nature::Quiet | Nature::Sassy => Some(Stat::Speed),
            Nature::Adamant | Nature::Impish | Nature::Jolly | Nature::Careful => {
                Some(Stat::SpecialAttack)
            }
            Nature::Naughty | Nature::Lax | Nature::Naive | Nature::Rash => {
                Some(Stat::SpecialDefense)
            }
            _ => None,
        }
    }

    /// Per-stat trinary modifier: +1 boosted, -1 hindered, 0 otherwise.
    /// HP is never modified by nature.
    pub fn modifier(self, stat: Stat) -> i32 {
        if stat == Stat::Hp {
            return 0;
        }
        if self.boosted() == Some(stat) {
            1
        } else if self.hindered() == Some(stat) {
            -1
        } else {
            0
        }
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
