use crate::data::stats::Stat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 16 hidden-power types in type-index order (Fighting = 0 .. Dark = 15).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HiddenPower {
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
}

/// Bit order of the IV parities inside the hidden-power formula. Speed comes
/// before the special stats; this is not the display order of the stats.
pub const PARITY_BIT_ORDER: [Stat; 6] = [
    Stat::Hp,
    Stat::Attack,
    Stat::Defense,
    Stat::Speed,
    Stat::SpecialAttack,
    Stat::SpecialDefense,
];

/// Maps a 6-bit parity combination (bits in `PARITY_BIT_ORDER`) to its
/// hidden-power type index.
pub fn type_from_parities(parity_bits: u32) -> i32 {
    debug_assert!(parity_bits < 64);
    (parity_bits as i32 * 15) / 63
}

impl HiddenPower {
    pub const ALL: [HiddenPower; 16] = [
        HiddenPower::Fighting,
        HiddenPower::Flying,
        HiddenPower::Poison,
        HiddenPower::Ground,
        HiddenPower::Rock,
        HiddenPower::Bug,
        HiddenPower::Ghost,
        HiddenPower::Steel,
        HiddenPower::Fire,
        HiddenPower::Water,
        HiddenPower::Grass,
        HiddenPower::Electric,
        HiddenPower::Psychic,
        HiddenPower::Ice,
        HiddenPower::Dragon,
        HiddenPower::Dark,
    ];

    pub fn type_index(self) -> i32 {
        match self {
            HiddenPower::Fighting => 0,
            HiddenPower::Flying => 1,
            HiddenPower::Poison => 2,
            HiddenPower::Ground => 3,
            HiddenPower::Rock => 4,
            HiddenPower::Bug => 5,
            HiddenPower::Ghost => 6,
            HiddenPower::Steel => 7,
            HiddenPower::Fire => 8,
            HiddenPower::Water => 9,
            HiddenPower::Grass => 10,
            HiddenPower::Electric => 11,
            HiddenPower::Psychic => 12,
            HiddenPower::Ice => 13,
            HiddenPower::Dragon => 14,
            HiddenPower::Dark => 15,
        }
    }
}

impl fmt::Display for HiddenPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
