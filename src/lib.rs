pub mod core;
pub mod data;
pub mod input;

pub use self::core::{
    formula::{hp_stat, min_hp_iv, min_other_iv, other_stat},
    next_level::next_stat_level,
    solver::{calc_iv_ranges, CalcOptions, IvRanges, MAX_IV, MIN_IV},
};
pub use self::data::{
    characteristics::Characteristic,
    hidden_power::HiddenPower,
    natures::Nature,
    species::{Generation, MonEntry, PokedexDatabase},
    stats::{Observation, Stat, Stats},
};
pub use input::{parse_observations, EntryMode};

#[cfg(target_arch = "wasm32")]
pub mod wasm;
