pub mod formula;
pub mod next_level;
pub mod solver;

pub use formula::{hp_stat, min_hp_iv, min_other_iv, other_stat};
pub use next_level::next_stat_level;
pub use solver::{calc_iv_ranges, CalcOptions, IvRanges, MAX_IV, MIN_IV};
