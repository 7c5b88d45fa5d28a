use crate::core::formula::{hp_stat, other_stat};
use crate::core::solver::MAX_IV;
use crate::data::natures::Nature;
use crate::data::stats::Stat;

/// Search no further than the level cap; stats stop growing there anyway.
const LEVEL_CAP: i32 = 100;

/// First level at or above `level` where the surviving candidate IVs stop
/// producing one identical stat value, i.e. where taking a fresh reading
/// would narrow the set further. EVs are assumed unchanged.
///
/// `None` when there are no candidates left, or when no level up to the cap
/// separates them. A single candidate (or a fixed-HP creature's HP) needs no
/// further readings, so the query level comes back unchanged.
pub fn next_stat_level(
    stat: Stat,
    base_stat: i32,
    candidates: &[i32],
    ev: i32,
    level: i32,
    nature: Nature,
    fixed_hp: bool,
) -> Option<i32> {
    let (first, rest) = candidates.split_first()?;
    if stat == Stat::Hp && fixed_hp {
        return Some(level);
    }
    if rest.is_empty() {
        return Some(level);
    }
    debug_assert!(candidates.iter().all(|iv| (0..=MAX_IV).contains(iv)));

    let nature_modifier = nature.modifier(stat);
    let stat_at = |iv: i32, trial_level: i32| {
        if stat == Stat::Hp {
            hp_stat(base_stat, iv, ev, trial_level)
        } else {
            other_stat(base_stat, iv, ev, trial_level, nature_modifier)
        }
    };

    for trial_level in level..=LEVEL_CAP {
        let reference = stat_at(*first, trial_level);
        if rest.iter().any(|iv| stat_at(*iv, trial_level) != reference) {
            return Some(trial_level);
        }
    }
    None
}
