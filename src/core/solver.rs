use crate::core::formula::{hp_stat, min_hp_iv, min_other_iv, other_stat};
use crate::data::characteristics::Characteristic;
use crate::data::hidden_power::{type_from_parities, HiddenPower, PARITY_BIT_ORDER};
use crate::data::natures::Nature;
use crate::data::stats::{Observation, Stat, Stats};
use serde::{Deserialize, Serialize};

pub const MIN_IV: i32 = 0;
pub const MAX_IV: i32 = 31;

/// Candidate IVs per stat, ascending and duplicate-free. An empty vector
/// means every IV was ruled out for that stat ("Invalid").
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IvRanges {
    pub hp: Vec<i32>,
    pub attack: Vec<i32>,
    pub defense: Vec<i32>,
    pub special_attack: Vec<i32>,
    pub special_defense: Vec<i32>,
    pub speed: Vec<i32>,
}

impl IvRanges {
    pub fn get(&self, stat: Stat) -> &[i32] {
        match stat {
            Stat::Hp => &self.hp,
            Stat::Attack => &self.attack,
            Stat::Defense => &self.defense,
            Stat::SpecialAttack => &self.special_attack,
            Stat::SpecialDefense => &self.special_defense,
            Stat::Speed => &self.speed,
        }
    }

    fn get_mut(&mut self, stat: Stat) -> &mut Vec<i32> {
        match stat {
            Stat::Hp => &mut self.hp,
            Stat::Attack => &mut self.attack,
            Stat::Defense => &mut self.defense,
            Stat::SpecialAttack => &mut self.special_attack,
            Stat::SpecialDefense => &mut self.special_defense,
            Stat::Speed => &mut self.speed,
        }
    }
}

/// Optional hints narrowing the solve beyond the stat observations.
///
/// `fixed_hp` marks a creature whose HP stat is a constant (Shedinja's 1):
/// observed HP then says nothing about the HP IV, which is reported as the
/// full range.
#[derive(Clone, Debug, Default)]
pub struct CalcOptions {
    pub characteristic: Option<Characteristic>,
    pub hidden_power: Option<HiddenPower>,
    pub fixed_hp: bool,
}

/// Narrows the candidate IV set for each stat to the values consistent with
/// every observation and hint.
///
/// Observations only ever shrink a stat's set. An observed value that no IV
/// can produce empties that stat's set for good; the other stats keep
/// narrowing normally.
pub fn calc_iv_ranges(
    base: &Stats,
    observations: &[Observation],
    nature: Nature,
    options: &CalcOptions,
) -> IvRanges {
    // Interval state per stat, in Stat::ALL order. None = contradicted.
    let mut bounds: [Option<(i32, i32)>; 6] = [Some((MIN_IV, MAX_IV)); 6];

    for observation in observations {
        for (index, stat) in Stat::ALL.into_iter().enumerate() {
            let Some((min_iv, max_iv)) = bounds[index] else {
                continue;
            };
            if stat == Stat::Hp && options.fixed_hp {
                continue;
            }
            let base_stat = base.get(stat);
            let ev = observation.evs.get(stat);
            let observed = observation.stats.get(stat);
            let level = observation.level;
            let nature_modifier = nature.modifier(stat);

            let (reachable_low, reachable_high) = if stat == Stat::Hp {
                (
                    hp_stat(base_stat, MIN_IV, ev, level),
                    hp_stat(base_stat, MAX_IV, ev, level),
                )
            } else {
                (
                    other_stat(base_stat, MIN_IV, ev, level, nature_modifier),
                    other_stat(base_stat, MAX_IV, ev, level, nature_modifier),
                )
            };
            if observed < reachable_low || observed > reachable_high {
                bounds[index] = None;
                continue;
            }

            // Exact IV interval for this one observation: smallest IV
            // reaching the observed value through the last IV before the
            // value steps up.
            let (low, high) = if stat == Stat::Hp {
                (
                    min_hp_iv(base_stat, ev, level, observed),
                    min_hp_iv(base_stat, ev, level, observed + 1) - 1,
                )
            } else {
                (
                    min_other_iv(base_stat, ev, level, observed, nature_modifier),
                    min_other_iv(base_stat, ev, level, observed + 1, nature_modifier) - 1,
                )
            };
            let low = low.clamp(MIN_IV, MAX_IV);
            let high = high.clamp(MIN_IV, MAX_IV);
            bounds[index] = Some((min_iv.max(low), max_iv.min(high)));
        }
    }

    let mut ranges = IvRanges::default();
    for (index, stat) in Stat::ALL.into_iter().enumerate() {
        if stat == Stat::Hp && options.fixed_hp {
            ranges.hp.extend(MIN_IV..=MAX_IV);
            continue;
        }
        if let Some((min_iv, max_iv)) = bounds[index] {
            ranges.get_mut(stat).extend(min_iv..=max_iv);
        }
    }

    if let Some(hidden_power) = options.hidden_power {
        narrow_by_hidden_power(&mut ranges, hidden_power);
    }
    if let Some(characteristic) = options.characteristic {
        narrow_by_characteristic(&mut ranges, characteristic);
    }
    ranges
}

/// Keeps only the IVs whose parity appears in some 6-bit combination that
/// produces the target hidden-power type.
///
/// All 64 combinations are enumerated; this is the unambiguous definition of
/// the type partition and cheap enough not to bother with the closed-form
/// index bounds.
fn narrow_by_hidden_power(ranges: &mut IvRanges, hidden_power: HiddenPower) {
    let target = hidden_power.type_index();
    let mut allowed = [[false; 2]; 6];
    for parity_bits in 0u32..64 {
        if type_from_parities(parity_bits) != target {
            continue;
        }
        for bit in 0..6 {
            allowed[bit][((parity_bits >> bit) & 1) as usize] = true;
        }
    }
    for (bit, stat) in PARITY_BIT_ORDER.into_iter().enumerate() {
        ranges
            .get_mut(stat)
            .retain(|iv| allowed[bit][(iv & 1) as usize]);
    }
}

/// A characteristic names the stat holding the creature's highest IV and
/// that IV's residue mod 5. Two consequences: no stat's IV can exceed the
/// highest possible residue-consistent value, and the named stat's IV must
/// carry the residue.
fn narrow_by_characteristic(ranges: &mut IvRanges, characteristic: Characteristic) {
    let highest_stat = characteristic.highest_stat();
    let modulo = characteristic.iv_modulo();

    // Ceiling for the highest IV: the largest value any stat can still
    // reach, rounded down to the residue.
    let Some(mut highest_iv) = Stat::ALL
        .into_iter()
        .filter_map(|stat| ranges.get(stat).last().copied())
        .max()
    else {
        return;
    };
    if highest_iv % 5 > modulo {
        highest_iv -= highest_iv % 5 - modulo;
    }
    if highest_iv % 5 < modulo {
        highest_iv -= highest_iv % 5 + (5 - modulo);
    }

    for stat in Stat::ALL {
        let range = ranges.get_mut(stat);
        range.retain(|iv| {
            *iv <= highest_iv && (stat != highest_stat || iv % 5 == modulo)
        });
    }
}
