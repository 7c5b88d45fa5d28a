use ivcalc::{
    calc_iv_ranges, hp_stat, other_stat, CalcOptions, Nature, Observation, Stat, Stats,
};

fn base_stats() -> Stats {
    // Bulbasaur
    Stats {
        hp: 45,
        attack: 49,
        defense: 49,
        special_attack: 65,
        special_defense: 65,
        speed: 45,
    }
}

fn forward(base: &Stats, ivs: &Stats, evs: &Stats, level: i32, nature: Nature) -> Stats {
    let mut out = Stats::default();
    for stat in Stat::ALL {
        let value = if stat == Stat::Hp {
            hp_stat(base.get(stat), ivs.get(stat), evs.get(stat), level)
        } else {
            other_stat(
                base.get(stat),
                ivs.get(stat),
                evs.get(stat),
                level,
                nature.modifier(stat),
            )
        };
        out.set(stat, value);
    }
    out
}

fn observe(base: &Stats, ivs: &Stats, evs: &Stats, level: i32, nature: Nature) -> Observation {
    Observation {
        level,
        stats: forward(base, ivs, evs, level, nature),
        evs: *evs,
    }
}

fn uniform(value: i32) -> Stats {
    Stats {
        hp: value,
        attack: value,
        defense: value,
        special_attack: value,
        special_defense: value,
        speed: value,
    }
}

#[test]
fn hp_inversion_matches_hand_computed_range() {
    // base HP 100, level 50, EV 0, observed HP 163 pins the HP IV to [6, 7]:
    // iv 6 gives floor(206 * 50 / 100) + 60 = 163, iv 8 already gives 164.
    let base = Stats {
        hp: 100,
        ..base_stats()
    };
    let ivs = uniform(6);
    let observation = observe(&base, &ivs, &uniform(0), 50, Nature::Serious);
    assert_eq!(observation.stats.hp, 163);

    let ranges = calc_iv_ranges(
        &base,
        &[observation],
        Nature::Serious,
        &CalcOptions::default(),
    );
    assert_eq!(ranges.hp, vec![6, 7]);
    assert_eq!(hp_stat(100, 8, 0, 50), 164);
}

#[test]
fn round_trip_contains_the_true_iv() {
    let base = base_stats();
    for nature in [Nature::Serious, Nature::Adamant, Nature::Modest] {
        for iv in [0, 7, 17, 30, 31] {
            for (level, ev) in [(23, 0), (50, 252), (78, 100)] {
                let ivs = uniform(iv);
                let evs = uniform(ev);
                let observation = observe(&base, &ivs, &evs, level, nature);
                let ranges =
                    calc_iv_ranges(&base, &[observation], nature, &CalcOptions::default());
                for stat in Stat::ALL {
                    assert!(
                        ranges.get(stat).contains(&iv),
                        "{} lost iv {} at level {} (nature {})",
                        stat,
                        iv,
                        level,
                        nature
                    );
                }
            }
        }
    }
}

#[test]
fn more_observations_never_regrow_a_range() {
    let base = base_stats();
    let nature = Nature::Adamant;
    let ivs = Stats {
        hp: 21,
        attack: 9,
        defense: 30,
        special_attack: 0,
        special_defense: 14,
        speed: 27,
    };
    let observations: Vec<Observation> = (20..=30)
        .map(|level| observe(&base, &ivs, &uniform(0), level, nature))
        .collect();

    let mut previous = calc_iv_ranges(&base, &observations[..1], nature, &CalcOptions::default());
    for count in 2..=observations.len() {
        let current =
            calc_iv_ranges(&base, &observations[..count], nature, &CalcOptions::default());
        for stat in Stat::ALL {
            assert!(
                current
                    .get(stat)
                    .iter()
                    .all(|iv| previous.get(stat).contains(iv)),
                "{} grew after observation {}",
                stat,
                count
            );
            assert!(current.get(stat).contains(&ivs.get(stat)));
        }
        previous = current;
    }
}

#[test]
fn candidate_sets_are_sorted_unique_and_in_bounds() {
    let base = base_stats();
    let observation = observe(&base, &uniform(15), &uniform(4), 42, Nature::Timid);
    let ranges = calc_iv_ranges(&base, &[observation], Nature::Timid, &CalcOptions::default());
    for stat in Stat::ALL {
        let candidates = ranges.get(stat);
        assert!(candidates.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(candidates.iter().all(|iv| (0..=31).contains(iv)));
    }
}

#[test]
fn unreachable_value_empties_only_that_stat() {
    let base = base_stats();
    let mut observation = observe(&base, &uniform(10), &uniform(0), 50, Nature::Serious);
    // One more than any HP IV can reach at this level.
    observation.stats.hp = hp_stat(base.hp, 31, 0, 50) + 1;

    let ranges = calc_iv_ranges(
        &base,
        &[observation],
        Nature::Serious,
        &CalcOptions::default(),
    );
    assert!(ranges.hp.is_empty());
    for stat in Stat::ALL {
        if stat != Stat::Hp {
            assert!(ranges.get(stat).contains(&10), "{} should survive", stat);
        }
    }
}

#[test]
fn contradiction_is_absorbing_across_later_observations() {
    let base = base_stats();
    let ivs = uniform(10);
    let mut first = observe(&base, &ivs, &uniform(0), 40, Nature::Serious);
    first.stats.attack = other_stat(base.attack, 0, 0, 40, 0) - 1;
    let second = observe(&base, &ivs, &uniform(0), 41, Nature::Serious);

    let ranges = calc_iv_ranges(
        &base,
        &[first, second],
        Nature::Serious,
        &CalcOptions::default(),
    );
    assert!(ranges.attack.is_empty());
    assert!(ranges.hp.contains(&10));
}

#[test]
fn consecutive_levels_narrow_further_than_one_reading() {
    let base = base_stats();
    let nature = Nature::Serious;
    let ivs = uniform(19);
    let one: Vec<Observation> = vec![observe(&base, &ivs, &uniform(0), 50, nature)];
    let many: Vec<Observation> = (50..=55)
        .map(|level| observe(&base, &ivs, &uniform(0), level, nature))
        .collect();

    let wide = calc_iv_ranges(&base, &one, nature, &CalcOptions::default());
    let tight = calc_iv_ranges(&base, &many, nature, &CalcOptions::default());
    for stat in Stat::ALL {
        assert!(tight.get(stat).len() <= wide.get(stat).len());
        assert!(tight.get(stat).contains(&19));
    }
}

#[test]
fn evs_shift_the_inverted_range() {
    let base = base_stats();
    let ivs = uniform(12);
    let evs = uniform(252);
    let observation = observe(&base, &ivs, &evs, 60, Nature::Serious);
    let ranges = calc_iv_ranges(
        &base,
        &[observation],
        Nature::Serious,
        &CalcOptions::default(),
    );
    for stat in Stat::ALL {
        assert!(ranges.get(stat).contains(&12));
    }
}

#[test]
fn fixed_hp_species_reports_full_hp_range() {
    let base = Stats {
        hp: 1,
        attack: 90,
        defense: 45,
        special_attack: 30,
        special_defense: 30,
        speed: 40,
    };
    let options = CalcOptions {
        fixed_hp: true,
        ..CalcOptions::default()
    };
    let mut observation = observe(&base, &uniform(20), &uniform(0), 50, Nature::Serious);
    // The in-game HP of such a species is always 1; any reading must not
    // narrow the HP IV.
    observation.stats.hp = 1;

    let ranges = calc_iv_ranges(&base, &[observation], Nature::Serious, &options);
    assert_eq!(ranges.hp, (0..=31).collect::<Vec<i32>>());
    assert!(ranges.attack.contains(&20));
}
