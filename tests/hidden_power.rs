use ivcalc::data::hidden_power::{type_from_parities, PARITY_BIT_ORDER};
use ivcalc::{calc_iv_ranges, CalcOptions, HiddenPower, Nature, Stat};

#[test]
fn the_64_parity_combinations_partition_into_16_types() {
    let mut bucket_sizes = [0usize; 16];
    for parity_bits in 0u32..64 {
        let type_index = type_from_parities(parity_bits);
        assert!((0..16).contains(&type_index));
        bucket_sizes[type_index as usize] += 1;
    }
    assert_eq!(bucket_sizes.iter().sum::<usize>(), 64);
    assert!(bucket_sizes.iter().all(|size| *size > 0));
}

#[test]
fn type_indices_follow_the_declared_order() {
    for (index, hidden_power) in HiddenPower::ALL.into_iter().enumerate() {
        assert_eq!(hidden_power.type_index(), index as i32);
    }
    // Boundary values of the scaling formula.
    assert_eq!(type_from_parities(0), 0);
    assert_eq!(type_from_parities(63), 15);
}

#[test]
fn dark_requires_every_iv_to_be_odd() {
    // Only the all-ones parity combination maps to type 15.
    let options = CalcOptions {
        hidden_power: Some(HiddenPower::Dark),
        ..CalcOptions::default()
    };
    let ranges = calc_iv_ranges(
        &Default::default(),
        &[],
        Nature::Serious,
        &options,
    );
    for stat in Stat::ALL {
        let candidates = ranges.get(stat);
        assert_eq!(candidates.len(), 16);
        assert!(candidates.iter().all(|iv| iv % 2 == 1), "{}", stat);
    }
}

#[test]
fn fighting_forces_the_high_bits_even() {
    // Type 0 comes from parity combinations 0 through 4: the speed and
    // special bits are always zero there, the low three bits vary.
    let options = CalcOptions {
        hidden_power: Some(HiddenPower::Fighting),
        ..CalcOptions::default()
    };
    let ranges = calc_iv_ranges(&Default::default(), &[], Nature::Serious, &options);
    for stat in [Stat::Speed, Stat::SpecialAttack, Stat::SpecialDefense] {
        assert!(ranges.get(stat).iter().all(|iv| iv % 2 == 0), "{}", stat);
    }
    for stat in [Stat::Hp, Stat::Attack, Stat::Defense] {
        assert_eq!(ranges.get(stat).len(), 32, "{}", stat);
    }
}

#[test]
fn filter_agrees_with_direct_enumeration() {
    for hidden_power in HiddenPower::ALL {
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

        let options = CalcOptions {
            hidden_power: Some(hidden_power),
            ..CalcOptions::default()
        };
        let ranges = calc_iv_ranges(&Default::default(), &[], Nature::Serious, &options);
        for (bit, stat) in PARITY_BIT_ORDER.into_iter().enumerate() {
            let expected: Vec<i32> = (0..=31)
                .filter(|iv| allowed[bit][(iv % 2) as usize])
                .collect();
            assert_eq!(ranges.get(stat), expected.as_slice(), "{:?}", hidden_power);
        }
    }
}
