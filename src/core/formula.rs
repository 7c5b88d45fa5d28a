//! The forward stat formulas and their range inversions.
//!
//! Both forward formulas are monotone non-decreasing in the IV, so a single
//! observed value pins the IV to a contiguous interval: the smallest IV that
//! reaches the value, through one less than the smallest IV that reaches the
//! next value up. The inversions below compute those boundary IVs with exact
//! integer ceiling division (the inverse of the floor divisions in the
//! forward direction) and may return values outside 0..=31; callers clamp.

/// Ceiling division for a positive divisor.
pub(crate) fn ceil_div(a: i32, b: i32) -> i32 {
    debug_assert!(b > 0);
    let quotient = a / b;
    if a % b > 0 {
        quotient + 1
    } else {
        quotient
    }
}

pub fn hp_stat(base: i32, iv: i32, ev: i32, level: i32) -> i32 {
    (2 * base + iv + ev / 4) * level / 100 + level + 10
}

pub fn other_stat(base: i32, iv: i32, ev: i32, level: i32, nature_modifier: i32) -> i32 {
    let raw = (2 * base + iv + ev / 4) * level / 100 + 5;
    match nature_modifier {
        1 => raw * 110 / 100,
        -1 => raw * 90 / 100,
        _ => raw,
    }
}

/// Smallest IV for which `hp_stat` reaches `stat` at this level.
pub fn min_hp_iv(base: i32, ev: i32, level: i32, stat: i32) -> i32 {
    ceil_div((stat - level - 10) * 100, level) - 2 * base - ev / 4
}

/// Smallest IV for which `other_stat` reaches `stat` at this level.
pub fn min_other_iv(base: i32, ev: i32, level: i32, stat: i32, nature_modifier: i32) -> i32 {
    // Undo the nature scaling first: the smallest raw stat whose scaled
    // value reaches the observation.
    let raw = match nature_modifier {
        1 => ceil_div(stat * 10, 11),
        -1 => ceil_div(stat * 10, 9),
        _ => stat,
    };
    ceil_div((raw - 5) * 100, level) - 2 * base - ev / 4
}
