use crate::data::stats::{Observation, Stat, Stats};

/// How stat rows after the first are read: as absolute stat values, or as
/// deltas against the previous row's resolved stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryMode {
    Exact,
    Diff,
}

/// Parses whitespace-separated stat rows into observations.
///
/// One row per level, levels running consecutively from `initial_level`.
/// Each row holds the six stats, followed by the six EVs when `with_evs` is
/// set. A blank row after the first skips that level (level still advances).
/// The first row is always absolute, whatever the entry mode.
pub fn parse_observations(
    input: &str,
    initial_level: i32,
    mode: EntryMode,
    with_evs: bool,
) -> Result<Vec<Observation>, String> {
    let expected = if with_evs { 12 } else { 6 };
    let mut observations: Vec<Observation> = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() && index != 0 {
            continue;
        }
        if tokens.len() != expected {
            return Err(format!(
                "Row {}: expected {} values, found {}",
                index + 1,
                expected,
                tokens.len()
            ));
        }
        let mut values = Vec::with_capacity(expected);
        for token in &tokens {
            let value: i32 = token
                .parse()
                .map_err(|_| format!("Row {}: '{}' is not a number", index + 1, token))?;
            values.push(value);
        }

        let mut stats = Stats::default();
        for (offset, stat) in Stat::ALL.into_iter().enumerate() {
            let raw = values[offset];
            let resolved = match (mode, observations.last()) {
                (EntryMode::Diff, Some(previous)) => previous.stats.get(stat) + raw,
                _ => raw,
            };
            stats.set(stat, resolved);
        }
        let mut evs = Stats::default();
        if with_evs {
            for (offset, stat) in Stat::ALL.into_iter().enumerate() {
                evs.set(stat, values[6 + offset]);
            }
        }
        observations.push(Observation {
            level: initial_level + index as i32,
            stats,
            evs,
        });
    }

    if observations.is_empty() {
        return Err("No stat rows given".to_string());
    }
    Ok(observations)
}
