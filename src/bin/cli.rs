use inquire::{Confirm, CustomType, Select};
use ivcalc::{
    calc_iv_ranges, next_stat_level, parse_observations, CalcOptions, Characteristic, EntryMode,
    Generation, HiddenPower, IvRanges, Nature, Observation, PokedexDatabase, Stat,
};
use serde_json::json;
use std::io::{self, BufRead};

fn main() {
    println!("IVcalc — narrow down a creature's hidden IVs from its stats");
    println!();

    let pokedex = PokedexDatabase::load_default().expect("failed to load the pokedex table");

    let generation = Select::new("Generation:", Generation::ALL.to_vec())
        .prompt()
        .expect("generation");

    let species_names: Vec<String> = pokedex
        .species_names(generation)
        .into_iter()
        .map(str::to_string)
        .collect();
    let species = Select::new("Species:", species_names)
        .prompt()
        .expect("species");

    let forms: Vec<String> = pokedex
        .forms_of(&species)
        .into_iter()
        .map(str::to_string)
        .collect();
    let form = if forms.len() > 1 {
        Select::new("Form:", forms).prompt().expect("form")
    } else {
        forms.into_iter().next().unwrap_or_default()
    };
    let entry = pokedex
        .get(&species, &form)
        .expect("selected species exists")
        .clone();

    let nature = Select::new("Nature:", Nature::ALL.to_vec())
        .prompt()
        .expect("nature");

    // Characteristics don't exist in gen 3; Hidden Power is gone from gen 8 on.
    let characteristic = if generation.has_characteristics() {
        prompt_optional("Characteristic:", &Characteristic::ALL)
    } else {
        None
    };
    let hidden_power = if generation.has_hidden_power() {
        prompt_optional("Hidden Power type:", &HiddenPower::ALL)
    } else {
        None
    };

    let initial_level: i32 = CustomType::new("Level of the first stat row:")
        .with_help_message("grows by one per row")
        .prompt()
        .expect("level");
    let with_evs = Confirm::new("Track EVs? (adds six EV columns per row)")
        .with_default(false)
        .prompt()
        .expect("evs");
    let mode = match Select::new(
        "Stat entry mode:",
        vec!["Exact stats", "Differences from the previous level"],
    )
    .prompt()
    .expect("mode")
    {
        "Exact stats" => EntryMode::Exact,
        _ => EntryMode::Diff,
    };

    println!();
    println!(
        "Enter one row per level: six stats{}, space separated.",
        if with_evs { " then six EVs" } else { "" }
    );
    println!("A blank row skips a level. Finish with 'done' or end of input.");
    let mut rows = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.expect("read stat row");
        if line.trim() == "done" {
            break;
        }
        rows.push(line);
    }

    let observations = match parse_observations(&rows.join("\n"), initial_level, mode, with_evs) {
        Ok(observations) => observations,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    let options = CalcOptions {
        characteristic,
        hidden_power,
        fixed_hp: entry.has_fixed_hp(),
    };
    let base = entry.base_stats();
    let ivs = calc_iv_ranges(&base, &observations, nature, &options);

    let last = observations.last().expect("at least one observation");
    println!();
    println!("Possible IVs for {}:", entry.name);
    for stat in Stat::ALL {
        let next = next_stat_level(
            stat,
            base.get(stat),
            ivs.get(stat),
            last.evs.get(stat),
            last.level,
            nature,
            options.fixed_hp,
        );
        let next_note = match next {
            Some(level) if level > last.level => format!("  (stats diverge at level {})", level),
            Some(_) => String::new(),
            None => "  (no level will narrow this further)".to_string(),
        };
        println!(
            "  {:<10} {}{}",
            format!("{}:", stat),
            format_range(ivs.get(stat)),
            next_note
        );
    }

    if Confirm::new("Print the result as JSON?")
        .with_default(false)
        .prompt()
        .unwrap_or(false)
    {
        print_json(&ivs, &observations, nature, &options, &base);
    }
}

fn prompt_optional<T: Copy + std::fmt::Display>(message: &str, choices: &[T]) -> Option<T> {
    let mut options: Vec<String> = vec!["(none)".to_string()];
    options.extend(choices.iter().map(|choice| choice.to_string()));
    let picked = Select::new(message, options).prompt().expect("selection");
    choices
        .iter()
        .find(|choice| choice.to_string() == picked)
        .copied()
}

/// "Invalid" for an empty set, "lo-hi" for a contiguous run, a comma list
/// otherwise.
fn format_range(ivs: &[i32]) -> String {
    match ivs {
        [] => "Invalid".to_string(),
        [only] => only.to_string(),
        [first, .., last] if last - first + 1 == ivs.len() as i32 => {
            format!("{}-{}", first, last)
        }
        _ => ivs
            .iter()
            .map(|iv| iv.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn print_json(
    ivs: &IvRanges,
    observations: &[Observation],
    nature: Nature,
    options: &CalcOptions,
    base: &ivcalc::Stats,
) {
    let last = observations.last().expect("at least one observation");
    let next_levels: serde_json::Map<String, serde_json::Value> = Stat::ALL
        .into_iter()
        .map(|stat| {
            let next = next_stat_level(
                stat,
                base.get(stat),
                ivs.get(stat),
                last.evs.get(stat),
                last.level,
                nature,
                options.fixed_hp,
            );
            (stat.label().to_string(), json!(next))
        })
        .collect();
    let output = json!({ "ivs": ivs, "nextLevels": next_levels });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).expect("serialize result")
    );
}
