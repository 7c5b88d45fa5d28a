use ivcalc::{calc_iv_ranges, hp_stat, CalcOptions, Generation, Nature, Observation, PokedexDatabase, Stats};

#[test]
fn loads_the_bundled_pokedex() {
    let pokedex = PokedexDatabase::load_default().expect("load pokedex");
    assert!(!pokedex.entries().is_empty());

    let bulbasaur = pokedex.get("Bulbasaur", "").expect("Bulbasaur exists");
    assert_eq!(bulbasaur.number, 1);
    assert_eq!(bulbasaur.special_attack, 65);
    assert!(!bulbasaur.has_fixed_hp());

    let shedinja = pokedex.get("Shedinja", "").expect("Shedinja exists");
    assert!(shedinja.has_fixed_hp());
    assert_eq!(shedinja.hp, 1);
}

#[test]
fn generations_filter_by_national_dex_size() {
    let pokedex = PokedexDatabase::load_default().expect("load pokedex");
    let gen3 = pokedex.for_generation(Generation::G3);
    assert!(gen3.iter().all(|entry| entry.number <= 386));
    assert!(gen3.iter().any(|entry| entry.name == "Deoxys"));
    assert!(!gen3.iter().any(|entry| entry.name == "Garchomp"));

    let gen9 = pokedex.for_generation(Generation::G9);
    assert!(gen9.iter().any(|entry| entry.name == "Miraidon"));
}

#[test]
fn forms_are_listed_per_species_and_names_deduplicated() {
    let pokedex = PokedexDatabase::load_default().expect("load pokedex");
    let forms = pokedex.forms_of("Deoxys");
    assert_eq!(forms, vec!["Normal", "Attack", "Defense", "Speed"]);

    let names = pokedex.species_names(Generation::G3);
    assert_eq!(
        names.iter().filter(|name| **name == "Deoxys").count(),
        1
    );

    let defense_forme = pokedex.get("Deoxys", "Defense").expect("forme exists");
    assert_eq!(defense_forme.defense, 160);
}

#[test]
fn parses_the_original_csv_headers() {
    let csv = "\
Number,Name,Form,HP,Attack,Defense,Sp.Attack,Sp.Defense,Speed
25,Pikachu,,35,55,40,50,50,90
";
    let pokedex = PokedexDatabase::load_from_csv_str(csv).expect("parse csv");
    let pikachu = pokedex.get("Pikachu", "").expect("Pikachu exists");
    assert_eq!(pikachu.base_stats().speed, 90);
    assert_eq!(pikachu.base_stats().hp, 35);
}

#[test]
fn hint_availability_follows_the_generation() {
    assert!(!Generation::G3.has_characteristics());
    assert!(Generation::G4.has_characteristics());
    assert!(Generation::G7.has_hidden_power());
    assert!(!Generation::G8.has_hidden_power());
    assert!(!Generation::G9.has_hidden_power());
}

#[test]
fn end_to_end_solve_from_a_pokedex_entry() {
    let pokedex = PokedexDatabase::load_default().expect("load pokedex");
    let entry = pokedex.get("Garchomp", "").expect("Garchomp exists");
    let base = entry.base_stats();

    // A level-78 Garchomp with known IVs, flat EVs.
    let observation = Observation {
        level: 78,
        stats: Stats {
            hp: hp_stat(base.hp, 24, 0, 78),
            attack: 239,
            defense: 160,
            special_attack: 136,
            special_defense: 142,
            speed: 169,
        },
        evs: Stats::default(),
    };
    let options = CalcOptions {
        fixed_hp: entry.has_fixed_hp(),
        ..CalcOptions::default()
    };
    let ranges = calc_iv_ranges(&base, &[observation], Nature::Adamant, &options);
    assert!(ranges.hp.contains(&24));
    for candidates in [&ranges.attack, &ranges.defense, &ranges.speed] {
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|iv| (0..=31).contains(iv)));
    }
}
