use crate::data::stats::Stats;
use serde::{Deserialize, Serialize};

/// National dex number of the one species whose HP is fixed at 1 (Shedinja).
const FIXED_HP_DEX_NUMBER: u32 = 292;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Generation {
    #[serde(rename = "3")]
    G3,
    #[serde(rename = "4")]
    G4,
    #[serde(rename = "5")]
    G5,
    #[serde(rename = "6")]
    G6,
    #[serde(rename = "7")]
    G7,
    #[serde(rename = "8")]
    G8,
    #[serde(rename = "9")]
    G9,
}

impl Generation {
    pub const ALL: [Generation; 7] = [
        Generation::G3,
        Generation::G4,
        Generation::G5,
        Generation::G6,
        Generation::G7,
        Generation::G8,
        Generation::G9,
    ];

    /// Size of the national dex as of this generation.
    pub fn dex_size(self) -> u32 {
        match self {
            Generation::G3 => 386,
            Generation::G4 => 493,
            Generation::G5 => 649,
            Generation::G6 => 721,
            Generation::G7 => 809,
            Generation::G8 => 905,
            Generation::G9 => 1025,
        }
    }

    /// Characteristics exist from gen 4 onward.
    pub fn has_characteristics(self) -> bool {
        !matches!(self, Generation::G3)
    }

    /// Hidden Power was removed from the games in gen 8.
    pub fn has_hidden_power(self) -> bool {
        !matches!(self, Generation::G8 | Generation::G9)
    }

    pub fn number(self) -> u32 {
        match self {
            Generation::G3 => 3,
            Generation::G4 => 4,
            Generation::G5 => 5,
            Generation::G6 => 6,
            Generation::G7 => 7,
            Generation::G8 => 8,
            Generation::G9 => 9,
        }
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One pokedex row: a species form with its base stats.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MonEntry {
    #[serde(rename = "Number")]
    pub number: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Form", default)]
    pub form: String,
    #[serde(rename = "HP")]
    pub hp: i32,
    #[serde(rename = "Attack")]
    pub attack: i32,
    #[serde(rename = "Defense")]
    pub defense: i32,
    #[serde(rename = "Sp.Attack")]
    pub special_attack: i32,
    #[serde(rename = "Sp.Defense")]
    pub special_defense: i32,
    #[serde(rename = "Speed")]
    pub speed: i32,
}

impl MonEntry {
    pub fn base_stats(&self) -> Stats {
        Stats {
            hp: self.hp,
            attack: self.attack,
            defense: self.defense,
            special_attack: self.special_attack,
            special_defense: self.special_defense,
            speed: self.speed,
        }
    }

    /// True for the species whose HP stat is 1 no matter its HP IV.
    pub fn has_fixed_hp(&self) -> bool {
        self.number == FIXED_HP_DEX_NUMBER
    }
}

#[derive(Clone, Debug, Default)]
pub struct PokedexDatabase {
    entries: Vec<MonEntry>,
}

impl PokedexDatabase {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[MonEntry] {
        &self.entries
    }

    pub fn load_from_csv_str(csv: &str) -> Result<Self, csv::Error> {
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let mut entries = Vec::new();
        for record in reader.deserialize() {
            let entry: MonEntry = record?;
            entries.push(entry);
        }
        Ok(Self { entries })
    }

    pub fn load_default() -> Result<Self, csv::Error> {
        const DEFAULT_POKEDEX_CSV: &str = include_str!("../../data/pokemon.csv");
        Self::load_from_csv_str(DEFAULT_POKEDEX_CSV)
    }

    /// Entries within the generation's national dex.
    pub fn for_generation(&self, generation: Generation) -> Vec<&MonEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.number >= 1 && entry.number <= generation.dex_size())
            .collect()
    }

    /// Species names available in a generation, one per species regardless of forms.
    pub fn species_names(&self, generation: Generation) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in self.for_generation(generation) {
            if !names.contains(&entry.name.as_str()) {
                names.push(&entry.name);
            }
        }
        names
    }

    pub fn forms_of(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.name == name)
            .map(|entry| entry.form.as_str())
            .collect()
    }

    pub fn get(&self, name: &str, form: &str) -> Option<&MonEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name == name && entry.form == form)
    }
}
