use crate::core::next_level::next_stat_level;
use crate::core::solver::{calc_iv_ranges, CalcOptions, IvRanges};
use crate::data::characteristics::Characteristic;
use crate::data::hidden_power::HiddenPower;
use crate::data::natures::Nature;
use crate::data::species::{Generation, MonEntry, PokedexDatabase};
use crate::data::stats::{Observation, Stat, Stats};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

static POKEDEX: Lazy<PokedexDatabase> =
    Lazy::new(|| PokedexDatabase::load_default().unwrap_or_else(|_| PokedexDatabase::new()));

fn js_err(message: impl ToString) -> JsValue {
    JsValue::from_str(&message.to_string())
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalcRequestWire {
    base_stats: Stats,
    observations: Vec<Observation>,
    nature: Nature,
    #[serde(default)]
    characteristic: Option<Characteristic>,
    #[serde(default)]
    hidden_power: Option<HiddenPower>,
    #[serde(default)]
    fixed_hp: bool,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalcResponseWire {
    ivs: IvRanges,
    next_levels: NextLevelsWire,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct NextLevelsWire {
    hp: Option<i32>,
    attack: Option<i32>,
    defense: Option<i32>,
    special_attack: Option<i32>,
    special_defense: Option<i32>,
    speed: Option<i32>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MonEntryWire {
    number: u32,
    name: String,
    form: String,
    base_stats: Stats,
    fixed_hp: bool,
}

impl From<&MonEntry> for MonEntryWire {
    fn from(entry: &MonEntry) -> Self {
        Self {
            number: entry.number,
            name: entry.name.clone(),
            form: entry.form.clone(),
            base_stats: entry.base_stats(),
            fixed_hp: entry.has_fixed_hp(),
        }
    }
}

/// Runs the full solve and the per-stat next-level queries in one call.
#[wasm_bindgen(js_name = calcIvRanges)]
pub fn calc_iv_ranges_wasm(request: JsValue) -> Result<JsValue, JsValue> {
    let request: CalcRequestWire = serde_wasm_bindgen::from_value(request).map_err(js_err)?;
    let options = CalcOptions {
        characteristic: request.characteristic,
        hidden_power: request.hidden_power,
        fixed_hp: request.fixed_hp,
    };
    let ivs = calc_iv_ranges(
        &request.base_stats,
        &request.observations,
        request.nature,
        &options,
    );

    let mut next_levels = NextLevelsWire::default();
    if let Some(last) = request.observations.last() {
        for stat in Stat::ALL {
            let next = next_stat_level(
                stat,
                request.base_stats.get(stat),
                ivs.get(stat),
                last.evs.get(stat),
                last.level,
                request.nature,
                request.fixed_hp,
            );
            match stat {
                Stat::Hp => next_levels.hp = next,
                Stat::Attack => next_levels.attack = next,
                Stat::Defense => next_levels.defense = next,
                Stat::SpecialAttack => next_levels.special_attack = next,
                Stat::SpecialDefense => next_levels.special_defense = next,
                Stat::Speed => next_levels.speed = next,
            }
        }
    }

    serde_wasm_bindgen::to_value(&CalcResponseWire { ivs, next_levels }).map_err(js_err)
}

/// Pokedex entries for one generation from the bundled table.
#[wasm_bindgen(js_name = getPokedex)]
pub fn get_pokedex_wasm(generation: JsValue) -> Result<JsValue, JsValue> {
    let generation: Generation = serde_wasm_bindgen::from_value(generation).map_err(js_err)?;
    let entries: Vec<MonEntryWire> = POKEDEX
        .for_generation(generation)
        .into_iter()
        .map(MonEntryWire::from)
        .collect();
    serde_wasm_bindgen::to_value(&entries).map_err(js_err)
}
