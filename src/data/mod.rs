pub mod characteristics;
pub mod hidden_power;
pub mod natures;
pub mod species;
pub mod stats;

pub use characteristics::Characteristic;
pub use hidden_power::HiddenPower;
pub use natures::Nature;
pub use species::{Generation, MonEntry, PokedexDatabase};
pub use stats::{Observation, Stat, Stats};
