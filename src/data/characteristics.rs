use crate::data::stats::Stat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 30 characteristics. Each one names the creature's highest-IV stat and
/// pins that IV's residue mod 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Characteristic {
    #[serde(rename = "Loves to eat")]
    LovesToEat,
    #[serde(rename = "Proud of its power")]
    ProudOfItsPower,
    #[serde(rename = "Sturdy body")]
    SturdyBody,
    #[serde(rename = "Likes to run")]
    LikesToRun,
    #[serde(rename = "Highly curious")]
    HighlyCurious,
    #[serde(rename = "Strong willed")]
    StrongWilled,
    #[serde(rename = "Takes plenty of siestas")]
    TakesPlentyOfSiestas,
    #[serde(rename = "Likes to thrash about")]
    LikesToThrashAbout,
    #[serde(rename = "Capable of taking hits")]
    CapableOfTakingHits,
    #[serde(rename = "Alert to sounds")]
    AlertToSounds,
    #[serde(rename = "Mischievous")]
    Mischievous,
    #[serde(rename = "Somewhat vain")]
    SomewhatVain,
    #[serde(rename = "Nods off a lot")]
    NodsOffALot,
    #[serde(rename = "A little quick tempered")]
    ALittleQuickTempered,
    #[serde(rename = "Highly persistent")]
    HighlyPersistent,
    #[serde(rename = "Impetuous and silly")]
    ImpetuousAndSilly,
    #[serde(rename = "Thoroughly cunning")]
    ThoroughlyCunning,
    #[serde(rename = "Strongly defiant")]
    StronglyDefiant,
    #[serde(rename = "Scatters things often")]
    ScattersThingsOften,
    #[serde(rename = "Likes to fight")]
    LikesToFight,
    #[serde(rename = "Good endurance")]
    GoodEndurance,
    #[serde(rename = "Somewhat of a clown")]
    SomewhatOfAClown,
    #[serde(rename = "Often lost in thought")]
    OftenLostInThought,
    #[serde(rename = "Hates to lose")]
    HatesToLose,
    #[serde(rename = "Likes to relax")]
    LikesToRelax,
    #[serde(rename = "Quick tempered")]
    QuickTempered,
    #[serde(rename = "Good perseverance")]
    GoodPerseverance,
    #[serde(rename = "Quick to flee")]
    QuickToFlee,
    #[serde(rename = "Very finicky")]
    VeryFinicky,
    #[serde(rename = "Somewhat stubborn")]
    SomewhatStubborn,
}

impl Characteristic {
    pub const ALL: [Characteristic; 30] = [
        Characteristic::LovesToEat,
        Characteristic::ProudOfItsPower,
        Characteristic::SturdyBody,
        Characteristic::LikesToRun,
        Characteristic::HighlyCurious,
        Characteristic::StrongWilled,
        Characteristic::TakesPlentyOfSiestas,
        Characteristic::LikesToThrashAbout,
        Characteristic::CapableOfTakingHits,
        Characteristic::AlertToSounds,
        Characteristic::Mischievous,
        Characteristic::SomewhatVain,
        Characteristic::NodsOffALot,
        Characteristic::ALittleQuickTempered,
        Characteristic::HighlyPersistent,
        Characteristic::ImpetuousAndSilly,
        Characteristic::ThoroughlyCunning,
        Characteristic::StronglyDefiant,
        Characteristic::ScattersThingsOften,
        Characteristic::LikesToFight,
        Characteristic::GoodEndurance,
        Characteristic::SomewhatOfAClown,
        Characteristic::OftenLostInThought,
        Characteristic::HatesToLose,
        Characteristic::LikesToRelax,
        Characteristic::QuickTempered,
        Characteristic::GoodPerseverance,
        Characteristic::QuickToFlee,
        Characteristic::VeryFinicky,
        Characteristic::SomewhatStubborn,
    ];

    /// The stat this characteristic marks as (tied for) the creature's highest IV.
    pub fn highest_stat(self) -> Stat {
        match self {
            Characteristic::LovesToEat
            | Characteristic::TakesPlentyOfSiestas
            | Characteristic::NodsOffALot
            | Characteristic::ScattersThingsOften
            | Characteristic::LikesToRelax => Stat::Hp,
            Characteristic::ProudOfItsPower
            | Characteristic::LikesToThrashAbout
            | Characteristic::ALittleQuickTempered
            | Characteristic::LikesToFight
            | Characteristic::QuickTempered => Stat::Attack,
            Characteristic::SturdyBody
            | Characteristic::CapableOfTakingHits
            | Characteristic::HighlyPersistent
            | Characteristic::GoodEndurance
            | Characteristic::GoodPerseverance => Stat::Defense,
            Characteristic::HighlyCurious
            | Characteristic::Mischievous
            | Characteristic::ThoroughlyCunning
            | Characteristic::OftenLostInThought
            | Characteristic::VeryFinicky => Stat::SpecialAttack,
            Characteristic::StrongWilled
            | Characteristic::SomewhatVain
            | Characteristic::StronglyDefiant
            | Characteristic::HatesToLose
            | Characteristic::SomewhatStubborn => Stat::SpecialDefense,
            Characteristic::LikesToRun
            | Characteristic::AlertToSounds
            | Characteristic::ImpetuousAndSilly
            | Characteristic::SomewhatOfAClown
            | Characteristic::QuickToFlee => Stat::Speed,
        }
    }

    /// The residue of the highest IV mod 5.
    pub fn iv_modulo(self) -> i32 {
        match self {
            Characteristic::LovesToEat
            | Characteristic::ProudOfItsPower
            | Characteristic::SturdyBody
            | Characteristic::LikesToRun
            | Characteristic::HighlyCurious
            | Characteristic::StrongWilled => 0,
            Characteristic::TakesPlentyOfSiestas
            | Characteristic::LikesToThrashAbout
            | Characteristic::CapableOfTakingHits
            | Characteristic::AlertToSounds
            | Characteristic::Mischievous
            | Characteristic::SomewhatVain => 1,
            Characteristic::NodsOffALot
            | Characteristic::ALittleQuickTempered
            | Characteristic::HighlyPersistent
            | Characteristic::ImpetuousAndSilly
            | Characteristic::ThoroughlyCunning
            | Characteristic::StronglyDefiant => 2,
            Characteristic::ScattersThingsOften
            | Characteristic::LikesToFight
            | Characteristic::GoodEndurance
            | Characteristic::SomewhatOfAClown
            | Characteristic::OftenLostInThought
            | Characteristic::HatesToLose => 3,
            Characteristic::LikesToRelax
            | Characteristic::QuickTempered
            | Characteristic::GoodPerseverance
            | Characteristic::QuickToFlee
            | Characteristic::VeryFinicky
            | Characteristic::SomewhatStubborn => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Characteristic::LovesToEat => "Loves to eat",
            Characteristic::ProudOfItsPower => "Proud of its power",
            Characteristic::SturdyBody => "Sturdy body",
            Characteristic::LikesToRun => "Likes to run",
            Characteristic::HighlyCurious => "Highly curious",
            Characteristic::StrongWilled => "Strong willed",
            Characteristic::TakesPlentyOfSiestas => "Takes plenty of siestas",
            Characteristic::LikesToThrashAbout => "Likes to thrash about",
            Characteristic::CapableOfTakingHits => "Capable of taking hits",
            Characteristic::AlertToSounds => "Alert to sounds",
            Characteristic::Mischievous => "Mischievous",
            Characteristic::SomewhatVain => "Somewhat vain",
            Characteristic::NodsOffALot => "Nods off a lot",
            Characteristic::ALittleQuickTempered => "A little quick tempered",
            Characteristic::HighlyPersistent => "Highly persistent",
            Characteristic::ImpetuousAndSilly => "Impetuous and silly",
            Characteristic::ThoroughlyCunning => "Thoroughly cunning",
            Characteristic::StronglyDefiant => "Strongly defiant",
            Characteristic::ScattersThingsOften => "Scatters things often",
            Characteristic::LikesToFight => "Likes to fight",
            Characteristic::GoodEndurance => "Good endurance",
            Characteristic::SomewhatOfAClown => "Somewhat of a clown",
            Characteristic::OftenLostInThought => "Often lost in thought",
            Characteristic::HatesToLose => "Hates to lose",
            Characteristic::LikesToRelax => "Likes to relax",
            Characteristic::QuickTempered => "Quick tempered",
            Characteristic::GoodPerseverance => "Good perseverance",
            Characteristic::QuickToFlee => "Quick to flee",
            Characteristic::VeryFinicky => "Very finicky",
            Characteristic::SomewhatStubborn => "Somewhat stubborn",
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
