use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Acidity,
    Chocolate,
    Nutty,
    Fruity,
    Caramel,
    Floral,
    Citrus,
    Honey,
    Berry,
    Spicy,
}

impl Flavor {
    /// Every descriptor, in display order.
    pub const ALL: [Flavor; 10] = [
        Flavor::Acidity,
        Flavor::Chocolate,
        Flavor::Nutty,
        Flavor::Fruity,
        Flavor::Caramel,
        Flavor::Floral,
        Flavor::Citrus,
        Flavor::Honey,
        Flavor::Berry,
        Flavor::Spicy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Acidity => "acidity",
            Flavor::Chocolate => "chocolate",
            Flavor::Nutty => "nutty",
            Flavor::Fruity => "fruity",
            Flavor::Caramel => "caramel",
            Flavor::Floral => "floral",
            Flavor::Citrus => "citrus",
            Flavor::Honey => "honey",
            Flavor::Berry => "berry",
            Flavor::Spicy => "spicy",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flavor::ALL
            .into_iter()
            .find(|flavor| flavor.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownValue {
                kind: "flavor",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrewMethod {
    #[default]
    Espresso,
    #[serde(rename = "French Press")]
    FrenchPress,
    AeroPress,
    V60,
    Chemex,
}

impl BrewMethod {
    /// Every method, grouped order first.
    pub const ALL: [BrewMethod; 5] = [
        BrewMethod::Espresso,
        BrewMethod::FrenchPress,
        BrewMethod::AeroPress,
        BrewMethod::V60,
        BrewMethod::Chemex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrewMethod::Espresso => "Espresso",
            BrewMethod::FrenchPress => "French Press",
            BrewMethod::AeroPress => "AeroPress",
            BrewMethod::V60 => "V60",
            BrewMethod::Chemex => "Chemex",
        }
    }

    pub fn group(&self) -> &'static BrewGroup {
        BREW_GROUPS
            .iter()
            .find(|group| group.methods.contains(self))
            .unwrap_or(&BREW_GROUPS[0])
    }

    /// Steps through [`BrewMethod::ALL`], wrapping at both ends.
    pub fn cycle(&self, forward: bool) -> BrewMethod {
        let len = Self::ALL.len();
        let idx = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        Self::ALL[next]
    }
}

impl fmt::Display for BrewMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrewMethod {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BrewMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownValue {
                kind: "brew method",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct BrewGroup {
    pub label: &'static str,
    pub methods: &'static [BrewMethod],
}

pub static BREW_GROUPS: [BrewGroup; 2] = [
    BrewGroup {
        label: "Espresso",
        methods: &[BrewMethod::Espresso],
    },
    BrewGroup {
        label: "Alternative",
        methods: &[
            BrewMethod::FrenchPress,
            BrewMethod::AeroPress,
            BrewMethod::V60,
            BrewMethod::Chemex,
        ],
    },
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Recommendation {
    pub fn display_line(&self) -> String {
        match self.score {
            Some(score) => format!("{} — {:.2}", self.name, score),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub flavors: Vec<Flavor>,
    pub brew_method: BrewMethod,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}
