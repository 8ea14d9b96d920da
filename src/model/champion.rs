//! Champion detail records, as served by the remote catalog's per-champion
//! endpoint.
//!
//! Only `id` is required; everything else defaults when absent so that
//! trimmed-down records (and older snapshots) still deserialize.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Detail;

/// The `{ "data": { "<id>": { ... } } }` envelope around detail records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChampionDocument {
    #[serde(default)]
    pub data: BTreeMap<String, Champion>,
}

impl ChampionDocument {
    /// Parse a detail document from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Consume the envelope, yielding its champions in identifier order.
    pub fn into_champions(self) -> impl Iterator<Item = Champion> {
        self.data.into_values()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Champion {
    pub id: String,
    pub key: String,
    pub name: String,
    pub title: String,
    pub partype: String,
    pub spells: Vec<Spell>,
    pub passive: Passive,
    pub image: Image,
    pub stats: Stats,
}

impl Detail for Champion {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Sprite sheet coordinates for an icon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub full: String,
    pub sprite: String,
    pub group: String,
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

/// Base stats and their per-level growth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub hp: f64,
    pub hpperlevel: f64,
    pub mp: f64,
    pub mpperlevel: f64,
    pub movespeed: f64,
    pub armor: f64,
    pub armorperlevel: f64,
    pub spellblock: f64,
    pub spellblockperlevel: f64,
    pub attackrange: f64,
    pub hpregen: f64,
    pub hpregenperlevel: f64,
    pub mpregen: f64,
    pub mpregenperlevel: f64,
    pub crit: f64,
    pub critperlevel: f64,
    pub attackdamage: f64,
    pub attackdamageperlevel: f64,
    pub attackspeedperlevel: f64,
    pub attackspeed: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spell {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tooltip: String,
    pub leveltip: LevelTip,
    pub maxrank: i64,
    pub cooldown: Vec<f64>,
    #[serde(rename = "cooldownBurn")]
    pub cooldown_burn: String,
    pub cost: Vec<i64>,
    #[serde(rename = "costBurn")]
    pub cost_burn: String,
    #[serde(rename = "costType")]
    pub cost_type: String,
    pub datavalues: Value,
    /// Per-rank effect values; entries are `null` or arrays of numbers.
    pub effect: Vec<Value>,
    #[serde(rename = "effectBurn")]
    pub effect_burn: Vec<Option<String>>,
    pub vars: Vec<Var>,
    pub maxammo: String,
    pub range: Vec<i64>,
    #[serde(rename = "rangeBurn")]
    pub range_burn: String,
    pub image: Image,
    pub resource: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelTip {
    pub label: Vec<String>,
    pub effect: Vec<String>,
}

/// A scaling coefficient referenced from a spell tooltip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Var {
    /// A number or an array of numbers, depending on the spell.
    pub coeff: Value,
    pub key: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Passive {
    pub name: String,
    pub description: String,
    pub image: Image,
}
