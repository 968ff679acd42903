use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

#[derive(
    Clone,
    Copy,
    Display,
    EnumString,
    IntoStaticStr,
    Debug,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Hash,
)]
pub enum CollectionKind {
    // evicts the oldest on insert, pulls oldest first
    #[default]
    #[strum(serialize = "last")]
    #[serde(rename = "last")]
    Last,
    // bound applied at construction only, pulls newest first
    #[strum(serialize = "first")]
    #[serde(rename = "first")]
    First,
}
