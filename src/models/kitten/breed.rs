use serde::{Deserialize, Serialize};
use strum::VariantNames;
use utoipa::ToSchema;

/// Closed set of breeds a kitten can be registered with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
pub enum Breed {
    Abyssinian,
    #[default]
    Bengal,
    #[strum(serialize = "British Shorthair")]
    #[serde(rename = "British Shorthair")]
    BritishShorthair,
    #[strum(serialize = "Maine Coon")]
    #[serde(rename = "Maine Coon")]
    MaineCoon,
    Persian,
    Ragdoll,
    Siamese,
    Sphynx,
    #[strum(serialize = "Scottish Fold")]
    #[serde(rename = "Scottish Fold")]
    ScottishFold,
    Burmese,
    #[strum(serialize = "Oriental Shorthair")]
    #[serde(rename = "Oriental Shorthair")]
    OrientalShorthair,
    Normandy,
    #[strum(serialize = "American Shorthair")]
    #[serde(rename = "American Shorthair")]
    AmericanShorthair,
    Somali,
    #[strum(serialize = "Devon Rex")]
    #[serde(rename = "Devon Rex")]
    DevonRex,
}

impl Breed {
    /// All accepted breed values, in declaration order.
    pub fn values() -> Vec<&'static str> {
        Self::VARIANTS.to_vec()
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
