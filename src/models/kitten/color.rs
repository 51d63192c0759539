use serde::{Deserialize, Serialize};
use strum::VariantNames;
use utoipa::ToSchema;

/// Closed set of coat colors.
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
pub enum Color {
    Black,
    #[default]
    White,
    Gray,
    Orange,
    Calico,
    Tabby,
    Brown,
    Cream,
    Blue,
    Red,
    Chocolate,
    Lilac,
    Tortie,
}

impl Color {
    /// All accepted color values, in declaration order.
    pub fn values() -> Vec<&'static str> {
        Self::VARIANTS.to_vec()
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
