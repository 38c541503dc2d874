use serde_derive::Deserialize;

/// Visibility flags of the store products.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ProductFlag {
    Active,
    Featured,
    Offer,
    #[serde(alias = "isNew")]
    New,
    #[serde(alias = "carousel")]
    ShowInCarousel,
    /// Set when at least one unit is in stock.
    InStock,
}
