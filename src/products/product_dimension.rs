use serde_derive::Deserialize;

#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ProductDimension {
    Category,
    Brand,
}
