use serde_derive::Deserialize;

#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TutorFlag {
    Active,
    Featured,
    #[serde(alias = "carousel")]
    ShowInCarousel,
}
