use serde_derive::Deserialize;

#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CourseFlag {
    Active,
    Featured,
    #[serde(alias = "isNew")]
    New,
    #[serde(alias = "carousel")]
    ShowInCarousel,
}
