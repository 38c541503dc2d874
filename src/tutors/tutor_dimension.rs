use serde_derive::Deserialize;

/// Dimensions the tutors catalog can be filtered by.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TutorDimension {
    Instrument,
    Style,
    Level,
    Modality,
    Location,
}
