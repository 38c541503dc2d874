use serde_derive::Deserialize;

/// Dimensions the courses catalog can be filtered by.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CourseDimension {
    Category,
    Instrument,
    Difficulty,
    Modality,
    /// Identifier of the tutor leading the course.
    Tutor,
}
