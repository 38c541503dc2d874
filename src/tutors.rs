mod tutor;
mod tutor_dimension;
mod tutor_flag;

pub use self::{tutor::Tutor, tutor_dimension::TutorDimension, tutor_flag::TutorFlag};

use crate::catalog::fallback_records;

/// Tutors served when neither the local storage nor the remote source have any.
pub fn fallback_tutors() -> anyhow::Result<Vec<Tutor>> {
    fallback_records("tutors.json")
}
