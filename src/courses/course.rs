use crate::{
    catalog::CatalogRecord,
    courses::{CourseDimension, CourseFlag},
};
use serde_derive::{Deserialize, Serialize};

/// Self-paced or tutor-led course sold through the marketplace.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    /// Identifier of the tutor that leads the course, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutor_id: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub instrument: String,
    /// `principiante`, `intermedio` or `avanzado`.
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub modalities: Vec<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub students_count: u32,
    #[serde(default)]
    pub lessons_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_weeks: Option<u32>,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub show_in_carousel: bool,
}

fn default_true() -> bool {
    true
}

impl CatalogRecord for Course {
    type Dimension = CourseDimension;
    type Flag = CourseFlag;

    const KIND: &'static str = "course";
    const NAME_FIELD: &'static str = "title";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.title
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn set_slug(&mut self, slug: String) {
        self.slug = slug;
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.short_description.as_str(),
            self.description.as_str(),
        ]
    }

    fn dimension_values(&self, dimension: CourseDimension) -> Vec<&str> {
        match dimension {
            CourseDimension::Category => vec![self.category.as_str()],
            CourseDimension::Instrument => vec![self.instrument.as_str()],
            CourseDimension::Difficulty => vec![self.difficulty.as_str()],
            CourseDimension::Modality => self.modalities.iter().map(String::as_str).collect(),
            CourseDimension::Tutor => self.tutor_id.as_deref().into_iter().collect(),
        }
    }

    fn has_flag(&self, flag: CourseFlag) -> bool {
        match flag {
            CourseFlag::Active => self.active,
            CourseFlag::Featured => self.featured,
            CourseFlag::New => self.is_new,
            CourseFlag::ShowInCarousel => self.show_in_carousel,
        }
    }
}
