use crate::{
    catalog::CatalogRecord,
    tutors::{TutorDimension, TutorFlag},
};
use serde_derive::{Deserialize, Serialize};

/// Guitar (or bass, ukulele) tutor offering lessons through the marketplace.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    /// Instruments the tutor teaches, e.g. `guitarra-electrica`.
    #[serde(default)]
    pub instruments: Vec<String>,
    /// Music styles, e.g. `rock`, `jazz`, `flamenco`.
    #[serde(default)]
    pub styles: Vec<String>,
    /// Student levels the tutor accepts.
    #[serde(default)]
    pub levels: Vec<String>,
    /// Lesson modalities, `online` and/or `presencial`.
    #[serde(default)]
    pub modalities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub hourly_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews_count: u32,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub show_in_carousel: bool,
}

fn default_true() -> bool {
    true
}

impl CatalogRecord for Tutor {
    type Dimension = TutorDimension;
    type Flag = TutorFlag;

    const KIND: &'static str = "tutor";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn set_slug(&mut self, slug: String) {
        self.slug = slug;
    }

    fn price(&self) -> f64 {
        self.hourly_rate
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.short_description.as_str(),
            self.bio.as_str(),
        ]
    }

    fn dimension_values(&self, dimension: TutorDimension) -> Vec<&str> {
        let values = match dimension {
            TutorDimension::Instrument => &self.instruments,
            TutorDimension::Style => &self.styles,
            TutorDimension::Level => &self.levels,
            TutorDimension::Modality => &self.modalities,
            TutorDimension::Location => return self.location.as_deref().into_iter().collect(),
        };

        values.iter().map(String::as_str).collect()
    }

    fn has_flag(&self, flag: TutorFlag) -> bool {
        match flag {
            TutorFlag::Active => self.active,
            TutorFlag::Featured => self.featured,
            TutorFlag::ShowInCarousel => self.show_in_carousel,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::CatalogRecord,
        tutors::{Tutor, TutorDimension, TutorFlag},
    };
    use insta::assert_json_snapshot;

    #[test]
    fn deserialization_with_defaults() -> anyhow::Result<()> {
        let tutor: Tutor = serde_json::from_str(
            r#"{ "id": "t-1", "name": "Lucía Fernández", "hourlyRate": 25, "location": "Madrid" }"#,
        )?;

        assert_eq!(tutor.id(), "t-1");
        assert_eq!(tutor.name(), "Lucía Fernández");
        assert_eq!(tutor.slug(), "");
        assert_eq!(tutor.price(), 25.0);
        assert_eq!(tutor.rating(), None);
        assert!(tutor.has_flag(TutorFlag::Active));
        assert!(!tutor.has_flag(TutorFlag::Featured));
        assert!(!tutor.has_flag(TutorFlag::ShowInCarousel));
        assert!(tutor.dimension_values(TutorDimension::Instrument).is_empty());
        assert_eq!(
            tutor.dimension_values(TutorDimension::Location),
            vec!["Madrid"]
        );

        Ok(())
    }

    #[test]
    fn serialization() -> anyhow::Result<()> {
        let tutor = Tutor {
            id: "t-1".to_string(),
            name: "Lucía Fernández".to_string(),
            slug: "lucia-fernandez".to_string(),
            instruments: vec!["guitarra-clasica".to_string()],
            styles: vec!["flamenco".to_string()],
            levels: vec!["principiante".to_string()],
            modalities: vec!["online".to_string()],
            location: None,
            hourly_rate: 27.5,
            rating: Some(4.9),
            reviews_count: 31,
            experience_years: 12,
            short_description: "Flamenco".to_string(),
            bio: "Concertista".to_string(),
            image: None,
            active: true,
            featured: false,
            show_in_carousel: true,
        };

        assert_json_snapshot!(tutor, @r###"
        {
          "id": "t-1",
          "name": "Lucía Fernández",
          "slug": "lucia-fernandez",
          "instruments": [
            "guitarra-clasica"
          ],
          "styles": [
            "flamenco"
          ],
          "levels": [
            "principiante"
          ],
          "modalities": [
            "online"
          ],
          "hourlyRate": 27.5,
          "rating": 4.9,
          "reviewsCount": 31,
          "experienceYears": 12,
          "shortDescription": "Flamenco",
          "bio": "Concertista",
          "active": true,
          "featured": false,
          "showInCarousel": true
        }
        "###);

        Ok(())
    }
}
