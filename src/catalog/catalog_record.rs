use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

/// JSON field that holds the record identifier.
pub const ID_FIELD: &str = "id";
/// JSON field that holds the record slug.
pub const SLUG_FIELD: &str = "slug";

/// A single item of the flat in-memory catalog (tutor, course or product).
///
/// Records are exchanged as camelCase JSON objects with the remote source, the local storage and
/// the admin forms, so every implementation is expected to tolerate missing optional fields and to
/// default visibility flags through serde.
pub trait CatalogRecord:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Classification dimension the catalog can be filtered by (instrument, category, etc.).
    type Dimension: Copy + Debug + Eq + DeserializeOwned + Send + Sync + 'static;
    /// Boolean visibility flag the catalog can be filtered by (featured, offer, etc.).
    type Flag: Copy + Debug + Eq + DeserializeOwned + Send + Sync + 'static;

    /// Human-readable kind of the record used in logs and error messages.
    const KIND: &'static str;
    /// JSON field that holds the display name of the record.
    const NAME_FIELD: &'static str = "name";

    /// Stable unique identifier, immutable once assigned.
    fn id(&self) -> &str;

    /// Human-readable display name or title.
    fn name(&self) -> &str;

    /// URL-safe slug, unique within the catalog by convention only.
    fn slug(&self) -> &str;

    fn set_slug(&mut self, slug: String);

    /// Price or hourly rate.
    fn price(&self) -> f64;

    /// Average rating, if the record is rated at all.
    fn rating(&self) -> Option<f64> {
        None
    }

    /// Free-text fields the text search is performed against.
    fn search_fields(&self) -> Vec<&str>;

    /// Values of the record for the specified dimension, single-valued fields return one value.
    fn dimension_values(&self, dimension: Self::Dimension) -> Vec<&str>;

    /// Checks whether the specified visibility flag is set.
    fn has_flag(&self, flag: Self::Flag) -> bool;
}
