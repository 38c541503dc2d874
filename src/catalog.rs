mod catalog_filter;
mod catalog_loader;
mod catalog_record;
mod catalog_service;
mod catalog_source;
mod catalog_store;
mod catalog_view;
mod fallback;
mod persistence;
mod slug;

pub use self::{
    catalog_filter::{CatalogFilter, CatalogSort, SortKey, SortOrder, is_any_value},
    catalog_loader::CatalogLoader,
    catalog_record::{CatalogRecord, ID_FIELD, SLUG_FIELD},
    catalog_service::CatalogService,
    catalog_source::CatalogSource,
    catalog_store::CatalogStore,
    catalog_view::filter_records,
    fallback::fallback_records,
    slug::{derive_slug, slugify},
};
