use crate::{
    catalog::{CatalogService, CatalogSource},
    config::Config,
    courses::{Course, fallback_courses},
    network::Network,
    products::{Product, fallback_products},
    storage::KeyValueStorage,
    tutors::{Tutor, fallback_tutors},
};
use std::sync::Arc;

/// Catalog services of all domains sharing the same storage and network.
pub struct Api<S: KeyValueStorage + Clone> {
    tutors: Arc<CatalogService<Tutor, S>>,
    courses: Arc<CatalogService<Course, S>>,
    products: Arc<CatalogService<Product, S>>,
}

impl<S: KeyValueStorage + Clone> Api<S> {
    /// Instantiates APIs collection with the specified config, storage and network.
    pub fn new(config: Config, storage: S, network: Network) -> anyhow::Result<Self> {
        let tutors = CatalogService::new(
            config.catalogs.tutors.clone(),
            storage.clone(),
            network.clone(),
            fallback_tutors()?,
        );
        let courses = CatalogService::new(
            config.catalogs.courses.clone(),
            storage.clone(),
            network.clone(),
            fallback_courses()?,
        );
        let products = CatalogService::new(
            config.catalogs.products.clone(),
            storage,
            network,
            fallback_products()?,
        );

        Ok(Self {
            tutors: Arc::new(tutors),
            courses: Arc::new(courses),
            products: Arc::new(products),
        })
    }

    /// Returns an API to work with tutors.
    pub fn tutors(&self) -> &Arc<CatalogService<Tutor, S>> {
        &self.tutors
    }

    /// Returns an API to work with courses.
    pub fn courses(&self) -> &Arc<CatalogService<Course, S>> {
        &self.courses
    }

    /// Returns an API to work with products.
    pub fn products(&self) -> &Arc<CatalogService<Product, S>> {
        &self.products
    }

    /// Loads all catalogs concurrently, returns sources of the tutors, courses and products.
    pub async fn load_all(&self) -> (CatalogSource, CatalogSource, CatalogSource) {
        tokio::join!(
            self.tutors.load(),
            self.courses.load(),
            self.products.load()
        )
    }
}
