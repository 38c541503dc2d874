use crate::catalog::{CatalogFilter, CatalogRecord, catalog_filter::is_any_value};

/// Projects the collection through the filter: text search, categorical constraints, flags, price
/// range and finally the sort. Always returns a new vector, the input order is kept unless sorted.
pub fn filter_records<R: CatalogRecord>(records: &[R], filter: &CatalogFilter<R>) -> Vec<R> {
    if filter.is_unconstrained() {
        return records.to_vec();
    }

    let search = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);
    let dimensions = filter
        .dimensions
        .iter()
        .filter(|(_, value)| !is_any_value(value))
        .collect::<Vec<_>>();

    let mut filtered = records
        .iter()
        .filter(|record| {
            search.as_deref().is_none_or(|term| {
                record
                    .search_fields()
                    .into_iter()
                    .any(|field| field.to_lowercase().contains(term))
            })
        })
        .filter(|record| {
            dimensions.iter().all(|(dimension, value)| {
                record
                    .dimension_values(*dimension)
                    .into_iter()
                    .any(|candidate| candidate == value.as_str())
            })
        })
        .filter(|record| filter.flags.iter().all(|flag| record.has_flag(*flag)))
        .filter(|record| {
            filter
                .min_price
                .is_none_or(|min_price| record.price() >= min_price)
                && filter
                    .max_price
                    .is_none_or(|max_price| record.price() <= max_price)
        })
        .cloned()
        .collect::<Vec<_>>();

    if let Some(sort) = filter.sort {
        // `sort_by` is stable, records with equal keys keep their relative order.
        filtered.sort_by(|left, right| sort.compare(left, right));
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::filter_records;
    use crate::{
        catalog::{CatalogFilter, CatalogRecord, CatalogSort, SortKey, SortOrder},
        products::{Product, ProductDimension, ProductFlag},
        tests::{MockProductBuilder, MockTutorBuilder},
        tutors::{Tutor, TutorDimension},
    };

    fn ids<R: CatalogRecord>(records: &[R]) -> Vec<&str> {
        records.iter().map(|record| record.id()).collect()
    }

    fn mock_products() -> Vec<Product> {
        vec![
            MockProductBuilder::new("p-1", "Fender Stratocaster", 1200.0)
                .set_category("guitarras")
                .set_brand("Fender")
                .set_rating(4.8)
                .set_featured()
                .build(),
            MockProductBuilder::new("p-2", "Cuerdas de nylon", 12.5)
                .set_category("accesorios")
                .set_description("Juego de cuerdas para guitarra clásica")
                .set_rating(4.1)
                .build(),
            MockProductBuilder::new("p-3", "Yamaha C40", 150.0)
                .set_category("guitarras")
                .set_brand("Yamaha")
                .set_offer()
                .build(),
            MockProductBuilder::new("p-4", "Afinador cromático", 25.0)
                .set_category("accesorios")
                .set_rating(4.1)
                .set_featured()
                .build(),
        ]
    }

    #[test]
    fn returns_whole_collection_for_empty_filter() {
        let products = mock_products();
        let filtered = filter_records(&products, &CatalogFilter::default());
        assert_eq!(filtered, products);
    }

    #[test]
    fn sorts_by_price() {
        let products = vec![
            MockProductBuilder::new("a", "A", 100.0).build(),
            MockProductBuilder::new("b", "B", 50.0).build(),
        ];

        let filter = CatalogFilter::default().with_sort(CatalogSort::new(SortKey::Price, SortOrder::Asc));
        assert_eq!(ids(&filter_records(&products, &filter)), vec!["b", "a"]);

        let filter = CatalogFilter::default().with_sort(CatalogSort::new(SortKey::Price, SortOrder::Desc));
        assert_eq!(ids(&filter_records(&products, &filter)), vec!["a", "b"]);
    }

    #[test]
    fn filters_by_price_range() {
        let products = vec![
            MockProductBuilder::new("a", "A", 100.0).build(),
            MockProductBuilder::new("b", "B", 50.0).build(),
        ];

        let filter = CatalogFilter::default().with_min_price(60.0);
        assert_eq!(ids(&filter_records(&products, &filter)), vec!["a"]);

        let filter = CatalogFilter::default().with_max_price(60.0);
        assert_eq!(ids(&filter_records(&products, &filter)), vec!["b"]);

        // Bounds are inclusive.
        let filter = CatalogFilter::default().with_min_price(50.0).with_max_price(100.0);
        assert_eq!(ids(&filter_records(&products, &filter)), vec!["a", "b"]);

        let filter = CatalogFilter::default().with_min_price(60.0).with_max_price(90.0);
        assert!(filter_records(&products, &filter).is_empty());
    }

    #[test]
    fn searches_text_fields_case_insensitively() {
        let products = mock_products();

        let filter = CatalogFilter::default().with_search("STRATO");
        assert_eq!(ids(&filter_records(&products, &filter)), vec!["p-1"]);

        // Description is searched as well.
        let filter = CatalogFilter::default().with_search("clásica");
        assert_eq!(ids(&filter_records(&products, &filter)), vec!["p-2"]);

        let filter = CatalogFilter::default().with_search("  yamaha  ");
        assert_eq!(ids(&filter_records(&products, &filter)), vec!["p-3"]);

        let filter = CatalogFilter::default().with_search("theremin");
        assert!(filter_records(&products, &filter).is_empty());
    }

    #[test]
    fn filters_by_dimensions() {
        let products = mock_products();

        let filter = CatalogFilter::default().with_dimension(ProductDimension::Category, "guitarras");
        assert_eq!(ids(&filter_records(&products, &filter)), vec!["p-1", "p-3"]);

        let filter = CatalogFilter::default()
            .with_dimension(ProductDimension::Category, "guitarras")
            .with_dimension(ProductDimension::Brand, "Yamaha");
        assert_eq!(ids(&filter_records(&products, &filter)), vec!["p-3"]);

        // Sentinels set directly on the descriptor still mean no constraint.
        let filter = CatalogFilter::<Product> {
            dimensions: vec![(ProductDimension::Category, "todos".to_string())],
            ..Default::default()
        };
        assert_eq!(filter_records(&products, &filter), products);
    }

    #[test]
    fn filters_by_multi_valued_dimensions() {
        let tutors = vec![
            MockTutorBuilder::new("t-1", "Ana", 20.0)
                .set_instruments(&["guitarra-clasica", "ukelele"])
                .set_modalities(&["online"])
                .build(),
            MockTutorBuilder::new("t-2", "Luis", 25.0)
                .set_instruments(&["bajo"])
                .set_modalities(&["online", "presencial"])
                .build(),
        ];

        let filter = CatalogFilter::<Tutor>::default().with_dimension(TutorDimension::Instrument, "ukelele");
        assert_eq!(ids(&filter_records(&tutors, &filter)), vec!["t-1"]);

        let filter = CatalogFilter::<Tutor>::default().with_dimension(TutorDimension::Modality, "online");
        assert_eq!(ids(&filter_records(&tutors, &filter)), vec!["t-1", "t-2"]);

        let filter = CatalogFilter::<Tutor>::default().with_dimension(TutorDimension::Modality, "presencial");
        assert_eq!(ids(&filter_records(&tutors, &filter)), vec!["t-2"]);
    }

    #[test]
    fn filters_by_flags() {
        let products = mock_products();

        let filter = CatalogFilter::default().with_flag(ProductFlag::Featured);
        assert_eq!(ids(&filter_records(&products, &filter)), vec!["p-1", "p-4"]);

        let filter = CatalogFilter::default()
            .with_flag(ProductFlag::Featured)
            .with_flag(ProductFlag::Offer);
        assert!(filter_records(&products, &filter).is_empty());
    }

    #[test]
    fn sorts_by_rating_stably() {
        let products = mock_products();

        let filter = CatalogFilter::default().with_sort(CatalogSort::new(SortKey::Rating, SortOrder::Desc));
        // `p-2` and `p-4` share the rating and keep their original order, unrated `p-3` goes last.
        assert_eq!(
            ids(&filter_records(&products, &filter)),
            vec!["p-1", "p-2", "p-4", "p-3"]
        );

        let filter = CatalogFilter::default().with_sort(CatalogSort::new(SortKey::Rating, SortOrder::Asc));
        assert_eq!(
            ids(&filter_records(&products, &filter)),
            vec!["p-3", "p-2", "p-4", "p-1"]
        );
    }

    #[test]
    fn narrows_without_adding_records() {
        let products = mock_products();
        let filter = CatalogFilter::default()
            .with_search("a")
            .with_dimension(ProductDimension::Category, "accesorios")
            .with_max_price(20.0)
            .with_sort(CatalogSort::new(SortKey::Price, SortOrder::Desc));

        let filtered = filter_records(&products, &filter);
        assert_eq!(ids(&filtered), vec!["p-2"]);
        assert!(filtered.iter().all(|record| products.contains(record)));
    }
}
