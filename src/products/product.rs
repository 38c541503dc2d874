use crate::{
    catalog::CatalogRecord,
    products::{ProductDimension, ProductFlag},
};
use serde_derive::{Deserialize, Serialize};

/// Instrument, accessory or gear sold in the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: f64,
    /// Price before the discount, only meaningful for offers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews_count: u32,
    #[serde(default)]
    pub stock: u32,
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
    pub offer: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub show_in_carousel: bool,
}

fn default_true() -> bool {
    true
}

impl CatalogRecord for Product {
    type Dimension = ProductDimension;
    type Flag = ProductFlag;

    const KIND: &'static str = "product";

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
        self.price
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.short_description.as_str(),
            self.description.as_str(),
        ];
        if let Some(brand) = &self.brand {
            fields.push(brand.as_str());
        }

        fields
    }

    fn dimension_values(&self, dimension: ProductDimension) -> Vec<&str> {
        match dimension {
            ProductDimension::Category => vec![self.category.as_str()],
            ProductDimension::Brand => self.brand.as_deref().into_iter().collect(),
        }
    }

    fn has_flag(&self, flag: ProductFlag) -> bool {
        match flag {
            ProductFlag::Active => self.active,
            ProductFlag::Featured => self.featured,
            ProductFlag::Offer => self.offer,
            ProductFlag::New => self.is_new,
            ProductFlag::ShowInCarousel => self.show_in_carousel,
            ProductFlag::InStock => self.stock > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::CatalogRecord,
        products::{Product, ProductDimension, ProductFlag},
    };
    use insta::assert_json_snapshot;

    #[test]
    fn deserialization_with_defaults() -> anyhow::Result<()> {
        let product: Product = serde_json::from_str(
            r#"{ "id": "p-1", "name": "Afinador", "category": "accesorios", "price": 19.9 }"#,
        )?;

        assert_eq!(product.brand, None);
        assert_eq!(product.stock, 0);
        assert!(product.has_flag(ProductFlag::Active));
        assert!(!product.has_flag(ProductFlag::Offer));
        assert!(!product.has_flag(ProductFlag::InStock));
        assert!(product.dimension_values(ProductDimension::Brand).is_empty());
        assert_eq!(
            product.dimension_values(ProductDimension::Category),
            vec!["accesorios"]
        );
        assert_eq!(product.search_fields(), vec!["Afinador", "", ""]);

        // Unknown flags are rejected.
        assert!(serde_json::from_str::<ProductFlag>(r#""soldOut""#).is_err());
        assert_eq!(
            serde_json::from_str::<ProductFlag>(r#""inStock""#)?,
            ProductFlag::InStock
        );

        Ok(())
    }

    #[test]
    fn serialization() -> anyhow::Result<()> {
        let product = Product {
            id: "p-1".to_string(),
            name: "Yamaha C40".to_string(),
            slug: "yamaha-c40".to_string(),
            category: "guitarras".to_string(),
            brand: Some("Yamaha".to_string()),
            price: 119.5,
            original_price: Some(149.5),
            rating: None,
            reviews_count: 0,
            stock: 3,
            short_description: "Guitarra clásica de estudio".to_string(),
            description: String::new(),
            image: None,
            active: true,
            featured: false,
            offer: true,
            is_new: false,
            show_in_carousel: false,
        };

        assert!(product.has_flag(ProductFlag::InStock));
        assert_json_snapshot!(product, @r###"
        {
          "id": "p-1",
          "name": "Yamaha C40",
          "slug": "yamaha-c40",
          "category": "guitarras",
          "brand": "Yamaha",
          "price": 119.5,
          "originalPrice": 149.5,
          "reviewsCount": 0,
          "stock": 3,
          "shortDescription": "Guitarra clásica de estudio",
          "description": "",
          "active": true,
          "featured": false,
          "offer": true,
          "isNew": false,
          "showInCarousel": false
        }
        "###);

        Ok(())
    }
}
