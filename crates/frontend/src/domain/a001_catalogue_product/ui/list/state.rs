use crate::routes::routes::AppRoute;
use contracts::domain::a001_catalogue_product::ProductRecord;

/// Данные карточки товара в сетке
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCard {
    pub href: String,
    pub title: String,
    pub category: String,
    pub image: Option<String>,
    /// Short description, clamped to two lines by CSS
    pub description: Option<String>,
}

impl ProductCard {
    pub fn from_record(product: &ProductRecord, uncategorized_label: &str) -> Self {
        Self {
            href: AppRoute::Product(product.slug.clone()).href(),
            title: product.title.clone(),
            category: product
                .category_key()
                .unwrap_or(uncategorized_label)
                .to_string(),
            image: product.image.clone(),
            description: product
                .bottom_note
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_shows_description() {
        let mut product = ProductRecord::new("verres-cocktail-pla", "Verres cocktail PLA")
            .with_category("Bar / Brasserie");
        product.bottom_note = Some("Transparents, compostables.".to_string());

        let card = ProductCard::from_record(&product, "Non classé");
        assert_eq!(card.description.as_deref(), Some("Transparents, compostables."));
        assert_eq!(card.category, "Bar / Brasserie");
        assert_eq!(card.href, "?p=verres-cocktail-pla");
    }

    #[test]
    fn test_card_without_description_or_category() {
        let mut product = ProductRecord::new("serviettes-ouate", "Serviettes ouate");
        product.bottom_note = Some("   ".to_string());

        let card = ProductCard::from_record(&product, "Non classé");
        assert_eq!(card.description, None);
        assert_eq!(card.category, "Non classé");
    }
}
