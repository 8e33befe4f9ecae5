use serde::{Deserialize, Serialize};

/// Варианты шаблонов листа товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateVariant {
    KitsCouverts,
    BoitesXps,
    BoitesPizza,
    Pailles,
    FilmEtirable,
    StandardSingle,
    StandardDouble,
}

impl TemplateVariant {
    /// Код шаблона (CSS-модификатор листа)
    pub fn code(&self) -> &'static str {
        match self {
            TemplateVariant::KitsCouverts => "kits-couverts",
            TemplateVariant::BoitesXps => "boites-xps",
            TemplateVariant::BoitesPizza => "boites-pizza",
            TemplateVariant::Pailles => "pailles",
            TemplateVariant::FilmEtirable => "film-etirable",
            TemplateVariant::StandardSingle => "standard-single",
            TemplateVariant::StandardDouble => "standard-double",
        }
    }

    /// Заголовок листа
    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateVariant::KitsCouverts => "Kits couverts",
            TemplateVariant::BoitesXps => "Boîtes économiques XPS",
            TemplateVariant::BoitesPizza => "Boîtes pizza",
            TemplateVariant::Pailles => "Pailles",
            TemplateVariant::FilmEtirable => "Film étirable",
            TemplateVariant::StandardSingle => "Fiche produit",
            TemplateVariant::StandardDouble => "Fiche produit double",
        }
    }

    pub fn all() -> Vec<TemplateVariant> {
        vec![
            TemplateVariant::KitsCouverts,
            TemplateVariant::BoitesXps,
            TemplateVariant::BoitesPizza,
            TemplateVariant::Pailles,
            TemplateVariant::FilmEtirable,
            TemplateVariant::StandardSingle,
            TemplateVariant::StandardDouble,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|variant| variant.code() == code)
    }

    /// Special sheets show the variant matrix instead of the label/value table.
    pub fn is_matrix(&self) -> bool {
        !matches!(
            self,
            TemplateVariant::StandardSingle | TemplateVariant::StandardDouble
        )
    }

    /// Placeholder for the upper image when the record has none.
    pub fn default_image(&self) -> Option<&'static str> {
        match self {
            TemplateVariant::KitsCouverts => Some("/images/kits-bois.png"),
            TemplateVariant::BoitesXps => Some("/images/boite_burger.png"),
            TemplateVariant::BoitesPizza => Some("/images/boite_pizza.png"),
            TemplateVariant::Pailles => Some("/images/pailles.png"),
            TemplateVariant::FilmEtirable => Some("/images/film_etirable.png"),
            TemplateVariant::StandardSingle | TemplateVariant::StandardDouble => None,
        }
    }

    /// Placeholder for the lower "mise en situation" band.
    pub fn default_bottom_image(&self) -> Option<&'static str> {
        match self {
            TemplateVariant::KitsCouverts => Some("/images/kit_couvert_NO.png"),
            TemplateVariant::BoitesXps => Some("/images/mise_scene_bol.png"),
            TemplateVariant::BoitesPizza => Some("/images/pizza_scene.png"),
            TemplateVariant::Pailles => Some("/images/page_table_matier.png"),
            TemplateVariant::FilmEtirable => Some("/images/film_cuisine.png"),
            TemplateVariant::StandardSingle | TemplateVariant::StandardDouble => None,
        }
    }
}

impl std::fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
