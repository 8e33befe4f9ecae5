use serde::{Deserialize, Serialize};

// ============================================================================
// Spec rows
// ============================================================================

/// Строка характеристик товара (label / value)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

impl SpecRow {
    /// Trimmed row, or `None` when either side is blank.
    pub fn cleaned(label: &str, value: &str) -> Option<Self> {
        let label = label.trim();
        let value = value.trim();
        if label.is_empty() || value.is_empty() {
            return None;
        }
        Some(Self {
            label: label.to_string(),
            value: value.to_string(),
        })
    }
}

/// Строка варианта товара для матричных листов (référence / format / divers / conditionnement)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRow {
    pub reference: String,
    pub format: String,
    pub divers: String,
    pub sac: String,
    pub carton: String,
    pub palette: String,
}

// ============================================================================
// Template hint
// ============================================================================

/// Declared layout of a product sheet. Slug rules may override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateHint {
    #[default]
    Single,
    Double,
}

impl TemplateHint {
    /// `"double"` selects the two-column layout, anything else is single.
    pub fn from_declared(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()) {
            Some(s) if s == "double" => TemplateHint::Double,
            _ => TemplateHint::Single,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateHint::Single => "single",
            TemplateHint::Double => "double",
        }
    }
}

// ============================================================================
// Product record
// ============================================================================

/// Запись каталога. Создаётся один раз при загрузке и больше не меняется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Уникальный непустой идентификатор
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub category: Option<String>,

    /// Image du bloc haut
    pub image: Option<String>,
    /// Mise en situation en bas de page
    pub bottom_image: Option<String>,
    pub hero_image: Option<String>,

    pub specs: Vec<SpecRow>,
    pub variants: Vec<VariantRow>,
    pub template: TemplateHint,

    pub temperature: Option<String>,
    pub bottom_note: Option<String>,
    pub bottom_badge: Option<String>,
}

impl ProductRecord {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            subtitle: None,
            category: None,
            image: None,
            bottom_image: None,
            hero_image: None,
            specs: Vec::new(),
            variants: Vec::new(),
            template: TemplateHint::default(),
            temperature: None,
            bottom_note: None,
            bottom_badge: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.subtitle = Some(category.clone());
        self.category = Some(category);
        self
    }

    pub fn with_template(mut self, template: TemplateHint) -> Self {
        self.template = template;
        self
    }

    /// Slug in the form the dispatcher matches against.
    pub fn normalized_slug(&self) -> String {
        self.slug.trim().to_lowercase()
    }

    /// Category used for grouping: `category`, then `subtitle`, ignoring blanks.
    pub fn category_key(&self) -> Option<&str> {
        [self.category.as_deref(), self.subtitle.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }

    /// Visual used for the lower band of a sheet.
    pub fn lower_image(&self) -> Option<&str> {
        [self.bottom_image.as_deref(), self.hero_image.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
    }
}
