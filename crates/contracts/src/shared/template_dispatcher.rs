//! Template dispatch: `ProductRecord` -> `TemplateVariant`.
//!
//! Priority, first match wins:
//! 1. substring rules on the normalized slug, in table order;
//! 2. exact-slug table (legacy names);
//! 3. the declared `template` field.
//!
//! Dispatch never fails. Missing images are resolved per variant by
//! [`SheetAssets::resolve`].

use crate::domain::a001_catalogue_product::{ProductRecord, TemplateHint};
use crate::enums::TemplateVariant;
use once_cell::sync::Lazy;

/// Порядок важен: "kits-couverts" проверяется раньше "film" и т.д.
const SUBSTRING_RULES: &[(&str, TemplateVariant)] = &[
    ("kits-couverts", TemplateVariant::KitsCouverts),
    ("xps", TemplateVariant::BoitesXps),
    ("pizza", TemplateVariant::BoitesPizza),
    ("paille", TemplateVariant::Pailles),
    ("film", TemplateVariant::FilmEtirable),
];

const EXACT_SLUG_RULES: &[(&str, TemplateVariant)] = &[
    ("kits-couverts-bois-et-papier", TemplateVariant::KitsCouverts),
    ("boites-economiques-xps", TemplateVariant::BoitesXps),
    ("boites-pizza", TemplateVariant::BoitesPizza),
    ("pailles", TemplateVariant::Pailles),
    ("film-etirable", TemplateVariant::FilmEtirable),
];

/// Точечные настройки листа по slug
const SHEET_FLAGS: &[(&str, SheetFlags)] = &[(
    "kits-couverts-bois-et-papier",
    SheetFlags {
        hide_top_image: true,
        hide_bottom_image: false,
    },
)];

static STANDARD: Lazy<TemplateDispatcher> = Lazy::new(TemplateDispatcher::standard);

/// Which stage of the dispatch produced the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchSource {
    Substring,
    ExactSlug,
    Declared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugRule {
    pub pattern: String,
    pub variant: TemplateVariant,
}

impl SlugRule {
    pub fn new(pattern: &str, variant: TemplateVariant) -> Self {
        Self {
            pattern: pattern.trim().to_lowercase(),
            variant,
        }
    }
}

/// Ordered rule tables. Substring rules always run before exact ones.
#[derive(Debug, Clone)]
pub struct TemplateDispatcher {
    substring_rules: Vec<SlugRule>,
    exact_rules: Vec<SlugRule>,
}

impl TemplateDispatcher {
    pub fn new(substring_rules: Vec<SlugRule>, exact_rules: Vec<SlugRule>) -> Self {
        Self {
            substring_rules,
            exact_rules,
        }
    }

    /// The catalogue's own rule tables.
    pub fn standard() -> Self {
        let table = |rules: &[(&str, TemplateVariant)]| -> Vec<SlugRule> {
            rules
                .iter()
                .map(|(pattern, variant)| SlugRule::new(pattern, *variant))
                .collect()
        };
        Self::new(table(SUBSTRING_RULES), table(EXACT_SLUG_RULES))
    }

    pub fn substring_rules(&self) -> &[SlugRule] {
        &self.substring_rules
    }

    pub fn exact_rules(&self) -> &[SlugRule] {
        &self.exact_rules
    }

    pub fn dispatch(&self, record: &ProductRecord) -> TemplateVariant {
        self.dispatch_with_source(record).0
    }

    pub fn dispatch_with_source(&self, record: &ProductRecord) -> (TemplateVariant, DispatchSource) {
        let slug = record.normalized_slug();

        if !slug.is_empty() {
            if let Some(rule) = self
                .substring_rules
                .iter()
                .find(|rule| slug.contains(rule.pattern.as_str()))
            {
                return (rule.variant, DispatchSource::Substring);
            }
            if let Some(rule) = self.exact_rules.iter().find(|rule| rule.pattern == slug) {
                return (rule.variant, DispatchSource::ExactSlug);
            }
        }

        let variant = match record.template {
            TemplateHint::Double => TemplateVariant::StandardDouble,
            TemplateHint::Single => TemplateVariant::StandardSingle,
        };
        (variant, DispatchSource::Declared)
    }
}

impl Default for TemplateDispatcher {
    fn default() -> Self {
        Self::standard()
    }
}

/// Dispatch with the standard tables.
pub fn dispatch(record: &ProductRecord) -> TemplateVariant {
    STANDARD.dispatch(record)
}

/// Per-slug switches that suppress a sheet image, placeholder included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SheetFlags {
    pub hide_top_image: bool,
    pub hide_bottom_image: bool,
}

impl SheetFlags {
    /// Exact match on the normalized slug; unknown slugs hide nothing.
    pub fn for_slug(slug: &str) -> Self {
        let slug = slug.trim().to_lowercase();
        SHEET_FLAGS
            .iter()
            .find(|(pattern, _)| *pattern == slug)
            .map(|(_, flags)| *flags)
            .unwrap_or_default()
    }
}

/// Images a sheet actually shows, after placeholder fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetAssets {
    pub image: Option<String>,
    pub bottom_image: Option<String>,
}

impl SheetAssets {
    pub fn resolve(variant: TemplateVariant, record: &ProductRecord) -> Self {
        let flags = SheetFlags::for_slug(&record.slug);
        let assets = Self::with_fallback(variant, record);
        Self {
            image: assets.image.filter(|_| !flags.hide_top_image),
            bottom_image: assets.bottom_image.filter(|_| !flags.hide_bottom_image),
        }
    }

    fn with_fallback(variant: TemplateVariant, record: &ProductRecord) -> Self {
        let image = record
            .image
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(variant.default_image())
            .map(str::to_string);
        let bottom_image = record
            .lower_image()
            .or(variant.default_bottom_image())
            .map(str::to_string);
        Self {
            image,
            bottom_image,
        }
    }
}
