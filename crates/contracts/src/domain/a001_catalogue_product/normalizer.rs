//! Приведение "сырых" JSON-записей к `ProductRecord`.
//!
//! The bundled data file is hand-edited, so every field is optional and
//! loosely typed: numbers and booleans are accepted wherever text is expected,
//! and a malformed list simply yields no rows. The only hard failures are
//! invalid JSON and a duplicated slug.

use super::aggregate::{ProductRecord, SpecRow, TemplateHint, VariantRow};
use crate::shared::error::CatalogueError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashSet;

const UNTITLED: &str = "(Sans titre)";
const EMPTY_CELL: &str = "-";

// ============================================================================
// Raw shapes
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProduct {
    #[serde(default, deserialize_with = "loose_text")]
    slug: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    category: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    image: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    hero_image: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    bottom_image: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    description: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    template: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    badges: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_list")]
    specs: Vec<RawSpec>,
    #[serde(default, deserialize_with = "lenient_list")]
    variants: Vec<RawVariant>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSpec {
    #[serde(default, deserialize_with = "loose_text")]
    label: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawVariant {
    #[serde(default, deserialize_with = "loose_text")]
    reference: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    libelle: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    format: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    matiere: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    cond: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    carton: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    palette: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    temperature: Option<String>,
}

fn value_text(value: Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_text))
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

// ============================================================================
// Public API
// ============================================================================

/// Parse the bundled catalogue file.
///
/// Accepts a bare array, `{ "products": [...] }` or `{ "items": [...] }`.
pub fn parse_products(json: &str) -> Result<Vec<ProductRecord>, CatalogueError> {
    let root: Value = serde_json::from_str(json)?;
    normalize(raw_entries(root))
}

fn raw_entries(root: Value) -> Vec<Value> {
    match root {
        Value::Array(items) => items,
        Value::Object(mut map) => match (map.remove("products"), map.remove("items")) {
            (Some(Value::Array(items)), _) | (_, Some(Value::Array(items))) => items,
            _ => {
                log::warn!("catalogue: object without a `products` or `items` array");
                Vec::new()
            }
        },
        _ => {
            log::warn!("catalogue: unexpected top-level JSON value");
            Vec::new()
        }
    }
}

fn normalize(entries: Vec<Value>) -> Result<Vec<ProductRecord>, CatalogueError> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(entries.len());

    for (position, entry) in entries.into_iter().enumerate() {
        let raw: RawProduct = match serde_json::from_value(entry) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("catalogue: skipping entry #{position}: {e}");
                continue;
            }
        };
        let Some(record) = to_record(raw) else {
            log::warn!("catalogue: skipping entry #{position} without slug");
            continue;
        };
        if !seen.insert(record.slug.clone()) {
            return Err(CatalogueError::DuplicateSlug(record.slug));
        }
        records.push(record);
    }

    log::info!("catalogue: {} products normalized", records.len());
    Ok(records)
}

fn to_record(raw: RawProduct) -> Option<ProductRecord> {
    let slug = raw.slug?;

    let mut specs: Vec<SpecRow> = raw
        .specs
        .iter()
        .filter_map(|row| {
            SpecRow::cleaned(
                row.label.as_deref().unwrap_or_default(),
                row.value.as_deref().unwrap_or_default(),
            )
        })
        .collect();
    specs.extend(summary_rows(&raw.variants));

    let temperature = raw.variants.first().and_then(|v| v.temperature.clone());
    let variants = raw.variants.iter().map(variant_row).collect();
    let bottom_badge = raw.badges.into_iter().find_map(value_text);

    Some(ProductRecord {
        slug,
        title: raw.name.unwrap_or_else(|| UNTITLED.to_string()),
        subtitle: raw.category.clone(),
        category: raw.category,
        image: raw.image,
        bottom_image: raw.bottom_image,
        hero_image: raw.hero_image,
        specs,
        variants,
        template: TemplateHint::from_declared(raw.template.as_deref()),
        temperature,
        bottom_note: raw.description,
        bottom_badge,
    })
}

/// Сводные строки по вариантам: количество и уникальные значения.
fn summary_rows(variants: &[RawVariant]) -> Vec<SpecRow> {
    if variants.is_empty() {
        return Vec::new();
    }

    let distinct = |pick: fn(&RawVariant) -> Option<&String>| {
        let mut values: Vec<&str> = Vec::new();
        for value in variants.iter().filter_map(pick) {
            if !values.contains(&value.as_str()) {
                values.push(value);
            }
        }
        values.join(", ")
    };

    let count = format!("{} disponibles", variants.len());
    let formats = distinct(|v| v.format.as_ref());
    let matieres = distinct(|v| v.matiere.as_ref());
    let conds = distinct(|v| v.cond.as_ref());
    let cartons = distinct(|v| v.carton.as_ref());

    [
        ("Références", count.as_str()),
        ("Formats", formats.as_str()),
        ("Matière", matieres.as_str()),
        ("Conditionnement", conds.as_str()),
        ("Carton", cartons.as_str()),
    ]
    .into_iter()
    .filter_map(|(label, value)| SpecRow::cleaned(label, value))
    .collect()
}

fn variant_row(v: &RawVariant) -> VariantRow {
    let divers = match (v.libelle.as_deref(), v.matiere.as_deref()) {
        (Some(libelle), Some(matiere)) => format!("{libelle} · {matiere}"),
        (Some(libelle), None) => libelle.to_string(),
        (None, Some(matiere)) => matiere.to_string(),
        (None, None) => String::new(),
    };
    let cell = |value: &Option<String>| value.clone().unwrap_or_else(|| EMPTY_CELL.to_string());

    VariantRow {
        reference: v.reference.clone().unwrap_or_default(),
        format: v.format.clone().unwrap_or_default(),
        divers,
        sac: cell(&v.cond),
        carton: cell(&v.carton),
        palette: cell(&v.palette),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "slug": "boites-pizza",
            "name": "Boîtes pizza",
            "category": "Vente à emporter",
            "template": "double",
            "description": "Carton kraft brun",
            "badges": ["", "Compostable"],
            "variants": [
                { "reference": "PIZ-26", "libelle": "Boîte", "format": "26 cm", "matiere": "Kraft", "cond": "", "carton": 100, "temperature": "-20°C / +70°C" },
                { "reference": "PIZ-33", "format": "33 cm", "matiere": "Kraft", "carton": "100", "palette": 20 }
            ]
        },
        {
            "slug": "gobelets-carton",
            "category": "  ",
            "specs": [ { "label": "Volume", "value": "25 cl" }, { "label": "Vide", "value": " " } ]
        }
    ]"#;

    #[test]
    fn test_parse_maps_fields() {
        let records = parse_products(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);

        let pizza = &records[0];
        assert_eq!(pizza.slug, "boites-pizza");
        assert_eq!(pizza.title, "Boîtes pizza");
        assert_eq!(pizza.category.as_deref(), Some("Vente à emporter"));
        assert_eq!(pizza.subtitle.as_deref(), Some("Vente à emporter"));
        assert_eq!(pizza.template, TemplateHint::Double);
        assert_eq!(pizza.temperature.as_deref(), Some("-20°C / +70°C"));
        assert_eq!(pizza.bottom_note.as_deref(), Some("Carton kraft brun"));
        assert_eq!(pizza.bottom_badge.as_deref(), Some("Compostable"));

        let untitled = &records[1];
        assert_eq!(untitled.title, UNTITLED);
        assert_eq!(untitled.category, None);
        assert_eq!(untitled.template, TemplateHint::Single);
    }

    #[test]
    fn test_summary_rows_from_variants() {
        let records = parse_products(SAMPLE).unwrap();
        let labels: Vec<(&str, &str)> = records[0]
            .specs
            .iter()
            .map(|r| (r.label.as_str(), r.value.as_str()))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Références", "2 disponibles"),
                ("Formats", "26 cm, 33 cm"),
                ("Matière", "Kraft"),
                ("Carton", "100"),
            ]
        );
    }

    #[test]
    fn test_explicit_specs_drop_blank_rows() {
        let records = parse_products(SAMPLE).unwrap();
        assert_eq!(
            records[1].specs,
            vec![SpecRow {
                label: "Volume".to_string(),
                value: "25 cl".to_string()
            }]
        );
    }

    #[test]
    fn test_variant_rows() {
        let records = parse_products(SAMPLE).unwrap();
        let rows = &records[0].variants;
        assert_eq!(rows[0].divers, "Boîte · Kraft");
        assert_eq!(rows[0].sac, "-");
        assert_eq!(rows[0].carton, "100");
        assert_eq!(rows[0].palette, "-");
        assert_eq!(rows[1].divers, "Kraft");
        assert_eq!(rows[1].palette, "20");
    }

    #[test]
    fn test_wrapped_shapes() {
        let wrapped = r#"{ "products": [ { "slug": "a" } ] }"#;
        assert_eq!(parse_products(wrapped).unwrap().len(), 1);

        let items = r#"{ "items": [ { "slug": "a" }, { "slug": "b" } ] }"#;
        assert_eq!(parse_products(items).unwrap().len(), 2);

        let other = r#"{ "catalogue": [] }"#;
        assert!(parse_products(other).unwrap().is_empty());

        assert!(parse_products("42").unwrap().is_empty());
    }

    #[test]
    fn test_items_used_when_products_is_not_an_array() {
        let json = r#"{ "products": null, "items": [ { "slug": "a" } ] }"#;
        let records = parse_products(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug, "a");

        let json = r#"{ "products": { "slug": "x" }, "items": [ { "slug": "b" } ] }"#;
        assert_eq!(parse_products(json).unwrap()[0].slug, "b");

        // products wins when both are arrays
        let json = r#"{ "products": [ { "slug": "p" } ], "items": [ { "slug": "i" } ] }"#;
        assert_eq!(parse_products(json).unwrap()[0].slug, "p");
    }

    #[test]
    fn test_entries_without_slug_are_skipped() {
        let json = r#"[ { "name": "Sans slug" }, { "slug": "   " }, "texte", { "slug": "ok" } ]"#;
        let records = parse_products(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug, "ok");
    }

    #[test]
    fn test_lenient_lists() {
        let json = r#"[ { "slug": "a", "variants": "n/a", "badges": { "x": 1 }, "specs": [ 1, { "label": "L", "value": 2 } ] } ]"#;
        let records = parse_products(json).unwrap();
        assert!(records[0].variants.is_empty());
        assert_eq!(records[0].bottom_badge, None);
        assert_eq!(records[0].specs.len(), 1);
        assert_eq!(records[0].specs[0].value, "2");
    }

    #[test]
    fn test_duplicate_slug_is_an_error() {
        let json = r#"[ { "slug": "pailles" }, { "slug": " pailles " } ]"#;
        let err = parse_products(json).unwrap_err();
        assert!(matches!(err, CatalogueError::DuplicateSlug(ref s) if s == "pailles"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            parse_products("[ { \"slug\": "),
            Err(CatalogueError::Json(_))
        ));
    }
}
