//! JSON schema Gemini must fill for an analysis.

use serde_json::{json, Map, Value};

/// Wire name and description of each analysis field, in report order.
pub const ANALYSIS_FIELDS: [(&str, &str); 12] = [
    ("manufacturer", "Компания производитель продукта"),
    ("country", "Страна производитель продукта"),
    (
        "chemicalNature",
        "Химическая природа ЛКМ (алкидная, масляная и пр.)",
    ),
    ("purpose", "Хозяйственное назначение"),
    ("mediumPolarity", "Полярность дисперсионной среды"),
    (
        "mediumChemicalNature",
        "Химическая природа дисперсионной среды",
    ),
    (
        "organobentoniteBrands",
        "Наиболее вероятные марки (бренды) органобентонита",
    ),
    ("bentoniteBaseType", "Вероятный тип бентонитовой основы"),
    ("bentoniteProperties", "Физико-химические свойства этой основы"),
    ("surfactantNature", "Вероятная химическая природа катионного ПАВ"),
    ("applicationNotes", "Особенности применения данного органобентонита"),
    (
        "organobentoniteManufacturers",
        "Компании и страны производители органобентонита",
    ),
];

/// OBJECT schema with every field a required STRING.
pub fn analysis_schema() -> Value {
    let mut properties = Map::new();
    for (name, description) in ANALYSIS_FIELDS {
        properties.insert(
            name.to_string(),
            json!({ "type": "STRING", "description": description }),
        );
    }
    let names: Vec<&str> = ANALYSIS_FIELDS.iter().map(|(name, _)| *name).collect();

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": names,
        "propertyOrdering": names,
    })
}
