use serde::{Deserialize, Deserializer};

use crate::domain::entities::column::ColumnKey;

/// A single cell as it arrived in the dataset document.
///
/// Conversions out of a cell are total: missing or malformed numbers read as `0.0`
/// and missing text reads as an empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    pub fn as_number(&self) -> f64 {
        match self {
            CellValue::Number(v) if v.is_finite() => *v,
            CellValue::Text(v) => parse_f64(v),
            CellValue::Bool(true) => 1.0,
            _ => 0.0,
        }
    }

    /// String form used by the search gate. Falsy cells (empty, `0`, `false`, `""`)
    /// have no searchable text.
    pub fn search_text(&self) -> Option<String> {
        match self {
            CellValue::Empty | CellValue::Bool(false) => None,
            CellValue::Number(v) if *v == 0.0 || v.is_nan() => None,
            CellValue::Text(v) if v.is_empty() => None,
            _ => Some(self.to_display_string()),
        }
    }

    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(v) => v.clone(),
            CellValue::Number(v) => format!("{v}"),
            CellValue::Bool(v) => v.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Empty,
            serde_json::Value::Bool(v) => CellValue::Bool(v),
            serde_json::Value::Number(v) => v.as_f64().map(CellValue::Number).unwrap_or_default(),
            serde_json::Value::String(v) => CellValue::Text(v),
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(CellValue::from)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Row {
    pub id: CellValue,
    pub name: CellValue,
    pub category: CellValue,
    pub subcategory: CellValue,
    #[serde(rename = "createdAt")]
    pub created_at: CellValue,
    #[serde(rename = "updatedAt")]
    pub updated_at: CellValue,
    pub price: CellValue,
    pub sale_price: CellValue,
}

impl Row {
    pub fn get(&self, key: ColumnKey) -> &CellValue {
        match key {
            ColumnKey::Id => &self.id,
            ColumnKey::Name => &self.name,
            ColumnKey::Category => &self.category,
            ColumnKey::Subcategory => &self.subcategory,
            ColumnKey::CreatedAt => &self.created_at,
            ColumnKey::UpdatedAt => &self.updated_at,
            ColumnKey::Price => &self.price,
            ColumnKey::SalePrice => &self.sale_price,
        }
    }

    pub fn price(&self) -> f64 {
        self.price.as_number()
    }

    pub fn sale_price(&self) -> f64 {
        self.sale_price.as_number()
    }
}

pub type Dataset = Vec<Row>;

pub type DerivedView = Vec<Row>;

/// Whole-string numeric parse. Anything else, including grouped digits like `1,250`, is `0.0`.
pub fn parse_f64(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => 0.0,
    }
}
