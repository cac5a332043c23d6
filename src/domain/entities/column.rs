use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::domain::entities::row::CellValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnKey {
    Id,
    Name,
    Category,
    Subcategory,
    CreatedAt,
    UpdatedAt,
    Price,
    SalePrice,
}

impl ColumnKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKey::Id => "id",
            ColumnKey::Name => "name",
            ColumnKey::Category => "category",
            ColumnKey::Subcategory => "subcategory",
            ColumnKey::CreatedAt => "createdAt",
            ColumnKey::UpdatedAt => "updatedAt",
            ColumnKey::Price => "price",
            ColumnKey::SalePrice => "sale_price",
        }
    }
}

impl std::fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Plain,
    Currency,
    DateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Lexical,
    Numeric,
    Chronological,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: ColumnKey,
    pub label: &'static str,
    pub format: CellFormat,
    pub sort_mode: SortMode,
    /// Whether group rows carry a sum for this column.
    pub aggregated: bool,
}

impl ColumnDef {
    const fn new(key: ColumnKey, label: &'static str) -> Self {
        Self {
            key,
            label,
            format: CellFormat::Plain,
            sort_mode: SortMode::Lexical,
            aggregated: false,
        }
    }

    const fn sort(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    const fn format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    const fn summed(mut self) -> Self {
        self.aggregated = true;
        self
    }

    pub fn format_cell(&self, value: &CellValue) -> String {
        format_cell_value(self.format, value)
    }

    pub fn alignment(&self) -> &'static str {
        match self.sort_mode {
            SortMode::Numeric => "right",
            _ => "left",
        }
    }
}

pub const COLUMNS: [ColumnDef; 8] = [
    ColumnDef::new(ColumnKey::Id, "ID").sort(SortMode::Numeric),
    ColumnDef::new(ColumnKey::Name, "Name"),
    ColumnDef::new(ColumnKey::Category, "Category"),
    ColumnDef::new(ColumnKey::Subcategory, "Subcategory"),
    ColumnDef::new(ColumnKey::CreatedAt, "Created At")
        .sort(SortMode::Chronological)
        .format(CellFormat::DateTime),
    ColumnDef::new(ColumnKey::UpdatedAt, "Updated At")
        .sort(SortMode::Chronological)
        .format(CellFormat::DateTime),
    ColumnDef::new(ColumnKey::Price, "Price")
        .sort(SortMode::Numeric)
        .format(CellFormat::Currency)
        .summed(),
    ColumnDef::new(ColumnKey::SalePrice, "Sale Price")
        .sort(SortMode::Numeric)
        .format(CellFormat::Currency)
        .summed(),
];

pub const GROUPABLE_COLUMNS: [ColumnKey; 2] = [ColumnKey::Category, ColumnKey::Subcategory];

pub fn column_def(key: ColumnKey) -> Option<&'static ColumnDef> {
    COLUMNS.iter().find(|column| column.key == key)
}

pub fn format_cell_value(format: CellFormat, value: &CellValue) -> String {
    match format {
        CellFormat::Plain => value.to_display_string(),
        CellFormat::Currency => {
            if value.is_empty() {
                String::new()
            } else {
                format!("${}", value.to_display_string())
            }
        }
        CellFormat::DateTime => match parse_timestamp(value) {
            Some(ts) => ts.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
            None => "Invalid Date".to_string(),
        },
    }
}

/// Parses RFC 3339, `YYYY-MM-DD HH:MM:SS`, bare dates and epoch milliseconds.
pub fn parse_timestamp(value: &CellValue) -> Option<DateTime<FixedOffset>> {
    match value {
        CellValue::Number(ms) if ms.is_finite() => Utc
            .timestamp_millis_opt(*ms as i64)
            .single()
            .map(|ts| ts.fixed_offset()),
        CellValue::Text(text) => {
            let text = text.trim();
            if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
                return Some(ts);
            }
            ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .or_else(|| {
                    chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d")
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                })
                .map(|naive| naive.and_utc().fixed_offset())
        }
        _ => None,
    }
}
