use std::collections::BTreeSet;

use crate::domain::entities::column::{column_def, ColumnKey, SortMode};
use crate::domain::entities::row::{CellValue, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Numeric columns sort descending on their first click, everything else ascending.
    pub fn first_for(mode: SortMode) -> Self {
        match mode {
            SortMode::Numeric => SortDirection::Desc,
            SortMode::Lexical | SortMode::Chronological => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: ColumnKey,
    pub direction: SortDirection,
}

pub type SortState = Option<SortSpec>;

/// Ids of groups whose children are shown.
pub type ExpandedGroups = BTreeSet<String>;

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: ColumnKey,
    pub label: &'static str,
    pub sorted: Option<SortDirection>,
    pub align: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupRow {
    pub id: String,
    pub column: ColumnKey,
    pub value: String,
    pub depth: usize,
    pub leaf_count: usize,
    /// Sums of the aggregated columns over every leaf in the group.
    pub aggregates: Vec<(ColumnKey, f64)>,
    pub expanded: bool,
}

impl GroupRow {
    pub fn aggregate(&self, key: ColumnKey) -> Option<f64> {
        self.aggregates
            .iter()
            .find(|(column, _)| *column == key)
            .map(|(_, sum)| *sum)
    }

    /// Aggregates as `Label: value`, each value formatted like its column's cells.
    pub fn aggregate_labels(&self) -> Vec<String> {
        self.aggregates
            .iter()
            .filter_map(|(key, sum)| {
                column_def(*key).map(|column| {
                    format!("{}: {}", column.label, column.format_cell(&CellValue::Number(*sum)))
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafRow {
    pub depth: usize,
    pub cells: Vec<String>,
    pub row: Row,
}

/// One line of the rendered table.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRow {
    Group(GroupRow),
    Leaf(LeafRow),
}

/// A group with its nested children, before flattening.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode {
    pub row: GroupRow,
    pub children: GroupChildren,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupChildren {
    Groups(Vec<GroupNode>),
    Rows(Vec<Row>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableModel {
    pub headers: Vec<HeaderCell>,
    pub groups: Vec<GroupNode>,
    pub rows: Vec<DisplayRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total_rows: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    /// One-based row range shown on this page, for the pagination label.
    pub fn display_range(&self) -> (usize, usize) {
        if self.rows.is_empty() {
            return (0, 0);
        }
        let start = self.page_index * self.page_size;
        (start + 1, start + self.rows.len())
    }
}
