//! Sorting, grouping and flattening of the derived view into display rows.

use std::cmp::Ordering;

use crate::domain::entities::column::{column_def, parse_timestamp, ColumnDef, ColumnKey, SortMode};
use crate::domain::entities::grouping::GroupingSelection;
use crate::domain::entities::row::{CellValue, Row};
use crate::domain::entities::view::{
    DisplayRow, ExpandedGroups, GroupChildren, GroupNode, GroupRow, HeaderCell, LeafRow,
    SortDirection, SortSpec, SortState, TableModel,
};

/// Next sort state after clicking the header of `column`:
/// unsorted, then the column's first direction, then the opposite one, then unsorted.
pub fn toggle_sort(current: SortState, column: &ColumnDef) -> SortState {
    let first = SortDirection::first_for(column.sort_mode);
    match current {
        Some(spec) if spec.column == column.key => {
            if spec.direction == first {
                Some(SortSpec {
                    column: column.key,
                    direction: first.reversed(),
                })
            } else {
                None
            }
        }
        _ => Some(SortSpec {
            column: column.key,
            direction: first,
        }),
    }
}

pub fn compare_cells(mode: SortMode, a: &CellValue, b: &CellValue) -> Ordering {
    match mode {
        SortMode::Numeric => a.as_number().total_cmp(&b.as_number()),
        SortMode::Chronological => parse_timestamp(a).cmp(&parse_timestamp(b)),
        SortMode::Lexical => {
            let (a, b) = (a.to_display_string(), b.to_display_string());
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(&b))
        }
    }
}

/// Builds headers, the group tree and the flattened display rows.
pub fn build_table(
    columns: &[ColumnDef],
    view: &[Row],
    sort: SortState,
    grouping: &GroupingSelection,
    expanded: &ExpandedGroups,
) -> TableModel {
    let headers = columns
        .iter()
        .map(|column| HeaderCell {
            key: column.key,
            label: column.label,
            sorted: sort
                .filter(|spec| spec.column == column.key)
                .map(|spec| spec.direction),
            align: column.alignment(),
        })
        .collect();

    let mut leaves = view.to_vec();
    sort_rows(&mut leaves, sort);

    if grouping.is_empty() {
        let rows = leaves
            .into_iter()
            .map(|row| DisplayRow::Leaf(leaf_row(columns, row, 0)))
            .collect();
        return TableModel {
            headers,
            groups: Vec::new(),
            rows,
        };
    }

    let mut groups = group_rows(columns, leaves, grouping.keys(), "", 0, expanded);
    sort_groups(&mut groups, sort);

    let mut rows = Vec::new();
    flatten_groups(columns, &groups, &mut rows);

    TableModel {
        headers,
        groups,
        rows,
    }
}

fn sort_rows(rows: &mut [Row], sort: SortState) {
    let Some(spec) = sort else {
        return;
    };
    let Some(column) = column_def(spec.column) else {
        return;
    };
    rows.sort_by(|a, b| {
        let ord = compare_cells(column.sort_mode, a.get(spec.column), b.get(spec.column));
        match spec.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

fn group_rows(
    columns: &[ColumnDef],
    rows: Vec<Row>,
    keys: &[ColumnKey],
    parent_id: &str,
    depth: usize,
    expanded: &ExpandedGroups,
) -> Vec<GroupNode> {
    let Some((&key, rest)) = keys.split_first() else {
        return Vec::new();
    };

    let mut buckets: Vec<(String, Vec<Row>)> = Vec::new();
    for row in rows {
        let value = row.get(key).to_display_string();
        match buckets.iter_mut().find(|(existing, _)| *existing == value) {
            Some((_, bucket)) => bucket.push(row),
            None => buckets.push((value, vec![row])),
        }
    }

    buckets
        .into_iter()
        .map(|(value, bucket)| {
            let segment = format!("{key}={}", escape_id_segment(&value));
            let id = if parent_id.is_empty() {
                segment
            } else {
                format!("{parent_id}/{segment}")
            };
            let aggregates = columns
                .iter()
                .filter(|column| column.aggregated)
                .map(|column| {
                    let sum = bucket.iter().map(|row| row.get(column.key).as_number()).sum::<f64>();
                    (column.key, sum)
                })
                .collect();
            let row = GroupRow {
                expanded: expanded.contains(&id),
                id: id.clone(),
                column: key,
                value,
                depth,
                leaf_count: bucket.len(),
                aggregates,
            };
            let children = if rest.is_empty() {
                GroupChildren::Rows(bucket)
            } else {
                GroupChildren::Groups(group_rows(
                    columns,
                    bucket,
                    rest,
                    &id,
                    depth + 1,
                    expanded,
                ))
            };
            GroupNode { row, children }
        })
        .collect()
}

/// Group ids join `column=value` segments with `/`, so those characters are escaped in values.
fn escape_id_segment(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('/', "%2F")
        .replace('=', "%3D")
}

/// Orders groups by their own value when sorting on the grouping column, and by the
/// group sum when sorting on an aggregated column. Under any other sort, groups stay in
/// the order their first leaf appears in the sorted rows.
fn sort_groups(groups: &mut [GroupNode], sort: SortState) {
    let Some(spec) = sort else {
        return;
    };
    let Some(column) = column_def(spec.column) else {
        return;
    };
    let Some(first) = groups.first() else {
        return;
    };

    let ordered = if first.row.column == spec.column {
        groups.sort_by(|a, b| {
            compare_cells(
                column.sort_mode,
                &CellValue::Text(a.row.value.clone()),
                &CellValue::Text(b.row.value.clone()),
            )
        });
        true
    } else if column.aggregated {
        groups.sort_by(|a, b| {
            let a = a.row.aggregate(spec.column).unwrap_or_default();
            let b = b.row.aggregate(spec.column).unwrap_or_default();
            a.total_cmp(&b)
        });
        true
    } else {
        false
    };
    if ordered && spec.direction == SortDirection::Desc {
        groups.reverse();
    }

    for group in groups.iter_mut() {
        if let GroupChildren::Groups(children) = &mut group.children {
            sort_groups(children, sort);
        }
    }
}

fn flatten_groups(columns: &[ColumnDef], groups: &[GroupNode], out: &mut Vec<DisplayRow>) {
    for group in groups {
        out.push(DisplayRow::Group(group.row.clone()));
        if !group.row.expanded {
            continue;
        }
        match &group.children {
            GroupChildren::Groups(children) => flatten_groups(columns, children, out),
            GroupChildren::Rows(rows) => out.extend(
                rows.iter()
                    .map(|row| DisplayRow::Leaf(leaf_row(columns, row.clone(), group.row.depth + 1))),
            ),
        }
    }
}

fn leaf_row(columns: &[ColumnDef], row: Row, depth: usize) -> LeafRow {
    let cells = columns
        .iter()
        .map(|column| column.format_cell(row.get(column.key)))
        .collect();
    LeafRow { depth, cells, row }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::column::COLUMNS;
    use pretty_assertions::assert_eq;

    fn row(id: f64, name: &str, category: &str, subcategory: &str, price: f64) -> Row {
        Row {
            id: CellValue::Number(id),
            name: name.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            price: price.into(),
            sale_price: (price / 2.0).into(),
            ..Row::default()
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row(1.0, "chair", "Furniture", "Seating", 50.0),
            row(2.0, "Lamp", "Lighting", "Desk", 30.0),
            row(3.0, "Desk", "Furniture", "Tables", 200.0),
            row(4.0, "Bulb", "Lighting", "Parts", 5.0),
        ]
    }

    fn leaf_ids(model: &TableModel) -> Vec<f64> {
        model
            .rows
            .iter()
            .filter_map(|r| match r {
                DisplayRow::Leaf(leaf) => Some(leaf.row.id.as_number()),
                DisplayRow::Group(_) => None,
            })
            .collect()
    }

    fn group_values(model: &TableModel) -> Vec<String> {
        model
            .rows
            .iter()
            .filter_map(|r| match r {
                DisplayRow::Group(group) => Some(group.value.clone()),
                DisplayRow::Leaf(_) => None,
            })
            .collect()
    }

    fn price_column() -> ColumnDef {
        *column_def(ColumnKey::Price).expect("price column")
    }

    #[test]
    fn toggle_sort_cycles_numeric_desc_first() {
        let price = price_column();
        let first = toggle_sort(None, &price);
        assert_eq!(
            first,
            Some(SortSpec {
                column: ColumnKey::Price,
                direction: SortDirection::Desc
            })
        );
        let second = toggle_sort(first, &price);
        assert_eq!(second.map(|s| s.direction), Some(SortDirection::Asc));
        assert_eq!(toggle_sort(second, &price), None);
    }

    #[test]
    fn toggle_sort_on_other_column_restarts_cycle() {
        let name = *column_def(ColumnKey::Name).expect("name column");
        let sorted_by_price = toggle_sort(None, &price_column());
        assert_eq!(
            toggle_sort(sorted_by_price, &name),
            Some(SortSpec {
                column: ColumnKey::Name,
                direction: SortDirection::Asc
            })
        );
    }

    #[test]
    fn ungrouped_table_lists_leaves_with_formatted_cells() {
        let model = build_table(
            &COLUMNS,
            &sample(),
            None,
            &GroupingSelection::default(),
            &ExpandedGroups::new(),
        );

        assert_eq!(model.headers.len(), 8);
        assert_eq!(model.headers[6].label, "Price");
        assert_eq!(leaf_ids(&model), vec![1.0, 2.0, 3.0, 4.0]);
        let DisplayRow::Leaf(first) = &model.rows[0] else {
            panic!("expected leaf row");
        };
        assert_eq!(first.cells[1], "chair");
        assert_eq!(first.cells[6], "$50");
        assert_eq!(first.cells[7], "$25");
    }

    #[test]
    fn lexical_sort_ignores_case() {
        let sort = Some(SortSpec {
            column: ColumnKey::Name,
            direction: SortDirection::Asc,
        });
        let model = build_table(
            &COLUMNS,
            &sample(),
            sort,
            &GroupingSelection::default(),
            &ExpandedGroups::new(),
        );
        assert_eq!(leaf_ids(&model), vec![4.0, 1.0, 3.0, 2.0]);
        assert_eq!(model.headers[1].sorted, Some(SortDirection::Asc));
        assert_eq!(model.headers[0].sorted, None);
    }

    #[test]
    fn numeric_sort_descending() {
        let sort = Some(SortSpec {
            column: ColumnKey::Price,
            direction: SortDirection::Desc,
        });
        let model = build_table(
            &COLUMNS,
            &sample(),
            sort,
            &GroupingSelection::default(),
            &ExpandedGroups::new(),
        );
        assert_eq!(leaf_ids(&model), vec![3.0, 1.0, 2.0, 4.0]);
    }

    #[test]
    fn chronological_sort_uses_parsed_time() {
        let mut rows = sample();
        rows[0].created_at = "2024-03-01T00:00:00Z".into();
        rows[1].created_at = "2023-12-31 23:59:59".into();
        rows[2].created_at = "2024-01-15".into();
        rows[3].created_at = "not a date".into();
        let sort = Some(SortSpec {
            column: ColumnKey::CreatedAt,
            direction: SortDirection::Asc,
        });
        let model = build_table(
            &COLUMNS,
            &rows,
            sort,
            &GroupingSelection::default(),
            &ExpandedGroups::new(),
        );
        assert_eq!(leaf_ids(&model), vec![4.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn collapsed_groups_show_only_headers_with_aggregates() {
        let grouping = GroupingSelection::new([ColumnKey::Category]);
        let model = build_table(&COLUMNS, &sample(), None, &grouping, &ExpandedGroups::new());

        assert_eq!(group_values(&model), vec!["Furniture", "Lighting"]);
        assert!(leaf_ids(&model).is_empty());
        let DisplayRow::Group(furniture) = &model.rows[0] else {
            panic!("expected group row");
        };
        assert_eq!(furniture.id, "category=Furniture");
        assert_eq!(furniture.leaf_count, 2);
        assert_eq!(furniture.aggregate(ColumnKey::Price), Some(250.0));
        assert_eq!(furniture.aggregate(ColumnKey::SalePrice), Some(125.0));
        assert_eq!(furniture.aggregate(ColumnKey::Name), None);
    }

    #[test]
    fn expanded_group_lists_children_after_header() {
        let grouping = GroupingSelection::new([ColumnKey::Category]);
        let expanded: ExpandedGroups = ["category=Lighting".to_string()].into_iter().collect();
        let model = build_table(&COLUMNS, &sample(), None, &grouping, &expanded);

        assert_eq!(model.rows.len(), 4);
        assert_eq!(leaf_ids(&model), vec![2.0, 4.0]);
        assert!(matches!(&model.rows[2], DisplayRow::Leaf(leaf) if leaf.depth == 1));
    }

    #[test]
    fn nested_groups_follow_selection_order() {
        let grouping = GroupingSelection::new([ColumnKey::Category, ColumnKey::Subcategory]);
        let expanded: ExpandedGroups = [
            "category=Furniture".to_string(),
            "category=Furniture/subcategory=Tables".to_string(),
        ]
        .into_iter()
        .collect();
        let model = build_table(&COLUMNS, &sample(), None, &grouping, &expanded);

        assert_eq!(
            group_values(&model),
            vec!["Furniture", "Seating", "Tables", "Lighting"]
        );
        assert_eq!(leaf_ids(&model), vec![3.0]);
        let depths: Vec<usize> = model
            .rows
            .iter()
            .map(|r| match r {
                DisplayRow::Group(group) => group.depth,
                DisplayRow::Leaf(leaf) => leaf.depth,
            })
            .collect();
        assert_eq!(depths, vec![0, 1, 1, 2, 0]);
    }

    #[test]
    fn group_ids_stay_distinct_when_values_contain_separators() {
        let rows = vec![
            row(1.0, "a", "A", "B", 10.0),
            row(2.0, "b", "A/subcategory=B", "B", 20.0),
        ];
        let grouping = GroupingSelection::new([ColumnKey::Category, ColumnKey::Subcategory]);
        let expanded: ExpandedGroups = ["category=A".to_string()].into_iter().collect();
        let model = build_table(&COLUMNS, &rows, None, &grouping, &expanded);

        let ids: Vec<&str> = model
            .rows
            .iter()
            .filter_map(|r| match r {
                DisplayRow::Group(group) => Some(group.id.as_str()),
                DisplayRow::Leaf(_) => None,
            })
            .collect();
        assert_eq!(
            ids,
            vec![
                "category=A",
                "category=A/subcategory=B",
                "category=A%2Fsubcategory%3DB",
            ]
        );
        assert_eq!(group_values(&model)[2], "A/subcategory=B");
    }

    #[test]
    fn groups_sort_by_value_or_aggregate() {
        let grouping = GroupingSelection::new([ColumnKey::Category]);
        let by_category = Some(SortSpec {
            column: ColumnKey::Category,
            direction: SortDirection::Desc,
        });
        let model = build_table(&COLUMNS, &sample(), by_category, &grouping, &ExpandedGroups::new());
        assert_eq!(group_values(&model), vec!["Lighting", "Furniture"]);

        let by_price = Some(SortSpec {
            column: ColumnKey::Price,
            direction: SortDirection::Asc,
        });
        let model = build_table(&COLUMNS, &sample(), by_price, &grouping, &ExpandedGroups::new());
        assert_eq!(group_values(&model), vec!["Lighting", "Furniture"]);

        let by_name = Some(SortSpec {
            column: ColumnKey::Name,
            direction: SortDirection::Desc,
        });
        let model = build_table(&COLUMNS, &sample(), by_name, &grouping, &ExpandedGroups::new());
        // "Lamp" leads the descending name order, so Lighting appears first.
        assert_eq!(group_values(&model), vec!["Lighting", "Furniture"]);
    }
}
