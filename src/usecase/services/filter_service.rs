use crate::domain::entities::column::ColumnDef;
use crate::domain::entities::filter::FilterState;
use crate::domain::entities::row::Row;

/// Whether `row` passes both range gates and the search gate.
///
/// The search gate passes when any listed column's text contains the query,
/// ignoring case. An empty query always passes.
pub fn matches(row: &Row, filter: &FilterState, columns: &[ColumnDef]) -> bool {
    if !filter.price_range.contains(row.price()) {
        return false;
    }
    if !filter.sale_price_range.contains(row.sale_price()) {
        return false;
    }
    if filter.search_query.is_empty() {
        return true;
    }
    let query = filter.search_query.to_lowercase();
    columns.iter().any(|column| {
        row.get(column.key)
            .search_text()
            .is_some_and(|text| text.to_lowercase().contains(&query))
    })
}
