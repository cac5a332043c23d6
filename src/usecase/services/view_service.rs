use crate::domain::entities::column::ColumnDef;
use crate::domain::entities::filter::FilterState;
use crate::domain::entities::row::{Dataset, DerivedView};
use crate::domain::entities::view::Page;
use crate::usecase::services::filter_service::matches;

/// Rows of `dataset` passing `filter`, in dataset order.
pub fn derive(dataset: &Dataset, filter: &FilterState, columns: &[ColumnDef]) -> DerivedView {
    let view: DerivedView = dataset
        .iter()
        .filter(|row| matches(row, filter, columns))
        .cloned()
        .collect();

    tracing::debug!(
        total = dataset.len(),
        matched = view.len(),
        query = %filter.search_query,
        "derived filtered view"
    );
    view
}

pub fn page_count(total_rows: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_rows.div_ceil(page_size).max(1)
}

/// Slices the displayed rows into one page. Out-of-range indices clamp to the last page.
pub fn paginate<T: Clone>(rows: &[T], page_size: usize, page_index: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let page_count = page_count(rows.len(), page_size);
    let page_index = page_index.min(page_count - 1);
    let start = (page_index * page_size).min(rows.len());
    let end = (start + page_size).min(rows.len());

    Page {
        rows: rows[start..end].to_vec(),
        page_index,
        page_count,
        page_size,
        total_rows: rows.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::column::COLUMNS;
    use crate::domain::entities::filter::Range;
    use crate::domain::entities::row::{CellValue, Row};
    use pretty_assertions::assert_eq;

    fn row(id: f64, name: &str, price: f64) -> Row {
        Row {
            id: CellValue::Number(id),
            name: name.into(),
            price: price.into(),
            sale_price: price.into(),
            ..Row::default()
        }
    }

    fn ids(view: &DerivedView) -> Vec<f64> {
        view.iter().map(|r| r.id.as_number()).collect()
    }

    #[test]
    fn derive_keeps_dataset_order() {
        let dataset = vec![
            row(3.0, "Lamp", 30.0),
            row(1.0, "Lamp shade", 10.0),
            row(2.0, "Table", 300.0),
            row(4.0, "Floor lamp", 90.0),
        ];
        let filter = FilterState {
            search_query: "lamp".to_string(),
            ..FilterState::default()
        };

        assert_eq!(ids(&derive(&dataset, &filter, &COLUMNS)), vec![3.0, 1.0, 4.0]);
    }

    #[test]
    fn derive_is_idempotent() {
        let dataset = vec![row(1.0, "A", 10.0), row(2.0, "B", 700.0)];
        let filter = FilterState {
            price_range: Range::new(0.0, 500.0),
            ..FilterState::default()
        };
        let first = derive(&dataset, &filter, &COLUMNS);
        let second = derive(&dataset, &filter, &COLUMNS);
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec![1.0]);
    }

    #[test]
    fn derive_of_empty_dataset_is_empty() {
        assert!(derive(&Vec::new(), &FilterState::default(), &COLUMNS).is_empty());
    }

    #[test]
    fn paginate_slices_requested_page() {
        let rows: Vec<u32> = (1..=7).collect();
        let page = paginate(&rows, 3, 1);
        assert_eq!(page.rows, vec![4, 5, 6]);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.total_rows, 7);
        assert_eq!(page.display_range(), (4, 6));
        assert!(page.has_previous());
        assert!(page.has_next());

        let last = paginate(&rows, 3, 2);
        assert_eq!(last.rows, vec![7]);
        assert!(!last.has_next());
    }

    #[test]
    fn paginate_clamps_out_of_range_index() {
        let rows: Vec<u32> = (1..=4).collect();
        let page = paginate(&rows, 2, 9);
        assert_eq!(page.page_index, 1);
        assert_eq!(page.rows, vec![3, 4]);
    }

    #[test]
    fn paginate_empty_rows_yields_single_empty_page() {
        let page = paginate::<u32>(&[], 10, 3);
        assert_eq!(page.page_index, 0);
        assert_eq!(page.page_count, 1);
        assert!(page.rows.is_empty());
        assert_eq!(page.display_range(), (0, 0));
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let rows = vec!['a', 'b'];
        let page = paginate(&rows, 0, 1);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.rows, vec!['b']);
    }
}
