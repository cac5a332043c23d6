use crate::domain::entities::column::{column_def, ColumnKey};
use crate::domain::entities::filter::{FilterState, Range};
use crate::domain::entities::grouping::{clear_grouping, toggle_group, GroupingSelection};
use crate::domain::entities::view::{ExpandedGroups, SortState};
use crate::usecase::services::table_service::toggle_sort;
use crate::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// Everything the user can change about the grid, held by the root component.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSession {
    pub filter: FilterState,
    pub grouping: GroupingSelection,
    pub sort: SortState,
    pub expanded: ExpandedGroups,
    pub page_size: usize,
    pub page_index: usize,
    pub drawer_open: bool,
    pub group_menu_open: bool,
}

impl Default for GridSession {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl GridSession {
    pub fn with_page_size(page_size: usize) -> Self {
        let page_size = if PAGE_SIZE_OPTIONS.contains(&page_size) {
            page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self {
            filter: FilterState::default(),
            grouping: GroupingSelection::default(),
            sort: None,
            expanded: ExpandedGroups::new(),
            page_size,
            page_index: 0,
            drawer_open: false,
            group_menu_open: false,
        }
    }

    pub fn set_search(&mut self, query: String) {
        self.filter.search_query = query;
    }

    pub fn set_price_range(&mut self, range: Range) {
        self.filter.price_range = range.normalized();
    }

    pub fn set_sale_price_range(&mut self, range: Range) {
        self.filter.sale_price_range = range.normalized();
    }

    /// Toggles a grouping key and closes the group-by menu.
    pub fn toggle_group(&mut self, key: ColumnKey) {
        self.grouping = toggle_group(&self.grouping, key);
        self.group_menu_open = false;
    }

    pub fn clear_grouping(&mut self) {
        self.grouping = clear_grouping(&self.grouping);
    }

    pub fn toggle_sort(&mut self, key: ColumnKey) {
        if let Some(column) = column_def(key) {
            self.sort = toggle_sort(self.sort, column);
        }
    }

    pub fn toggle_expanded(&mut self, group_id: &str) {
        if !self.expanded.remove(group_id) {
            self.expanded.insert(group_id.to_string());
        }
    }

    /// Ignores sizes outside the offered options.
    pub fn set_page_size(&mut self, page_size: usize) {
        if PAGE_SIZE_OPTIONS.contains(&page_size) {
            self.page_size = page_size;
            self.page_index = 0;
        }
    }

    pub fn set_page_index(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
        if !self.drawer_open {
            self.group_menu_open = false;
        }
    }

    pub fn toggle_group_menu(&mut self) {
        self.group_menu_open = !self.group_menu_open;
    }
}
