use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::column::{column_def, COLUMNS, GROUPABLE_COLUMNS};
use crate::domain::entities::filter::{Range, RANGE_MAX, RANGE_MIN};
use crate::domain::entities::view::{DisplayRow, GroupRow, LeafRow, SortDirection};
use crate::infra::source::platform::platform_source;
use crate::ui::state::app_state::AppState;
use crate::ui::state::session::GridSession;
use crate::usecase::services::dataset_store::DatasetStore;
use crate::usecase::services::table_service::build_table;
use crate::usecase::services::view_service::{derive, paginate};
use crate::PAGE_SIZE_OPTIONS;

fn table_container_style() -> &'static str {
    "overflow: auto; max-height: 70vh; border: 1px solid #ddd; border-radius: 6px;"
}

fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; background: #f6f6f6; border: 1px solid #bbb; padding: 6px; cursor: pointer; user-select: none; white-space: nowrap;"
}

fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => "",
    }
}

#[component]
fn RangeSlider(label: &'static str, range: Range, on_change: EventHandler<Range>) -> Element {
    let min_text = range.min.to_string();
    let max_text = range.max.to_string();
    let lower = RANGE_MIN.to_string();
    let upper = RANGE_MAX.to_string();

    rsx! {
        h3 { style: "margin: 16px 0 4px; font-size: 15px;", "{label}" }
        div { style: "display: flex; flex-direction: column; gap: 4px;",
            input {
                r#type: "range",
                min: "{lower}",
                max: "{upper}",
                value: "{min_text}",
                oninput: move |event| {
                    if let Ok(value) = event.value().parse::<f64>() {
                        on_change.call(Range::new(value, range.max));
                    }
                }
            }
            input {
                r#type: "range",
                min: "{lower}",
                max: "{upper}",
                value: "{max_text}",
                oninput: move |event| {
                    if let Ok(value) = event.value().parse::<f64>() {
                        on_change.call(Range::new(range.min, value));
                    }
                }
            }
            span { style: "color: #555; font-size: 13px;", "{min_text} – {max_text}" }
        }
    }
}

#[component]
fn GroupRowView(group: GroupRow, mut session: Signal<GridSession>) -> Element {
    let indent = group.depth * 18 + 6;
    let label = column_def(group.column)
        .map(|column| column.label)
        .unwrap_or_default();
    let toggle = if group.expanded { "▾" } else { "▸" };
    let aggregates = group.aggregate_labels().join("  ·  ");
    let group_id = group.id.clone();
    let span = COLUMNS.len();

    rsx! {
        tr { style: "background: #f3f6fb;",
            td {
                colspan: "{span}",
                style: "border: 1px solid #bbb; padding: 4px 6px 4px {indent}px;",
                button {
                    style: "border: none; background: transparent; cursor: pointer; width: 24px;",
                    onclick: move |_| session.write().toggle_expanded(&group_id),
                    "{toggle}"
                }
                strong { "{label}: {group.value}" }
                span { style: "color: #666; margin-left: 6px;", "({group.leaf_count})" }
                span { style: "color: #666; margin-left: 16px;", "{aggregates}" }
            }
        }
    }
}

#[component]
fn LeafRowView(leaf: LeafRow) -> Element {
    let indent = leaf.depth * 18 + 4;

    rsx! {
        tr {
            {leaf.cells.iter().enumerate().map(|(idx, value)| {
                let align = COLUMNS.get(idx).map(|column| column.alignment()).unwrap_or("left");
                let padding_left = if idx == 0 { indent } else { 4 };
                rsx!(
                    td {
                        style: "border: 1px solid #bbb; padding: 4px 4px 4px {padding_left}px; text-align: {align};",
                        "{value}"
                    }
                )
            })}
        }
    }
}

#[component]
fn FilterDrawer(mut session: Signal<GridSession>) -> Element {
    let snapshot = session();

    rsx! {
        div {
            style: "position: fixed; top: 0; right: 0; width: 280px; height: 100vh; background: #fff; box-shadow: -6px 0 18px rgba(0,0,0,0.15); padding: 16px; z-index: 1100; overflow-y: auto;",
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                strong { "Menu" }
                button { onclick: move |_| session.write().toggle_drawer(), "✕" }
            }
            div {
                style: "margin-top: 12px; padding: 8px; border: 1px solid #ddd; border-radius: 6px; cursor: pointer;",
                onclick: move |_| session.write().toggle_group_menu(),
                "Group By ⋮"
            }
            if snapshot.group_menu_open {
                div { style: "border: 1px solid #bbb; border-radius: 6px; margin-top: 4px;",
                    {GROUPABLE_COLUMNS.iter().copied().map(|key| {
                        let label = column_def(key).map(|column| column.label).unwrap_or_default();
                        let background = if snapshot.grouping.contains(key) { "#eef4ff" } else { "transparent" };
                        rsx!(
                            div {
                                style: "padding: 8px 10px; cursor: pointer; background: {background};",
                                onclick: move |_| session.write().toggle_group(key),
                                "{label}"
                            }
                        )
                    })}
                }
            }
            button {
                style: "margin-top: 12px; width: 100%;",
                disabled: snapshot.grouping.is_empty(),
                onclick: move |_| session.write().clear_grouping(),
                "Clear Group By"
            }
            hr { style: "margin: 16px 0;" }
            RangeSlider {
                label: "Filter by Price",
                range: snapshot.filter.price_range,
                on_change: move |range| session.write().set_price_range(range),
            }
            RangeSlider {
                label: "Filter by Sale Price",
                range: snapshot.filter.sale_price_range,
                on_change: move |range| session.write().set_sale_price_range(range),
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::load);
    let AppState {
        mut session,
        mut store,
        mut busy,
        mut status,
    } = AppState::new(config.initial_page_size);

    let dataset_location = config.dataset_location.clone();
    use_future(move || {
        let dataset_location = dataset_location.clone();
        async move {
            *busy.write() = true;
            let source = platform_source(&dataset_location);
            let mut next = DatasetStore::default();
            match next.load(&source).await {
                Ok(dataset) => {
                    *status.write() = format!("Loaded {} rows", dataset.len());
                }
                Err(err) => {
                    *status.write() = format!("Failed to load dataset: {err}");
                }
            }
            store.set(next);
            *busy.write() = false;
        }
    });

    let filter = use_memo(move || session.read().filter.clone());
    let view = use_memo(move || derive(store.read().dataset(), &filter.read(), &COLUMNS));
    let table = use_memo(move || {
        let session = session.read();
        build_table(
            &COLUMNS,
            &view.read(),
            session.sort,
            &session.grouping,
            &session.expanded,
        )
    });
    let page = use_memo(move || {
        let session = session.read();
        paginate(&table.read().rows, session.page_size, session.page_index)
    });

    let snapshot = session();
    let current_page = page();
    let headers = table.read().headers.clone();
    let (range_start, range_end) = current_page.display_range();
    let page_index = current_page.page_index;
    let matched_rows = view.read().len();
    let loaded = store.read().is_loaded();
    let status_color = if store.read().last_error().is_some() { "#c62828" } else { "#555" };

    rsx! {
        div { style: "font-family: sans-serif; padding: 12px;",
            div { style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                input {
                    r#type: "search",
                    placeholder: "Search",
                    style: "padding: 6px 10px; min-width: 260px; border: 1px solid #bbb; border-radius: 6px;",
                    value: "{snapshot.filter.search_query}",
                    oninput: move |event| session.write().set_search(event.value()),
                }
                button {
                    style: "padding: 6px 14px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| session.write().toggle_drawer(),
                    "Menu"
                }
                span { style: "color: {status_color};", "{status}" }
                if loaded && !busy() {
                    span { style: "color: #999;", "{matched_rows} matching" }
                }
            }

            div { style: "{table_container_style()}",
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            {headers.into_iter().map(|header| {
                                let key = header.key;
                                let indicator = sort_indicator(header.sorted);
                                rsx!(
                                    th {
                                        style: "{table_header_cell_style()} text-align: {header.align};",
                                        onclick: move |_| session.write().toggle_sort(key),
                                        "{header.label}{indicator}"
                                    }
                                )
                            })}
                        }
                    }
                    tbody {
                        {current_page.rows.iter().cloned().map(|display_row| match display_row {
                            DisplayRow::Group(group) => {
                                let group_id = group.id.clone();
                                rsx!(GroupRowView { key: "{group_id}", group, session })
                            }
                            DisplayRow::Leaf(leaf) => rsx!(LeafRowView { leaf }),
                        })}
                    }
                }
            }

            div { style: "display: flex; gap: 8px; align-items: center; justify-content: flex-end; margin-top: 12px;",
                span { "Rows per page:" }
                select {
                    value: "{snapshot.page_size}",
                    onchange: move |event| {
                        if let Ok(size) = event.value().parse::<usize>() {
                            session.write().set_page_size(size);
                        }
                    },
                    {PAGE_SIZE_OPTIONS.iter().map(|size| rsx!(
                        option { value: "{size}", selected: *size == snapshot.page_size, "{size}" }
                    ))}
                }
                span { "{range_start}–{range_end} of {current_page.total_rows}" }
                button {
                    disabled: !current_page.has_previous(),
                    onclick: move |_| session.write().set_page_index(page_index.saturating_sub(1)),
                    "‹"
                }
                button {
                    disabled: !current_page.has_next(),
                    onclick: move |_| session.write().set_page_index(page_index + 1),
                    "›"
                }
            }

            if snapshot.drawer_open {
                FilterDrawer { session }
            }
        }
    }
}
