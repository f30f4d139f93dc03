pub mod row;
pub mod state;

use self::state::{create_state, CatalogPageView, SaveReaction};
use crate::domain::a001_catalog_product::api;
use crate::domain::a001_catalog_product::ui::details::{ProductDetails, SaveOutcome};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::CatalogConfig;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal::Modal;
use contracts::domain::a001_catalog_product::aggregate::Product;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Какая форма открыта поверх списка и под каким номером запроса
#[derive(Clone, Debug)]
enum DetailsTarget {
    Edit(Product, u64),
    Create(u64),
}

fn show_alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let config = use_context::<CatalogConfig>().expect("CatalogConfig not found in context");
    let state = create_state(config.table.page_size);
    let api_base = StoredValue::new(config.api.base_url.clone());
    let export_filename = StoredValue::new(config.export.filename.clone());
    let page_size_options = config.table.page_size_options.clone();

    let (details, set_details) = signal::<Option<DetailsTarget>>(None);
    let page = Memo::new(move |_| state.with(|s| s.page_view()));

    let fetch = move || {
        let base = api_base.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::fetch_products(&base).await;
            state.update(|s| s.commit_loaded(outcome));
        });
    };

    // Карточка всегда загружается заново, а не берётся из кэша
    let open_detail = move |id: i64| {
        let mut generation = 0;
        state.update_untracked(|s| generation = s.begin_detail_request());
        let base = api_base.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_product(&base, id).await {
                Ok(product) => {
                    if state.with_untracked(|s| s.is_current_detail(generation)) {
                        set_details.set(Some(DetailsTarget::Edit(product, generation)));
                    } else {
                        log::debug!("Dropping stale details response for product {}", id);
                    }
                }
                Err(e) => log::error!("Fetch product {} failed: {}", id, e),
            }
        });
    };

    let open_create = move || {
        let mut generation = 0;
        state.update_untracked(|s| generation = s.begin_detail_request());
        set_details.set(Some(DetailsTarget::Create(generation)));
    };

    let close_details = Callback::new(move |_: ()| set_details.set(None));

    // Ответ сохранения относится к форме, из которой оно было запущено
    let handle_outcome = move |generation: u64, outcome: SaveOutcome| {
        let mut reaction = SaveReaction::Ignore;
        state.update(|s| reaction = s.commit_save(generation, outcome));
        match reaction {
            SaveReaction::Close => set_details.set(None),
            SaveReaction::Alert(message) => {
                log::warn!("{}", message);
                show_alert(&message);
            }
            SaveReaction::Ignore => {}
        }
    };

    let handle_export = move || {
        let rows: Vec<Product> = state.with_untracked(|s| s.page_items().to_vec());
        if let Err(e) = export_to_csv(&rows, &export_filename.get_value()) {
            log::error!("CSV export failed: {}", e);
            show_alert(&format!("Export failed: {}", e));
        }
    };

    let toggle_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));
    let current_sort = Signal::derive(move || state.with(|s| s.sort_key.clone().unwrap_or_default()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_dir.is_ascending()));

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{icon("products")}{"Products"}</h2>
                <div class="header-actions">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search.clone()))
                        on_change=Callback::new(move |text: String| state.update(|s| s.set_search(&text)))
                        placeholder="Search by title...".to_string()
                    />
                    <span class="count-info">
                        {move || format!("Found: {}", page.with(|p| p.total_count))}
                    </span>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                        {icon("plus")}
                        {"New"}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle_export()>
                        {icon("download")}
                        {"Export CSV"}
                    </Button>
                </div>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeaderCell label="ID" sort_field="id" current_sort_field=current_sort sort_ascending=sort_ascending on_sort=toggle_sort />
                            <SortableHeaderCell label="Title" sort_field="title" current_sort_field=current_sort sort_ascending=sort_ascending on_sort=toggle_sort />
                            <SortableHeaderCell label="Price" sort_field="price" current_sort_field=current_sort sort_ascending=sort_ascending on_sort=toggle_sort />
                            <SortableHeaderCell label="Category" sort_field="category" current_sort_field=current_sort sort_ascending=sort_ascending on_sort=toggle_sort />
                            <th class="table__header-cell">{"Image"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || page.with(|p: &CatalogPageView| p.rows.clone()).into_iter().map(|row| {
                            let id = row.id;
                            view! {
                                <tr class="table__row" title=row.tooltip on:click=move |_| open_detail(id)>
                                    <td class="table__cell">{row.id}</td>
                                    <td class="table__cell">{row.title}</td>
                                    <td class="table__cell">{row.price}</td>
                                    <td class="table__cell">{row.category}</td>
                                    <td class="table__cell">
                                        {row.thumbnail.map(|src| view! { <img src=src class="thumb" alt="" /> })}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                items=Signal::derive(move || page.with(|p| p.pager.clone()))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(move |target: usize| state.update(|s| s.go_to_page(target)))
                on_page_size_change=Callback::new(move |size: usize| state.update(|s| s.set_page_size(size)))
                page_size_options=page_size_options
            />

            {move || details.get().map(|target| {
                let (title, product, generation) = match target {
                    DetailsTarget::Edit(p, generation) => (format!("Product #{}", p.id), Some(p), generation),
                    DetailsTarget::Create(generation) => ("New product".to_string(), None, generation),
                };
                let on_outcome = Callback::new(move |outcome: SaveOutcome| handle_outcome(generation, outcome));
                view! {
                    <Modal title=title on_close=close_details>
                        <ProductDetails product=product on_outcome=on_outcome on_cancel=close_details />
                    </Modal>
                }
            })}
        </div>
    }
}
