//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Пример
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Price"
//!     sort_field="price"
//!     current_sort_field=Signal::derive(move || state.with(|s| s.sort_key.clone().unwrap_or_default()))
//!     sort_ascending=Signal::derive(move || state.with(|s| s.sort_dir.is_ascending()))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;

/// Заголовок колонки с индикатором сортировки (▲▼), клик переключает сортировку
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущее поле сортировки из state
    #[prop(into)]
    current_sort_field: Signal<String>,

    /// Направление сортировки из state
    #[prop(into)]
    sort_ascending: Signal<bool>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    view! {
        <th
            class="table__header-cell cursor-pointer user-select-none"
            title="Sort"
            on:click=move |_| on_sort.run(sort_field_for_click.clone())
        >
            {label}
            <span class=move || get_sort_class(&current_sort_field.get(), &sort_field_for_class)>
                {move || {
                    get_sort_indicator(
                        &current_sort_field.get(),
                        &sort_field_for_indicator,
                        sort_ascending.get(),
                    )
                }}
            </span>
        </th>
    }
}
