use crate::shared::icons::icon;
use leptos::prelude::*;

/// Элемент пагинации: Prev, номер страницы или Next
#[derive(Clone, Debug, PartialEq)]
pub struct PagerItem {
    pub kind: PagerKind,
    /// Страница (1-based), на которую ведёт клик
    pub target: usize,
    pub active: bool,
    pub disabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerKind {
    Prev,
    Page(usize),
    Next,
}

impl PagerItem {
    pub fn label(&self) -> String {
        match self.kind {
            PagerKind::Prev => "Prev".to_string(),
            PagerKind::Page(n) => n.to_string(),
            PagerKind::Next => "Next".to_string(),
        }
    }
}

/// Строит элементы пагинации: Prev, 1..=total_pages, Next
pub fn build_pager(current_page: usize, total_pages: usize) -> Vec<PagerItem> {
    let total_pages = total_pages.max(1);
    let mut items = Vec::with_capacity(total_pages + 2);

    items.push(PagerItem {
        kind: PagerKind::Prev,
        target: current_page.saturating_sub(1).max(1),
        active: false,
        disabled: current_page <= 1,
    });

    for page in 1..=total_pages {
        items.push(PagerItem {
            kind: PagerKind::Page(page),
            target: page,
            active: page == current_page,
            disabled: false,
        });
    }

    items.push(PagerItem {
        kind: PagerKind::Next,
        target: (current_page + 1).min(total_pages),
        active: false,
        disabled: current_page >= total_pages,
    });

    items
}

/// PaginationControls component - Prev / pages / Next and the page size selector
#[component]
pub fn PaginationControls(
    /// Pager items for the current state
    #[prop(into)]
    items: Signal<Vec<PagerItem>>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes (1-based)
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    page_size_options: Vec<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <ul class="pagination">
                {move || items.get().into_iter().map(|item| {
                    let target = item.target;
                    let disabled = item.disabled;
                    let label = item.label();
                    let content = match item.kind {
                        PagerKind::Prev => view! { <>{icon("chevron-left")}{label}</> }.into_any(),
                        PagerKind::Next => view! { <>{label}{icon("chevron-right")}</> }.into_any(),
                        PagerKind::Page(_) => view! { <>{label}</> }.into_any(),
                    };
                    view! {
                        <li
                            class="page-item"
                            class:active=item.active
                            class:disabled=disabled
                        >
                            <a
                                class="page-link"
                                href="#"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    if !disabled {
                                        on_page_change.run(target);
                                    }
                                }
                            >
                                {content}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_disables_prev() {
        let items = build_pager(1, 3);
        assert_eq!(items.len(), 5);
        assert!(items[0].disabled);
        assert!(items[1].active);
        assert!(!items[4].disabled);
        assert_eq!(items[4].target, 2);
    }

    #[test]
    fn test_last_page_disables_next() {
        let items = build_pager(3, 3);
        assert!(!items[0].disabled);
        assert_eq!(items[0].target, 2);
        assert!(items[3].active);
        assert!(items[4].disabled);
    }

    #[test]
    fn test_empty_list_still_has_one_page() {
        let items = build_pager(1, 0);
        let labels: Vec<String> = items.iter().map(PagerItem::label).collect();
        assert_eq!(labels, vec!["Prev", "1", "Next"]);
        assert!(items[0].disabled && items[2].disabled);
    }

    #[test]
    fn test_cursor_past_end_keeps_next_disabled() {
        let items = build_pager(5, 2);
        assert!(items.iter().all(|i| !i.active));
        assert!(items.last().unwrap().disabled);
        assert_eq!(items[0].target, 4);
    }
}
