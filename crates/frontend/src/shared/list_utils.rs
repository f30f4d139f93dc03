/// Универсальные утилиты для работы со списками (поиск, сортировка, UI компоненты)
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу.
    /// `needle` уже обрезан и приведён к нижнему регистру.
    fn matches_filter(&self, needle: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Направление сортировки
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// 1 для возрастания, -1 для убывания
    pub fn sign(self) -> i8 {
        match self {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// Сортирует список по указанному полю.
///
/// Сортировка стабильная: равные элементы сохраняют исходный порядок в обоих направлениях.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, direction: SortDirection) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        match direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });
}

/// Фильтрует список по поисковому запросу (пустой запрос пропускает всё)
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(&needle))
        .cloned()
        .collect()
}

/// Сравнение строк без учёта регистра
pub fn compare_case_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-icon sort-icon--active"
    } else {
        "sort-icon"
    }
}

/// Поле поиска: фильтр применяется на каждый ввод, есть кнопка очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search by title...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class="form-control"
                class:search-input--active=is_filter_active
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(&'static str, u32);

    impl Searchable for Item {
        fn matches_filter(&self, needle: &str) -> bool {
            self.0.to_lowercase().contains(needle)
        }
    }

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => compare_case_folded(self.0, other.0),
                "rank" => self.1.cmp(&other.1),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_filter_list_trims_and_ignores_case() {
        let items = vec![Item("Shoe", 1), Item("Hat", 2), Item("SHIRT", 3)];
        assert_eq!(filter_list(&items, "  sh "), vec![Item("Shoe", 1), Item("SHIRT", 3)]);
        assert_eq!(filter_list(&items, "   ").len(), 3);
    }

    #[test]
    fn test_sort_list_is_stable_in_both_directions() {
        let mut items = vec![Item("b", 1), Item("a", 1), Item("c", 0)];
        sort_list(&mut items, "rank", SortDirection::Desc);
        assert_eq!(items, vec![Item("b", 1), Item("a", 1), Item("c", 0)]);
        sort_list(&mut items, "rank", SortDirection::Asc);
        assert_eq!(items, vec![Item("c", 0), Item("b", 1), Item("a", 1)]);
    }

    #[test]
    fn test_sort_direction() {
        assert_eq!(SortDirection::default().sign(), 1);
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled().sign(), 1);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("price", "price", true), " ▲");
        assert_eq!(get_sort_indicator("price", "price", false), " ▼");
        assert_eq!(get_sort_indicator("title", "price", true), " ⇅");
    }
}
