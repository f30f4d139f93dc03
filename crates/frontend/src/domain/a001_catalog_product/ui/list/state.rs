use super::row::ProductRow;
use crate::domain::a001_catalog_product::ui::details::SaveOutcome;
use crate::shared::api_utils::ApiError;
use crate::shared::components::pagination_controls::{build_pager, PagerItem};
use crate::shared::config::DEFAULT_PAGE_SIZE;
use crate::shared::list_utils::{filter_list, sort_list, SortDirection};
use contracts::domain::a001_catalog_product::aggregate::Product;
use leptos::prelude::*;

/// Состояние списка каталога: кэш товаров, производное представление и курсор страниц
#[derive(Clone, Debug)]
pub struct CatalogViewState {
    /// Все загруженные товары (без фильтра)
    pub products: Vec<Product>,
    /// Отфильтрованные и отсортированные товары, пересчитываются из `products`
    pub filtered: Vec<Product>,

    // Фильтр
    pub search: String,

    // Сортировка
    pub sort_key: Option<String>,
    pub sort_dir: SortDirection,

    // Клиентская пагинация, страницы с 1
    pub current_page: usize,
    pub page_size: usize,

    /// Номер последнего запроса карточки товара; более старые ответы отбрасываются
    pub detail_generation: u64,
}

impl Default for CatalogViewState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

/// Что сделать с формой после ответа на сохранение
#[derive(Clone, Debug, PartialEq)]
pub enum SaveReaction {
    /// Закрыть форму, из которой пришло сохранение
    Close,
    /// Показать ошибку поверх той же формы
    Alert(String),
    /// Форма уже сменилась: кэш обновлён, текущую форму не трогаем
    Ignore,
}

/// Всё, что нужно для отрисовки одной страницы таблицы
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogPageView {
    pub total_count: usize,
    pub rows: Vec<ProductRow>,
    pub pager: Vec<PagerItem>,
    pub current_page: usize,
    pub total_pages: usize,
}

impl CatalogViewState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            products: Vec::new(),
            filtered: Vec::new(),
            search: String::new(),
            sort_key: None,
            sort_dir: SortDirection::Asc,
            current_page: 1,
            page_size: page_size.max(1),
            detail_generation: 0,
        }
    }

    /// Пересчитывает `filtered` из `products`: фильтр по названию, затем сортировка
    pub fn apply_filter(&mut self) {
        self.filtered = filter_list(&self.products, &self.search);
        if let Some(key) = self.sort_key.as_deref() {
            sort_list(&mut self.filtered, key, self.sort_dir);
        }
    }

    /// Новый поисковый запрос всегда возвращает на первую страницу
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
        self.current_page = 1;
        self.apply_filter();
    }

    /// Повторный клик по той же колонке меняет направление, другая колонка сортирует по возрастанию
    pub fn toggle_sort(&mut self, key: &str) {
        if self.sort_key.as_deref() == Some(key) {
            self.sort_dir = self.sort_dir.toggled();
        } else {
            self.sort_key = Some(key.to_string());
            self.sort_dir = SortDirection::Asc;
        }
        log::debug!("Sort by {} ({})", key, self.sort_dir.sign());
        self.apply_filter();
    }

    /// Меняет размер страницы. Текущая страница не сбрасывается и не ограничивается.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        self.page_size = page_size;
        self.apply_filter();
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().max(1).div_ceil(self.page_size)
    }

    /// Переход на страницу из пагинации, в пределах 1..=total_pages
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    /// Товары текущей страницы; за последней страницей пусто
    pub fn page_items(&self) -> &[Product] {
        let start = self.current_page.saturating_sub(1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(self.filtered.len());
        self.filtered.get(start..end).unwrap_or(&[])
    }

    pub fn page_view(&self) -> CatalogPageView {
        let total_pages = self.total_pages();
        CatalogPageView {
            total_count: self.filtered.len(),
            rows: self.page_items().iter().map(ProductRow::from).collect(),
            pager: build_pager(self.current_page, total_pages),
            current_page: self.current_page,
            total_pages,
        }
    }

    /// Результат начальной загрузки. Ошибка только пишется в лог, состояние не меняется.
    pub fn commit_loaded(&mut self, outcome: Result<Vec<Product>, ApiError>) {
        match outcome {
            Ok(products) => {
                log::info!("Loaded {} products", products.len());
                self.products = products;
                self.apply_filter();
            }
            Err(e) => log::error!("Fetch products failed: {}", e),
        }
    }

    /// Результат PUT. При ошибке кэш не меняется, возвращается текст для alert.
    pub fn commit_update(&mut self, outcome: Result<Product, ApiError>) -> Result<(), String> {
        let updated = outcome.map_err(|e| format!("Update failed: {}", e))?;
        if let Some(slot) = self.products.iter_mut().find(|p| p.id == updated.id) {
            *slot = updated;
        } else {
            log::warn!("Updated product {} is not in the local list", updated.id);
        }
        self.apply_filter();
        Ok(())
    }

    /// Результат POST. Созданный товар добавляется в начало списка.
    pub fn commit_create(&mut self, outcome: Result<Product, ApiError>) -> Result<(), String> {
        let created = outcome.map_err(|e| format!("Create failed: {}", e))?;
        log::info!("Created product {}", created.id);
        self.products.insert(0, created);
        self.apply_filter();
        Ok(())
    }

    /// Начать запрос карточки: все ранее начатые запросы становятся устаревшими
    pub fn begin_detail_request(&mut self) -> u64 {
        self.detail_generation += 1;
        self.detail_generation
    }

    pub fn is_current_detail(&self, generation: u64) -> bool {
        self.detail_generation == generation
    }

    /// Применяет результат сохранения формы, открытой под номером `generation`.
    /// Успешный ответ всегда попадает в кэш; закрытие и alert только для той же формы.
    pub fn commit_save(&mut self, generation: u64, outcome: SaveOutcome) -> SaveReaction {
        let committed = match outcome {
            SaveOutcome::Updated(result) => self.commit_update(result),
            SaveOutcome::Created(result) => self.commit_create(result),
        };
        let current = self.is_current_detail(generation);
        match committed {
            Ok(()) if current => SaveReaction::Close,
            Err(message) if current => SaveReaction::Alert(message),
            Ok(()) => SaveReaction::Ignore,
            Err(message) => {
                log::warn!("Dropping stale save result: {}", message);
                SaveReaction::Ignore
            }
        }
    }
}

pub fn create_state(page_size: usize) -> RwSignal<CatalogViewState> {
    RwSignal::new(CatalogViewState::with_page_size(page_size))
}
