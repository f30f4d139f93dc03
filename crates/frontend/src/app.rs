use crate::domain::a001_catalog_product::ui::list::ProductList;
use crate::shared::config::CatalogConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Конфигурация каталога: встроенные значения + параметры из адресной строки
    let config = CatalogConfig::load();
    log::info!(
        "Catalog started: api={}, page_size={}",
        config.api.base_url,
        config.table.page_size
    );
    provide_context(config);

    view! {
        <ProductList />
    }
}
