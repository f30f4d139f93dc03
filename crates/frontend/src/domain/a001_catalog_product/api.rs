use crate::shared::api_utils::{api_url, get_json, post_json, put_json, ApiError};
use contracts::domain::a001_catalog_product::aggregate::{
    Product, ProductCreateDto, ProductUpdateDto,
};

pub fn products_url(base: &str) -> String {
    api_url(base, "/products")
}

pub fn product_url(base: &str, id: i64) -> String {
    api_url(base, &format!("/products/{}", id))
}

/// Получить весь каталог
pub async fn fetch_products(base: &str) -> Result<Vec<Product>, ApiError> {
    get_json(&products_url(base)).await
}

/// Получить товар по ID (для формы редактирования, без кэша)
pub async fn fetch_product(base: &str, id: i64) -> Result<Product, ApiError> {
    get_json(&product_url(base, id)).await
}

/// Обновить товар
pub async fn update_product(
    base: &str,
    id: i64,
    dto: &ProductUpdateDto,
) -> Result<Product, ApiError> {
    dto.validate().map_err(ApiError::Invalid)?;
    put_json(&product_url(base, id), dto).await
}

/// Создать товар
pub async fn create_product(base: &str, dto: &ProductCreateDto) -> Result<Product, ApiError> {
    dto.validate().map_err(ApiError::Invalid)?;
    post_json(&products_url(base), dto).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let base = "https://api.escuelajs.co/api/v1";
        assert_eq!(products_url(base), "https://api.escuelajs.co/api/v1/products");
        assert_eq!(product_url(base, 42), "https://api.escuelajs.co/api/v1/products/42");
    }
}
