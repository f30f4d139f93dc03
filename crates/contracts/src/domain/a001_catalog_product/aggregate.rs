use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Явный `null` от API читается так же, как отсутствующее поле
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Category
// ============================================================================

/// Категория товара.
///
/// API отдаёт либо объект с полем `name`, либо просто строку.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Object {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        /// Остальные поля категории (id, slug, image...) сохраняются как есть
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    Name(String),
}

impl Category {
    /// Отображаемое имя: `name` объекта, иначе сырая строка
    pub fn display_name(&self) -> &str {
        match self {
            Category::Object { name, .. } => name,
            Category::Name(raw) => raw,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога в том виде, в каком его отдаёт удалённый API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default)]
    pub category: Option<Category>,

    /// Ссылки на изображения, первая используется как миниатюра
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,

    #[serde(rename = "creationAt", default, skip_serializing_if = "Option::is_none")]
    pub creation_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Поля, о которых клиент не знает; переносятся без изменений
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn new(id: i64, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            description: String::new(),
            category: None,
            images: Vec::new(),
            creation_at: None,
            updated_at: None,
            extra: Map::new(),
        }
    }

    /// Имя категории для таблицы и CSV (пустая строка, если категории нет)
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(Category::display_name)
            .unwrap_or_default()
    }

    /// Первое изображение, если оно есть
    pub fn thumbnail(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .filter(|src| !src.is_empty())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело PUT /products/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductUpdateDto {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
}

impl ProductUpdateDto {
    pub fn validate(&self) -> Result<(), String> {
        validate_common(&self.title, self.price)
    }
}

/// Тело POST /products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductCreateDto {
    pub title: String,
    pub price: f64,
    pub description: String,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    pub images: Vec<String>,
}

impl ProductCreateDto {
    pub fn validate(&self) -> Result<(), String> {
        validate_common(&self.title, self.price)?;
        if self.category_id <= 0 {
            return Err("category id must be positive".into());
        }
        Ok(())
    }
}

fn validate_common(title: &str, price: f64) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("title is required".into());
    }
    if !price.is_finite() {
        return Err("price must be a number".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_object_and_string() {
        let object: Product = serde_json::from_str(
            r#"{"id":1,"title":"Shoe","price":10,"category":{"id":4,"name":"Shoes","slug":"shoes"}}"#,
        )
        .unwrap();
        assert_eq!(object.category_name(), "Shoes");

        let raw: Product =
            serde_json::from_str(r#"{"id":2,"title":"Shirt","price":5,"category":"Clothes"}"#)
                .unwrap();
        assert_eq!(raw.category_name(), "Clothes");

        let missing: Product = serde_json::from_str(r#"{"id":3,"title":"Hat","price":1}"#).unwrap();
        assert_eq!(missing.category_name(), "");
    }

    #[test]
    fn test_unknown_fields_survive_roundtrip() {
        let json = r#"{"id":7,"title":"Lamp","price":12.5,"description":"d","images":["a.png"],"slug":"lamp","category":{"name":"Home","image":"h.png"},"updatedAt":"2024-03-15T14:02:26.000Z"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.extra.get("slug"), Some(&Value::from("lamp")));
        assert!(product.updated_at.is_some());

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["slug"], "lamp");
        assert_eq!(back["category"]["image"], "h.png");
        assert_eq!(back["price"], 12.5);
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let json = r#"[
            {"id":1,"title":"Shoe","price":10,"description":"ok","images":["a.png"]},
            {"id":2,"title":null,"price":null,"description":null,"images":null,"category":null},
            {"id":3,"title":"Hat","price":1,"category":{"id":1,"name":null}}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 3);

        let empty = &products[1];
        assert_eq!(empty.title, "");
        assert_eq!(empty.price, 0.0);
        assert_eq!(empty.description, "");
        assert!(empty.images.is_empty());
        assert_eq!(empty.thumbnail(), None);
        assert_eq!(empty.category_name(), "");

        assert_eq!(products[2].category_name(), "");
        assert_eq!(products[0].thumbnail(), Some("a.png"));
    }

    #[test]
    fn test_thumbnail() {
        let mut product = Product::new(1, "Shoe", 10.0);
        assert_eq!(product.thumbnail(), None);
        product.images = vec!["first.png".into(), "second.png".into()];
        assert_eq!(product.thumbnail(), Some("first.png"));
    }

    #[test]
    fn test_create_dto_serializes_category_id() {
        let dto = ProductCreateDto {
            title: "Shoe".into(),
            price: 10.0,
            description: String::new(),
            category_id: 2,
            images: vec![],
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["categoryId"], 2);
        assert!(value.get("category_id").is_none());
    }

    #[test]
    fn test_validate() {
        let mut dto = ProductUpdateDto {
            title: "  ".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        dto.title = "Shoe".into();
        assert!(dto.validate().is_ok());
        dto.price = f64::NAN;
        assert!(dto.validate().is_err());
    }
}
