use crate::shared::export::{CsvExportable, CsvField};
use crate::shared::list_utils::{compare_case_folded, Searchable, Sortable};
use contracts::domain::a001_catalog_product::aggregate::Product;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Строка таблицы каталога, готовая к отображению
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    pub price: String,
    pub category: String,
    pub thumbnail: Option<String>,
    /// Полное описание для подсказки строки
    pub tooltip: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            price: p.price.to_string(),
            category: p.category_name().to_string(),
            thumbnail: p.thumbnail().map(str::to_string),
            tooltip: p.description.clone(),
        }
    }
}

/// Текстовое значение поля для строковой сортировки
fn field_text<'a>(p: &'a Product, field: &str) -> Cow<'a, str> {
    match field {
        "id" => Cow::Owned(p.id.to_string()),
        "title" => Cow::Borrowed(p.title.as_str()),
        "description" => Cow::Borrowed(p.description.as_str()),
        "category" => Cow::Borrowed(p.category_name()),
        _ => Cow::Borrowed(""),
    }
}

impl Searchable for Product {
    fn matches_filter(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "price" => self
                .price
                .partial_cmp(&other.price)
                .unwrap_or(Ordering::Equal),
            // Все остальные поля сравниваются как строки, в том числе id
            _ => compare_case_folded(&field_text(self, field), &field_text(other, field)),
        }
    }
}

impl CsvExportable for Product {
    fn headers() -> Vec<&'static str> {
        vec!["id", "title", "price", "category", "images", "description"]
    }

    fn to_csv_row(&self) -> Vec<CsvField> {
        vec![
            CsvField::Number(self.id.to_string()),
            CsvField::Text(self.title.clone()),
            CsvField::Number(self.price.to_string()),
            CsvField::Text(self.category_name().to_string()),
            CsvField::Text(self.images.join("|")),
            CsvField::Text(self.description.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;
    use contracts::domain::a001_catalog_product::aggregate::Category;

    #[test]
    fn test_row_from_product() {
        let mut p = Product::new(3, "Lamp", 12.5);
        p.description = "A very long description".into();
        p.category = Some(Category::Name("Home".into()));
        p.images = vec!["a.png".into(), "b.png".into()];

        let row = ProductRow::from(&p);
        assert_eq!(row.price, "12.5");
        assert_eq!(row.category, "Home");
        assert_eq!(row.thumbnail.as_deref(), Some("a.png"));
        assert_eq!(row.tooltip, "A very long description");
    }

    #[test]
    fn test_csv_quotes_titles() {
        let mut p = Product::new(1, r#"A "B""#, 10.0);
        p.images = vec!["x.png".into(), "y.png".into()];
        let csv = build_csv(&[p]);
        assert_eq!(
            csv,
            "id,title,price,category,images,description\n1,\"A \"\"B\"\"\",10,\"\",\"x.png|y.png\",\"\""
        );
    }

    #[test]
    fn test_id_sorts_as_text() {
        let nine = Product::new(9, "a", 1.0);
        let ten = Product::new(10, "b", 1.0);
        assert_eq!(ten.compare_by_field(&nine, "id"), Ordering::Less);
    }

    #[test]
    fn test_unknown_field_is_equal() {
        let a = Product::new(1, "a", 1.0);
        let b = Product::new(2, "b", 2.0);
        assert_eq!(a.compare_by_field(&b, "rating"), Ordering::Equal);
    }
}
