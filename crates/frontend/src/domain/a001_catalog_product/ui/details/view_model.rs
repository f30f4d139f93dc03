use crate::domain::a001_catalog_product::api;
use crate::shared::api_utils::ApiError;
use contracts::domain::a001_catalog_product::aggregate::{
    Product, ProductCreateDto, ProductUpdateDto,
};
use leptos::prelude::*;

/// Результат сохранения формы, применяется списком к своему состоянию
#[derive(Clone, Debug)]
pub enum SaveOutcome {
    Updated(Result<Product, ApiError>),
    Created(Result<Product, ApiError>),
}

/// Поля формы в том виде, в каком их ввёл пользователь
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    /// `None` для нового товара
    pub id: Option<i64>,
    pub title: String,
    pub price: String,
    pub description: String,
    /// Только для отображения при редактировании
    pub category: String,
    /// Только при создании
    pub category_id: String,
    pub image: String,
}

impl ProductForm {
    pub fn from_product(p: &Product) -> Self {
        Self {
            id: Some(p.id),
            title: p.title.clone(),
            price: p.price.to_string(),
            description: p.description.clone(),
            category: p.category_name().to_string(),
            category_id: String::new(),
            image: p.images.first().cloned().unwrap_or_default(),
        }
    }

    pub fn to_update_dto(&self) -> ProductUpdateDto {
        ProductUpdateDto {
            title: self.title.clone(),
            price: parse_price(&self.price),
            description: self.description.clone(),
            images: self.images(),
        }
    }

    pub fn to_create_dto(&self) -> ProductCreateDto {
        ProductCreateDto {
            title: self.title.clone(),
            price: parse_price(&self.price),
            description: self.description.clone(),
            category_id: parse_category_id(&self.category_id),
            images: self.images(),
        }
    }

    fn images(&self) -> Vec<String> {
        if self.image.is_empty() {
            Vec::new()
        } else {
            vec![self.image.clone()]
        }
    }
}

/// Пустое или нечисловое значение цены превращается в 0
fn parse_price(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Без категории товар попадает в категорию 1
fn parse_category_id(raw: &str) -> i64 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id != 0)
        .unwrap_or(1)
}

/// ViewModel for the product edit/create form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(product: Option<&Product>) -> Self {
        let form = product.map(ProductForm::from_product).unwrap_or_default();
        Self {
            form: RwSignal::new(form),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Send the form to the API and hand the outcome to the list
    pub fn save_command(&self, api_base: String, on_outcome: Callback<SaveOutcome>) {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        let saving = self.saving;
        saving.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match current.id {
                Some(id) => {
                    let dto = current.to_update_dto();
                    SaveOutcome::Updated(api::update_product(&api_base, id, &dto).await)
                }
                None => {
                    let dto = current.to_create_dto();
                    SaveOutcome::Created(api::create_product(&api_base, &dto).await)
                }
            };
            // форма могла быть закрыта, пока шёл запрос
            let _ = saving.try_set(false);
            on_outcome.run(outcome);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_catalog_product::aggregate::Category;

    #[test]
    fn test_form_from_product() {
        let mut p = Product::new(4, "Lamp", 12.5);
        p.description = "Warm light".into();
        p.category = Some(Category::Name("Home".into()));
        p.images = vec!["a.png".into(), "b.png".into()];

        let form = ProductForm::from_product(&p);
        assert_eq!(form.id, Some(4));
        assert_eq!(form.price, "12.5");
        assert_eq!(form.category, "Home");
        assert_eq!(form.image, "a.png");
    }

    #[test]
    fn test_update_dto_keeps_only_non_empty_image() {
        let form = ProductForm {
            id: Some(1),
            title: "Shoe".into(),
            price: "abc".into(),
            ..Default::default()
        };
        let dto = form.to_update_dto();
        assert_eq!(dto.price, 0.0);
        assert!(dto.images.is_empty());

        let form = ProductForm {
            image: "x.png".into(),
            price: " 7.25 ".into(),
            ..form
        };
        let dto = form.to_update_dto();
        assert_eq!(dto.price, 7.25);
        assert_eq!(dto.images, vec!["x.png".to_string()]);
    }

    #[test]
    fn test_create_dto_defaults_category() {
        let mut form = ProductForm {
            title: "Sock".into(),
            ..Default::default()
        };
        assert_eq!(form.to_create_dto().category_id, 1);
        form.category_id = "0".into();
        assert_eq!(form.to_create_dto().category_id, 1);
        form.category_id = "3".into();
        assert_eq!(form.to_create_dto().category_id, 3);
    }

    #[test]
    fn test_parse_price_rejects_nan() {
        assert_eq!(parse_price("NaN"), 0.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("10"), 10.0);
    }
}
