use super::view_model::{ProductDetailsViewModel, SaveOutcome};
use crate::shared::config::CatalogConfig;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use contracts::domain::a001_catalog_product::aggregate::Product;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn ProductDetails(
    /// Свежая копия товара для редактирования, `None` для создания
    product: Option<Product>,
    on_outcome: Callback<SaveOutcome>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let config = use_context::<CatalogConfig>().expect("CatalogConfig not found in context");
    let api_base = config.api.base_url;

    let vm = ProductDetailsViewModel::new(product.as_ref());
    let is_edit = vm.is_edit_mode();
    let created = format_timestamp(product.as_ref().and_then(|p| p.creation_at));
    let updated = format_timestamp(product.as_ref().and_then(|p| p.updated_at));

    view! {
        <div class="details-container product-details">
            <div class="details-form">
                {is_edit.then(|| view! {
                    <div class="form-group">
                        <label for="detail-id">{"ID"}</label>
                        <input
                            type="text"
                            id="detail-id"
                            readonly=true
                            prop:value=move || vm.form.get().id.map(|id| id.to_string()).unwrap_or_default()
                        />
                    </div>
                })}

                <div class="form-group">
                    <label for="detail-title">{"Title"}</label>
                    <input
                        type="text"
                        id="detail-title"
                        prop:value=move || vm.form.get().title
                        on:input=move |ev| vm.form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="detail-price">{"Price"}</label>
                    <input
                        type="number"
                        id="detail-price"
                        step="0.01"
                        prop:value=move || vm.form.get().price
                        on:input=move |ev| vm.form.update(|f| f.price = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="detail-description">{"Description"}</label>
                    <textarea
                        id="detail-description"
                        rows="4"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                {if is_edit {
                    view! {
                        <div class="form-group">
                            <label for="detail-category">{"Category"}</label>
                            <input
                                type="text"
                                id="detail-category"
                                readonly=true
                                prop:value=move || vm.form.get().category
                            />
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="form-group">
                            <label for="create-category-id">{"Category ID"}</label>
                            <input
                                type="number"
                                id="create-category-id"
                                placeholder="1"
                                prop:value=move || vm.form.get().category_id
                                on:input=move |ev| vm.form.update(|f| f.category_id = event_target_value(&ev))
                            />
                        </div>
                    }.into_any()
                }}

                <div class="form-group">
                    <label for="detail-image">{"Image URL"}</label>
                    <input
                        type="url"
                        id="detail-image"
                        prop:value=move || vm.form.get().image
                        on:input=move |ev| vm.form.update(|f| f.image = event_target_value(&ev))
                    />
                </div>

                {is_edit.then(|| view! {
                    <div class="details-meta">
                        <span>{format!("Created: {}", created)}</span>
                        <span>{format!("Updated: {}", updated)}</span>
                    </div>
                })}
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get())
                    on_click=move |_| vm.save_command(api_base.clone(), on_outcome)
                >
                    {icon("save")}
                    {if is_edit { "Save" } else { "Create" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    {"Cancel"}
                </Button>
            </div>
        </div>
    }
}
