//! Product route handlers.
//!
//! A missing product id is never an error here: detail and edit views
//! resolve it by redirecting back to the listing.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use cartwheel_core::{Product, ProductDraft, ProductId, format_usd};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::services::CatalogService;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub quantity: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name.clone(),
            price: product.price.map_or_else(|| "-".to_string(), format_usd),
            quantity: product
                .quantity
                .map_or_else(|| "-".to_string(), |q| q.to_string()),
        }
    }
}

/// Product create/edit form data.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: Option<String>,
    pub quantity: Option<String>,
}

impl ProductForm {
    /// Validate the submitted fields into a draft. Empty fields are absent;
    /// anything else must parse as a non-negative number.
    fn into_draft(self) -> Result<ProductDraft> {
        Ok(ProductDraft {
            name: self.name.trim().to_string(),
            price: parse_price(self.price.as_deref())?,
            quantity: parse_quantity(self.quantity.as_deref())?,
        })
    }
}

/// Parse an optional price field. Whitespace-only input counts as absent.
fn parse_price(raw: Option<&str>) -> Result<Option<Decimal>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let price: Decimal = raw
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid price: {raw:?}")))?;
    if price.is_sign_negative() {
        return Err(AppError::BadRequest(format!(
            "price must be non-negative: {raw:?}"
        )));
    }
    Ok(Some(price))
}

/// Parse an optional quantity field. Whitespace-only input counts as absent.
fn parse_quantity(raw: Option<&str>) -> Result<Option<u32>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let quantity: u32 = raw
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid quantity: {raw:?}")))?;
    Ok(Some(quantity))
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
}

/// Catalog summary page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/summary.html")]
pub struct ProductSummaryTemplate {
    pub products: Vec<ProductView>,
    pub product_count: usize,
    pub total_quantity: u64,
    pub total_value: String,
}

/// Shared create/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    pub form_title: &'static str,
    pub submit_label: &'static str,
    pub is_edit: bool,
    /// Where the form posts: `/products` or `/products/update/{id}`.
    pub action: String,
    pub name: String,
    /// Raw decimal text for the input field, empty when absent.
    pub price: String,
    pub quantity: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
}

/// Display product listing page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<ProductsIndexTemplate> {
    let products = CatalogService::new(state.products()).list_all()?;

    Ok(ProductsIndexTemplate {
        products: products.iter().map(ProductView::from).collect(),
    })
}

/// Display catalog summary statistics.
#[instrument(skip(state))]
pub async fn summary(State(state): State<AppState>) -> Result<ProductSummaryTemplate> {
    let catalog = CatalogService::new(state.products());
    let products = catalog.list_all()?;
    let summary = catalog.summarize()?;

    Ok(ProductSummaryTemplate {
        products: products.iter().map(ProductView::from).collect(),
        product_count: summary.product_count,
        total_quantity: summary.total_quantity,
        total_value: format_usd(summary.total_value),
    })
}

/// Display a blank create form.
#[instrument]
pub async fn new_form() -> ProductFormTemplate {
    ProductFormTemplate {
        form_title: "Add Product",
        submit_label: "Create",
        is_edit: false,
        action: "/products".to_string(),
        name: String::new(),
        price: String::new(),
        quantity: String::new(),
    }
}

/// Create a product from submitted fields; the store assigns the id.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let draft = form.into_draft()?;
    let product = CatalogService::new(state.products()).create(draft)?;
    tracing::info!(product_id = %product.id, "created product {:?}", product.name);

    Ok(Redirect::to("/products"))
}

/// Display the edit form pre-filled, or redirect when the id is absent.
#[instrument(skip(state))]
pub async fn edit_form(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    let id = ProductId::new(id);
    let Some(product) = CatalogService::new(state.products()).get_by_id(id)? else {
        tracing::info!(product_id = %id, "product not found, redirecting to listing");
        return Ok(Redirect::to("/products").into_response());
    };

    Ok(ProductFormTemplate {
        form_title: "Edit Product",
        submit_label: "Update",
        is_edit: true,
        action: format!("/products/update/{id}"),
        name: product.name,
        price: product.price.map(|p| p.to_string()).unwrap_or_default(),
        quantity: product.quantity.map(|q| q.to_string()).unwrap_or_default(),
    }
    .into_response())
}

/// Update the product at the path id. The path id always wins: the form
/// carries no id, so an edit submission cannot retarget another record.
#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let draft = form.into_draft()?;
    CatalogService::new(state.products()).update(ProductId::new(id), draft)?;

    Ok(Redirect::to("/products"))
}

/// Delete a product and redirect to the listing. No-op for a missing id.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Redirect> {
    CatalogService::new(state.products()).delete(ProductId::new(id))?;

    Ok(Redirect::to("/products"))
}

/// Display the product detail view, or redirect when the id is absent.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    let id = ProductId::new(id);
    let Some(product) = CatalogService::new(state.products()).get_by_id(id)? else {
        tracing::info!(product_id = %id, "product not found, redirecting to listing");
        return Ok(Redirect::to("/products").into_response());
    };

    Ok(ProductShowTemplate {
        product: ProductView::from(&product),
    }
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_absent_and_present() {
        assert_eq!(parse_price(None).expect("parse"), None);
        assert_eq!(parse_price(Some("")).expect("parse"), None);
        assert_eq!(parse_price(Some("   ")).expect("parse"), None);
        assert_eq!(
            parse_price(Some("9.99")).expect("parse"),
            Some(Decimal::new(999, 2))
        );
    }

    #[test]
    fn test_parse_price_rejects_garbage_and_negatives() {
        assert!(parse_price(Some("abc")).is_err());
        assert!(parse_price(Some("-1.50")).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(None).expect("parse"), None);
        assert_eq!(parse_quantity(Some(" ")).expect("parse"), None);
        assert_eq!(parse_quantity(Some("7")).expect("parse"), Some(7));
        assert!(parse_quantity(Some("-3")).is_err());
        assert!(parse_quantity(Some("many")).is_err());
    }

    #[test]
    fn test_product_view_shows_dash_for_absent_fields() {
        let product = Product {
            id: ProductId::new(3),
            name: "widget".to_string(),
            price: None,
            quantity: None,
        };
        let view = ProductView::from(&product);
        assert_eq!(view.price, "-");
        assert_eq!(view.quantity, "-");

        let priced = Product {
            price: Some(Decimal::new(1250, 2)),
            quantity: Some(4),
            ..product
        };
        let view = ProductView::from(&priced);
        assert_eq!(view.price, "$12.50");
        assert_eq!(view.quantity, "4");
    }

    #[test]
    fn test_form_into_draft_trims_name() {
        let form = ProductForm {
            name: "  widget  ".to_string(),
            price: Some("1.00".to_string()),
            quantity: None,
        };
        let draft = form.into_draft().expect("draft");
        assert_eq!(draft.name, "widget");
        assert_eq!(draft.price, Some(Decimal::new(100, 2)));
        assert_eq!(draft.quantity, None);
    }
}
