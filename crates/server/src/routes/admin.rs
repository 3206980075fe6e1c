//! Admin CRUD route handlers for managing the product catalog.
//!
//! Every handler takes the [`RequireAdmin`] extractor; see
//! [`crate::middleware::admin_auth`] for the gate's semantics.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use minimart_core::ProductId;

use crate::error::{AppError, Result};
use crate::filters;
use crate::flash::{self, FlashLevel, FlashMessage};
use crate::forms::{FormErrors, ProductForm};
use crate::middleware::RequireAdmin;
use crate::models::Product;
use crate::pagination::{self, Page};
use crate::routes::products::CatalogQuery;
use crate::state::AppState;

/// Page size for the admin product list.
pub const ADMIN_PAGE_SIZE: u32 = 5;

/// Admin product list template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/products.html")]
pub struct ManageProductsTemplate {
    pub page: Page<Product>,
    pub search_query: Option<String>,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
    pub messages: Vec<FlashMessage>,
}

/// Product form template, shared by add and edit.
#[derive(Template, WebTemplate)]
#[template(path = "admin/product_form.html")]
pub struct ProductFormTemplate {
    pub heading: &'static str,
    pub action: String,
    pub form: ProductForm,
    pub errors: FormErrors,
    pub messages: Vec<FlashMessage>,
}

/// Delete confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/delete_confirm.html")]
pub struct DeleteConfirmTemplate {
    pub product: Product,
    pub messages: Vec<FlashMessage>,
}

/// Display the admin product list (same search as the public list,
/// smaller pages).
#[instrument(skip(_admin, state, session))]
pub async fn index(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CatalogQuery>,
) -> Result<ManageProductsTemplate> {
    let search = query.search();
    let page = state
        .products()
        .list_page(search, query.page.as_deref(), ADMIN_PAGE_SIZE)
        .await?;

    let prev_url = page
        .has_previous()
        .then(|| pagination::page_url("/manage/products", search, page.number - 1));
    let next_url = page
        .has_next()
        .then(|| pagination::page_url("/manage/products", search, page.number + 1));
    let messages = flash::take(&session).await;

    Ok(ManageProductsTemplate {
        page,
        search_query: search.map(ToString::to_string),
        prev_url,
        next_url,
        messages,
    })
}

/// Display an empty product form.
#[instrument(skip(_admin, session))]
pub async fn add_form(_admin: RequireAdmin, session: Session) -> ProductFormTemplate {
    ProductFormTemplate {
        heading: "Add product",
        action: "/manage/products/add".to_string(),
        form: ProductForm::default(),
        errors: FormErrors::default(),
        messages: flash::take(&session).await,
    }
}

/// Create a product from the submitted form.
///
/// Validation failure re-renders the form with field errors (HTTP 200).
#[instrument(skip(_admin, state, session, form))]
pub async fn add_submit(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    match form.validate() {
        Ok(new) => {
            let product = state.products().create(&new).await?;
            flash::push(
                &session,
                FlashLevel::Success,
                format!("{} added.", product.name),
            )
            .await?;
            Ok(Redirect::to("/manage/products").into_response())
        }
        Err(errors) => Ok(ProductFormTemplate {
            heading: "Add product",
            action: "/manage/products/add".to_string(),
            form,
            errors,
            messages: flash::take(&session).await,
        }
        .into_response()),
    }
}

/// Display the product form pre-filled from an existing record.
#[instrument(skip(_admin, state, session))]
pub async fn edit_form(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<ProductFormTemplate> {
    let id = ProductId::new(id);
    let product = state
        .products()
        .get(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;

    Ok(ProductFormTemplate {
        heading: "Edit product",
        action: format!("/manage/products/edit/{id}"),
        form: ProductForm::from_product(&product),
        errors: FormErrors::default(),
        messages: flash::take(&session).await,
    })
}

/// Save the submitted form over an existing product.
#[instrument(skip(_admin, state, session, form))]
pub async fn edit_submit(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let id = ProductId::new(id);
    match form.validate() {
        Ok(new) => {
            let product = state
                .products()
                .update(id, &new)
                .await?
                .ok_or_else(|| AppError::product_not_found(id))?;
            flash::push(
                &session,
                FlashLevel::Success,
                format!("{} updated.", product.name),
            )
            .await?;
            Ok(Redirect::to("/manage/products").into_response())
        }
        Err(errors) => {
            // Unknown ids still 404 even when the submission is invalid
            if state.products().get(id).await?.is_none() {
                return Err(AppError::product_not_found(id));
            }
            Ok(ProductFormTemplate {
                heading: "Edit product",
                action: format!("/manage/products/edit/{id}"),
                form,
                errors,
                messages: flash::take(&session).await,
            }
            .into_response())
        }
    }
}

/// Display the delete confirmation page.
#[instrument(skip(_admin, state, session))]
pub async fn delete_confirm(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<DeleteConfirmTemplate> {
    let id = ProductId::new(id);
    let product = state
        .products()
        .get(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;

    Ok(DeleteConfirmTemplate {
        product,
        messages: flash::take(&session).await,
    })
}

/// Delete the product and redirect to the manage list.
#[instrument(skip(_admin, state, session))]
pub async fn delete_submit(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    let id = ProductId::new(id);
    let product = state
        .products()
        .get(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;

    state.products().delete(id).await?;
    flash::push(
        &session,
        FlashLevel::Success,
        format!("{} deleted.", product.name),
    )
    .await?;

    Ok(Redirect::to("/manage/products"))
}
