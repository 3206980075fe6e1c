//! Public catalog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use minimart_core::ProductId;

use crate::error::{AppError, Result};
use crate::filters;
use crate::flash::{self, FlashMessage};
use crate::models::Product;
use crate::pagination::{self, Page};
use crate::state::AppState;

/// Page size for the public catalog list.
pub const PUBLIC_PAGE_SIZE: u32 = 8;

/// Search and pagination query parameters.
///
/// `page` stays a raw string; garbage values clamp to the first page
/// instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub page: Option<String>,
}

impl CatalogQuery {
    /// The search query, if non-blank.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub page: Page<Product>,
    pub search_query: Option<String>,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
    pub messages: Vec<FlashMessage>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: Product,
    pub messages: Vec<FlashMessage>,
}

/// Display the public product listing with search and pagination.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CatalogQuery>,
) -> Result<ProductsIndexTemplate> {
    let search = query.search();
    let page = state
        .products()
        .list_page(search, query.page.as_deref(), PUBLIC_PAGE_SIZE)
        .await?;

    let prev_url = page
        .has_previous()
        .then(|| pagination::page_url("/products", search, page.number - 1));
    let next_url = page
        .has_next()
        .then(|| pagination::page_url("/products", search, page.number + 1));
    let messages = flash::take(&session).await;

    Ok(ProductsIndexTemplate {
        page,
        search_query: search.map(ToString::to_string),
        prev_url,
        next_url,
        messages,
    })
}

/// Display one product's detail page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<ProductShowTemplate> {
    let id = ProductId::new(id);
    let product = state
        .products()
        .get(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;
    let messages = flash::take(&session).await;

    Ok(ProductShowTemplate { product, messages })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_query_search_trims_blanks() {
        let query = CatalogQuery {
            q: Some("  mug  ".to_string()),
            page: None,
        };
        assert_eq!(query.search(), Some("mug"));

        let blank = CatalogQuery {
            q: Some("   ".to_string()),
            page: None,
        };
        assert_eq!(blank.search(), None);

        let missing = CatalogQuery {
            q: None,
            page: None,
        };
        assert_eq!(missing.search(), None);
    }
}
