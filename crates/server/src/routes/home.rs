//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use rand::Rng;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::flash::{self, FlashMessage};
use crate::models::Product;
use crate::state::AppState;

/// How many products the home page pulls for its grid and featured pick.
const FEATURED_POOL_SIZE: i64 = 10;

/// Pick the featured header product uniformly at random.
///
/// Pure over the fetched slice so tests can pass a seeded RNG. An empty
/// store yields no featured product.
pub fn pick_featured<'a, R: Rng>(products: &'a [Product], rng: &mut R) -> Option<&'a Product> {
    if products.is_empty() {
        return None;
    }
    products.get(rng.random_range(0..products.len()))
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub featured: Option<Product>,
    pub products: Vec<Product>,
    pub messages: Vec<FlashMessage>,
}

/// Display the home page with a random featured product.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<HomeTemplate> {
    let products = state.products().first_n(FEATURED_POOL_SIZE).await?;
    let featured = pick_featured(&products, &mut rand::rng()).cloned();
    let messages = flash::take(&session).await;

    Ok(HomeTemplate {
        featured,
        products,
        messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use minimart_core::ProductId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal::Decimal;

    fn product(id: i32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            price: Decimal::ONE,
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_pick_featured_empty_store() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pick_featured(&[], &mut rng).is_none());
    }

    #[test]
    fn test_pick_featured_single_product() {
        let products = vec![product(1)];
        let mut rng = StdRng::seed_from_u64(0);
        let featured = pick_featured(&products, &mut rng).expect("non-empty");
        assert_eq!(featured.id, ProductId::new(1));
    }

    #[test]
    fn test_pick_featured_is_deterministic_under_seed() {
        let products: Vec<Product> = (1..=10).map(product).collect();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = pick_featured(&products, &mut rng_a).expect("non-empty");
        let b = pick_featured(&products, &mut rng_b).expect("non-empty");
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_pick_featured_covers_the_slice() {
        let products: Vec<Product> = (1..=10).map(product).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let featured = pick_featured(&products, &mut rng).expect("non-empty");
            seen.insert(featured.id);
        }
        assert_eq!(seen.len(), products.len());
    }
}
