//! Seed the catalog with sample products for local development.
//!
//! Plain inserts, not idempotent: running twice doubles the catalog.

use rust_decimal::Decimal;
use secrecy::SecretString;
use tracing::info;

use minimart_server::db::{self, ProductRepository};
use minimart_server::models::NewProduct;

/// Sample catalog entries, cycled when `count` exceeds the list.
const SAMPLES: &[(&str, &str, &str)] = &[
    ("Mug", "A sturdy ceramic mug that holds 350ml.", "9.99"),
    ("Notebook", "Dot-grid notebook, 120 pages.", "6.50"),
    ("Water Bottle", "Insulated steel bottle, keeps drinks cold.", "18.00"),
    ("Tote Bag", "Canvas tote with reinforced handles.", "12.25"),
    ("Desk Lamp", "Warm LED lamp with a weighted base.", "34.90"),
    ("Coaster Set", "Set of four cork coasters.", "7.75"),
];

/// Insert `count` sample products.
///
/// # Errors
///
/// Returns an error if environment variables are missing, a price constant
/// fails to parse, or a database operation fails.
pub async fn run(count: u32) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("MINIMART_DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| "MINIMART_DATABASE_URL not set")?;

    let pool = db::create_pool(&database_url).await?;
    let repo = ProductRepository::new(&pool);

    for i in 0..count {
        let index = usize::try_from(i)? % SAMPLES.len();
        let Some(&(name, description, price)) = SAMPLES.get(index) else {
            break;
        };

        // Disambiguate repeats past the sample list
        let cycle = usize::try_from(i)? / SAMPLES.len();
        let name = if cycle == 0 {
            name.to_string()
        } else {
            format!("{name} #{}", cycle + 1)
        };

        let product = repo
            .create(&NewProduct {
                name,
                description: description.to_string(),
                price: price.parse::<Decimal>()?,
                image: None,
            })
            .await?;
        info!(id = %product.id, name = %product.name, "Seeded product");
    }

    info!("Seeded {count} products");
    Ok(())
}
