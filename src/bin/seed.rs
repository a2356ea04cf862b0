use axum_catalog_api::{config::AppConfig, db::create_pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    seed_products(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_products(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let products: Vec<(&str, i64, i64)> = vec![
        ("Gaming Keyboard", 120, 60),
        ("Ergonomic Mouse", 50, 20),
        ("Ultrawide Monitor", 400, 250),
        ("USB-C Dock", 90, 45),
        ("Laptop Stand", 35, 12),
    ];

    for (name, price, purchase_cost) in products {
        let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM products WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await?;
        if existing.is_some() {
            continue;
        }

        sqlx::query(
            "INSERT INTO products (name, price, purchase_cost) VALUES ($1, $2, $3)",
        )
        .bind(name)
        .bind(price)
        .bind(purchase_cost)
        .execute(pool)
        .await?;
        println!("Seeded product {name}");
    }

    Ok(())
}
