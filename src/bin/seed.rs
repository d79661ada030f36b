//! Seed script for development — populates a fresh database with sample posts.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires `DATABASE_URL` (reads .env). Skips seeding when posts already exist.

use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    // Run migrations first
    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("=== inkpost seed script ===");
    seed_posts(&pool).await?;
    println!("=== Seed complete! ===");

    Ok(())
}

async fn seed_posts(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] {count} posts already present");
        return Ok(());
    }

    let samples: &[(&str, &str)] = &[
        (
            "Building APIs with Node.js",
            "Learn how to use Node.js to build RESTful APIs using frameworks like Express.js",
        ),
        (
            "Deployment of Node.js applications",
            "Understand the different ways to deploy your Node.js applications, including on-premises, cloud, and container environments...",
        ),
        (
            "Authentication and Authorization in Node.js",
            "Learn how to add authentication and authorization to your Node.js web applications using Passport.js or other authentication libraries.",
        ),
        (
            "Understand how to work with MongoDB and Mongoose",
            "Understand how to work with MongoDB and Mongoose, an Object Data Modeling (ODM) library, in Node.js applications.",
        ),
        (
            "Build real-time, event-driven applications in Node.js",
            "Socket.io: Learn how to use Socket.io to build real-time, event-driven applications in Node.js.",
        ),
        (
            "Discover how to use Express.js",
            "Discover how to use Express.js, a popular Node.js web framework, to build web applications.",
        ),
        (
            "Asynchronous Programming with Node.js",
            "Asynchronous Programming with Node.js: Explore the asynchronous nature of Node.js and how it allows for non-blocking I/O operations.",
        ),
        (
            "Learn the basics of Node.js and its architecture",
            "Learn the basics of Node.js and its architecture, how it works, and why it is popular among developers.",
        ),
        (
            "NodeJs Limiting Network Traffic",
            "Learn how to limit network traffic.",
        ),
        (
            "Learn Morgan - HTTP Request logger for NodeJs",
            "Learn Morgan.",
        ),
    ];

    for (title, body) in samples {
        sqlx::query("INSERT INTO posts (title, body) VALUES ($1, $2)")
            .bind(title)
            .bind(body)
            .execute(pool)
            .await?;
    }

    println!("[done] Inserted {} sample posts", samples.len());
    Ok(())
}
