pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use application::{AnalyticsService, OrderService};
pub use db::{create_pool, DbPool};
pub use infrastructure::{DieselCommerceStore, RedisCache};

/// Concrete service types wired into the HTTP layer.
pub type AppOrderService = OrderService<DieselCommerceStore>;
pub type AppAnalyticsService = AnalyticsService<DieselCommerceStore, RedisCache>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::place_order,
        handlers::orders::get_order,
        handlers::analytics::customer_orders,
        handlers::analytics::customer_spending,
        handlers::analytics::top_selling_products,
        handlers::analytics::sales_analytics,
    ),
    tags(
        (name = "orders", description = "Order placement and lookup"),
        (name = "analytics", description = "Read-only sales and customer analytics"),
    )
)]
pub struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    cache: RedisCache,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let store = DieselCommerceStore::new(pool);
    let orders = web::Data::new(OrderService::new(store.clone()));
    let analytics = web::Data::new(AnalyticsService::new(store, cache));

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(orders.clone())
            .app_data(analytics.clone())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .service(
                web::scope("/orders")
                    .route("", web::post().to(handlers::orders::place_order))
                    .route("/{id}", web::get().to(handlers::orders::get_order)),
            )
            .route(
                "/customers/{customer_id}/orders",
                web::get().to(handlers::analytics::customer_orders),
            )
            .service(
                web::scope("/analytics")
                    .route(
                        "/customers/{customer_id}/spending",
                        web::get().to(handlers::analytics::customer_spending),
                    )
                    .route(
                        "/products/top",
                        web::get().to(handlers::analytics::top_selling_products),
                    )
                    .route("/sales", web::get().to(handlers::analytics::sales_analytics)),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
