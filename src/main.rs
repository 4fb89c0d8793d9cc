use actix_web::cookie::Key;
use actix_web::{App, HttpServer, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use tera::Tera;

use pushkind_inventory::db::establish_connection_pool;
use pushkind_inventory::models::config::{ServerConfig, StorageConfig};
use pushkind_inventory::repository::local::LocalStorageRepository;
use pushkind_inventory::repository::{AnyRepository, DieselRepository};
use pushkind_inventory::routes::items::{add_item, delete_item, update_item};
use pushkind_inventory::routes::main::index;
use pushkind_inventory::routes::rooms::{add_room, delete_room, show_room, update_room};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = config::Config::builder()
        .set_default("storage.backend", "sqlite")
        .expect("default storage backend")
        .set_default("storage.database_url", "inventory.db")
        .expect("default database url")
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default().separator("__"))
        .build()
        .expect("Failed to load configuration");
    let config: ServerConfig = settings
        .try_deserialize()
        .expect("Failed to parse configuration");

    let repo = match &config.storage {
        StorageConfig::Sqlite { database_url } => {
            let pool = establish_connection_pool(database_url)
                .expect("Failed to establish database connection pool");
            log::info!("Using SQLite storage at {database_url}");
            AnyRepository::Diesel(DieselRepository::new(pool))
        }
        StorageConfig::Local { path } => {
            log::info!("Using local JSON storage at {}", path.display());
            AnyRepository::Local(
                LocalStorageRepository::new(path)
                    .expect("Failed to open local storage directory"),
            )
        }
    };

    let tera = Tera::new("templates/**/*.html").expect("Failed to load templates");

    // Flash cookies are signed with a per-process key; they only live for one
    // redirect cycle.
    let message_store = CookieMessageStore::builder(Key::generate()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let bind_address = (config.bind_address.clone(), config.port);
    log::info!("Listening on {}:{}", config.bind_address, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .service(index)
            .service(add_room)
            .service(show_room)
            .service(update_room)
            .service(delete_room)
            .service(add_item)
            .service(update_item)
            .service(delete_item)
    })
    .bind(bind_address)?
    .run()
    .await
}
