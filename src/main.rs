use saferoute::config::Config;
use saferoute::engine::Engine;
use saferoute::error::Error;
use saferoute::server::serve;
use saferoute::store::MemStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let engine = Engine::new(MemStore::with_fixtures(), config.default_city.clone());

    serve(engine, config.addr()).await
}
