use crate::{
    configuration::Configuration, configuration_handler::ConfigurationHandler, http::create_app,
    local_bookings::LocalBookings,
};
use tracing_subscriber::EnvFilter;

mod availability;
mod backend;
mod catalog;
mod configuration;
mod configuration_handler;
mod errors;
mod http;
mod local_bookings;
#[cfg(test)]
mod testutils;
mod types;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("######################");
    println!("# Barbershop Backend #");
    println!("######################");

    let configuration = ConfigurationHandler::parse_arguments();

    let address = format!("0.0.0.0:{}", configuration.port());
    println!("Accessible at:\n{}", address);
    let listener = tokio::net::TcpListener::bind(address).await.unwrap();

    let backend = LocalBookings::default();
    let app = create_app(backend, configuration);

    axum::serve(listener, app).await.unwrap();
}
