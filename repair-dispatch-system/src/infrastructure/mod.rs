mod config;
mod service_provider;

#[rustfmt::skip]
pub use {
    config::AppConfig,
    service_provider::ServiceProvider,
};
