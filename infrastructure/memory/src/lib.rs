//! In-process adapters for the dispatch engine: dashmap-backed storage
//! with per-record atomicity and a flume-backed realtime topic bus.

mod bus;
mod repository;
mod store;

#[rustfmt::skip]
pub use {
    bus::InMemoryEventBus,
    store::MemoryStore,
};
