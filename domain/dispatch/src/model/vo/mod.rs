pub mod command;
pub mod geo;
pub mod msg;
pub mod permission;

#[rustfmt::skip]
pub use {
    geo::GeoPoint,
    msg::ChangeMsg,
};
