//! HTTP surface of the dashboard.

mod routes;

pub use routes::configure;
