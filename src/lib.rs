//! Geodetic measurement engine for marking property corners on a map and measuring the walls between them.
//!
//! The engine ([`coordinates`], [`geodesic`], [`measurement`]) is pure and synchronous. The remaining modules
//! form the shell that drives one session from a console and renders its views.

pub mod app_config;
pub mod console_listen;
pub mod coordinates;
pub mod domain;
mod geo_point_deserializer;
pub mod geodesic;
pub mod measurement;
pub mod store;
pub mod store_listener;
