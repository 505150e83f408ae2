pub mod catalog;
pub mod error;
pub mod events;
pub mod fields;
pub mod ports;
pub mod repo;
pub mod service;
pub mod validation;

#[cfg(test)]
mod service_test;
