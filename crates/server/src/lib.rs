//! Server crate for the producer award intervals report.
//!
//! This crate contains the service that owns a loaded award list and hands
//! out the min/max interval report, plus its configuration.

pub mod config;
pub mod service;

pub use config::ServiceConfig;
pub use service::AwardsIntervalService;
