//! # Tripcast Core
//!
//! Core contracts for the tripcast destination catalog.
//!
//! ## Overview
//!
//! This crate provides the foundational components for tripcast:
//!
//! - **Canonical domain types** for destinations, names, and temperatures
//! - **Destination store contract** with an in-memory implementation
//! - **Weather source trait** and the OpenWeather provider adapter
//! - **Verdict engine** classifying current vs. ideal temperatures
//! - **Service layer** orchestrating storage and weather lookups
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Domain types (Destination, DestinationName, Temperature) |
//! | [`error`] | Validation and service error taxonomy |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`retry`] | Bounded retry with backoff for upstream calls |
//! | [`service`] | Destination service orchestration |
//! | [`store`] | Destination store contract and in-memory store |
//! | [`verdict`] | Pure verdict classification |
//! | [`weather`] | Weather source trait and OpenWeather adapter |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tripcast_core::{DestinationService, InMemoryDestinationStore, OpenWeatherAdapter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(InMemoryDestinationStore::default());
//!     let weather = Arc::new(OpenWeatherAdapter::default());
//!     let service = DestinationService::new(store, weather);
//!
//!     let created = service.create("Paris", 20.0).await?;
//!     println!("{} -> {}", created.name, created.temperature);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result` types with structured errors. The service
//! never swallows a failure: every error kind maps to exactly one outcome at
//! the HTTP boundary.
//!
//! ## Security
//!
//! - The weather API key is read from the environment only (never logged)
//! - Outbound calls carry a bounded timeout

pub mod domain;
pub mod error;
pub mod http_client;
pub mod retry;
pub mod service;
pub mod store;
pub mod verdict;
pub mod weather;

pub use domain::{Destination, DestinationName, Temperature};
pub use error::{ServiceError, ValidationError};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient};
pub use retry::{Backoff, RetryPolicy};
pub use service::DestinationService;
pub use store::{DestinationStore, InMemoryDestinationStore, StoreError};
pub use verdict::{classify, Verdict, VerdictReport};
pub use weather::{OpenWeatherAdapter, WeatherError, WeatherErrorKind, WeatherSource};
