//! Client for a remote banner image-generation service.
//!
//! A [`FormHandler`] reads title, subtitle, category, background URL and
//! comma-separated keywords from a [`FormSource`], posts them as JSON to the
//! service, and writes the returned image URL into a [`ResultView`], or raises
//! an alert on failure.

pub mod config;
pub mod error;
pub mod form;
pub mod logger;
pub mod models;
pub mod service;

pub use config::ClientConfig;
pub use error::{FormError, Result};
pub use form::{FormHandler, FormSource, Outcome, ResultView, SubmitEvent};
pub use models::*;
pub use service::{HealthClient, ImageClient, ImageGenerator, ServiceClient};
