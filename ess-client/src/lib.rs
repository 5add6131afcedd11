mod client;
pub mod domain;
mod ess_url;

pub(crate) use ess_url::*;

pub use client::*;
pub use domain::{Column, UpdateRequest, UpdateResponse, ValidationError};
