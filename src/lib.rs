//! Client library for the Vimeo REST API
//!
//! Construct a [`VimeoClient`] with [`Credentials`], then call one method
//! per API operation. Each call returns the raw [`HttpResponse`] when the
//! status is one the operation declares as success, and a classified
//! [`ClientError`] otherwise. Known failures map to per-status variants;
//! anything undocumented surfaces as
//! [`UnexpectedStatus`](ClientError::UnexpectedStatus).
//!
//! ```no_run
//! use vimeo_client::{Credentials, VimeoClient};
//!
//! # async fn run() -> Result<(), vimeo_client::ClientError> {
//! let client = VimeoClient::new(Credentials::token("access-token"))?;
//! let response = client.read_user().await?;
//! println!("{}", response.body);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
mod methods;
pub mod types;

pub use auth::{BearerAuth, Credentials};
pub use client::{Operation, QueryFilter, RequestOptions, VimeoClient};
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::{HttpClient, HttpRequest, HttpResponse, Method, ReqwestClient, TransportError};
pub use types::{NewAlbum, NewVideo};
