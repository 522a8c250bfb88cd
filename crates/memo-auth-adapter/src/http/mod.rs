/*
[INPUT]:  HTTP client configuration and service endpoints
[OUTPUT]: Challenge texts fetched from the middleware and Lens
[POS]:    HTTP layer - outbound challenge requests
[UPDATE]: When adding new services or changing client behavior
*/

pub mod client;
pub mod error;
pub mod graphql;
pub mod lens;
pub mod middleware;

pub use error::{MemoAuthError, Result};

pub use client::{ClientConfig, MemoClient};
pub use lens::LensClient;
pub use middleware::MiddlewareClient;
