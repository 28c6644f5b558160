//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification covering the comment feed
//! endpoint and the health surface. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` exports it for external tooling.

use utoipa::OpenApi;

use crate::domain::Comment;
use crate::inbound::http::comments::CommentsResponse;
use crate::inbound::http::envelope::{EnvelopeStatus, ErrorEnvelope};
use crate::inbound::http::health::ServiceInfo;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Policy comment feed API",
        description = "HTTP proxy aggregating Reddit comments about policy topics."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::comments::reddit_comments,
        crate::inbound::http::health::service_info,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Comment,
        CommentsResponse,
        EnvelopeStatus,
        ErrorEnvelope,
        ServiceInfo
    ))
)]
pub struct ApiDoc;
