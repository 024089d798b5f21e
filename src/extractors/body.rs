//! Extract a JSON object body, treating anything unusable as an empty object.

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::{Map, Value};

/// Request body as a JSON object. A missing, malformed, or non-object body becomes an empty map,
/// so handlers report it through their own required-field message.
#[derive(Clone, Debug, Default)]
pub struct JsonObject(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(Value::Object(map))) => Ok(JsonObject(map)),
            Ok(Json(_)) => Ok(JsonObject::default()),
            Err(rejection) => {
                tracing::debug!(%rejection, "unusable request body");
                Ok(JsonObject::default())
            }
        }
    }
}
