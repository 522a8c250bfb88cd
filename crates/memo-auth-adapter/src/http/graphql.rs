/*
[INPUT]:  GraphQL documents and typed variables
[OUTPUT]: Decoded `data` payloads or fetch errors
[POS]:    HTTP layer - minimal GraphQL-over-HTTP envelope
[UPDATE]: When GraphQL request or error handling changes
*/

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http::{MemoAuthError, MemoClient, Result};
use crate::types::ChallengeService;

/// GraphQL request body
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<'a, V> {
    pub query: &'a str,
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<&'a str>,
    pub variables: V,
}

impl<'a, V> GraphqlRequest<'a, V> {
    pub fn new(query: &'a str, variables: V) -> Self {
        Self {
            query,
            operation_name: None,
            variables,
        }
    }

    pub fn with_operation_name(mut self, name: &'a str) -> Self {
        self.operation_name = Some(name);
        self
    }
}

/// GraphQL response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

impl<T> GraphqlResponse<T> {
    /// Turn the envelope into its `data`, failing on any reported error
    pub fn into_data(self, service: ChallengeService) -> Result<T> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            let detail = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(MemoAuthError::malformed(service, detail));
        }

        self.data
            .ok_or_else(|| MemoAuthError::malformed(service, "response has no data"))
    }
}

impl MemoClient {
    /// POST a GraphQL request to `url` and decode its `data`
    pub(crate) async fn send_graphql<V, T>(
        &self,
        url: Url,
        request: &GraphqlRequest<'_, V>,
    ) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let service = self.service();
        debug!(service = %service, url = %url, operation = ?request.operation_name, "sending graphql query");

        let builder = self.request(Method::POST, url).json(request);
        let (status, body) = self.send_raw(builder).await?;

        if !status.is_success() {
            return Err(MemoAuthError::status_error(service, status, body));
        }

        let response: GraphqlResponse<T> = serde_json::from_str(&body).map_err(|e| {
            MemoAuthError::malformed(service, format!("invalid GraphQL response: {e}"))
        })?;
        response.into_data(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Ping {
        ok: bool,
    }

    #[test]
    fn test_request_serialization() {
        let request = GraphqlRequest::new("query Q { ok }", serde_json::json!({"a": 1}))
            .with_operation_name("Q");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "query": "query Q { ok }",
                "operationName": "Q",
                "variables": {"a": 1},
            })
        );
    }

    #[test]
    fn test_errors_are_joined() {
        let response: GraphqlResponse<Ping> = serde_json::from_str(
            r#"{"data":null,"errors":[{"message":"bad address"},{"message":"try later"}]}"#,
        )
        .unwrap();
        let err = response.into_data(ChallengeService::Lens).unwrap_err();
        match err {
            MemoAuthError::ChallengeFetch { detail, status, .. } => {
                assert_eq!(detail, "bad address; try later");
                assert_eq!(status, None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_errors_with_data() {
        let response: GraphqlResponse<Ping> =
            serde_json::from_str(r#"{"data":{"ok":true},"errors":[]}"#).unwrap();
        assert_eq!(
            response.into_data(ChallengeService::Lens).unwrap(),
            Ping { ok: true }
        );
    }

    #[test]
    fn test_missing_data() {
        let response: GraphqlResponse<Ping> = serde_json::from_str("{}").unwrap();
        assert!(response.into_data(ChallengeService::Lens).is_err());
    }
}
