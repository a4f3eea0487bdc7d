use serde::Serialize;

/// Mutation result envelope shared by the ordering and admin endpoints.
/// Failures are reported in-band with HTTP 200, the contract the storefront
/// client already speaks.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(rename = "orderId", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MutationResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            order_id: None,
            error: None,
        }
    }

    pub fn created(order_id: String) -> Self {
        Self {
            success: true,
            order_id: Some(order_id),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            order_id: None,
            error: Some(error.into()),
        }
    }
}
