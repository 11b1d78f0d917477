use crate::error::HitCounterError;
use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_lambda::{InvocationRequest, Lambda, LambdaClient};
use serde_json::Value;

const REQUEST_RESPONSE: &str = "RequestResponse";

#[async_trait]
pub trait Invoke {
    async fn invoke(&self, request: &Value) -> Result<Value, HitCounterError>;
}

/// Calls another Lambda function synchronously and hands back its JSON result.
pub struct LambdaFunctionClient {
    client: LambdaClient,
    function_name: String,
}

#[async_trait]
impl Invoke for LambdaFunctionClient {
    async fn invoke(&self, request: &Value) -> Result<Value, HitCounterError> {
        let payload = serde_json::to_vec(request)?;
        let response = self
            .client
            .invoke(InvocationRequest {
                function_name: self.function_name.clone(),
                invocation_type: Some(REQUEST_RESPONSE.to_string()),
                payload: Some(payload.into()),
                ..Default::default()
            })
            .await?;

        let payload = response.payload.ok_or(HitCounterError::NoneValue)?;
        if let Some(kind) = response.function_error {
            return Err(HitCounterError::DownstreamFunction {
                kind,
                payload: String::from_utf8_lossy(&payload).into_owned(),
            });
        }
        Ok(serde_json::from_slice(&payload)?)
    }
}

impl LambdaFunctionClient {
    pub fn new(region: Region, function_name: String) -> Self {
        Self::new_with_client(LambdaClient::new(region), function_name)
    }

    fn new_with_client(client: LambdaClient, function_name: String) -> Self {
        LambdaFunctionClient {
            client,
            function_name,
        }
    }
}
