//! Lambda functions for a per-path hit counter fronting a downstream function.
//!
//! `hit-counter` records one hit per request path in DynamoDB and forwards the request,
//! `hello` is the downstream it normally fronts, and `viewer` lists the recorded hits.

pub mod config;
pub mod dynamo_db_hit_store;
pub mod error;
pub mod forwarder;
pub mod greeting;
pub mod hit_store;
pub mod lambda_function_client;
pub mod logging;
pub mod response;
pub mod viewer;
