use hit_counter::greeting::hello_response;
use hit_counter::logging::init_logging;
use hit_counter::response::ProxyResponse;
use lambda_runtime::{handler_fn, Context, Error};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();
    lambda_runtime::run(handler_fn(hello_handler)).await?;
    Ok(())
}

async fn hello_handler(event: Value, _: Context) -> Result<ProxyResponse, Error> {
    Ok(hello_response(&event))
}
