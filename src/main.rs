use hit_counter::config::Config;
use hit_counter::dynamo_db_hit_store::DynamoDbHitStore;
use hit_counter::error::HitCounterError;
use hit_counter::forwarder::HitCounter;
use hit_counter::lambda_function_client::LambdaFunctionClient;
use hit_counter::logging::init_logging;
use lambda_runtime::{handler_fn, Context, Error};
use once_cell::sync::OnceCell;
use rusoto_core::Region;
use serde_json::Value;
use tracing::{info_span, Instrument};

static HIT_COUNTER: OnceCell<HitCounter<DynamoDbHitStore, LambdaFunctionClient>> =
    OnceCell::new();

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();
    lambda_runtime::run(handler_fn(hit_counter_handler)).await?;
    Ok(())
}

async fn hit_counter_handler(event: Value, context: Context) -> Result<Value, Error> {
    let counter = HIT_COUNTER.get_or_try_init(build_hit_counter)?;
    let span = info_span!("hit_counter", request_id = %context.request_id);
    Ok(counter.handle(event).instrument(span).await?)
}

fn build_hit_counter() -> Result<HitCounter<DynamoDbHitStore, LambdaFunctionClient>, HitCounterError>
{
    let config = Config::from_env()?;
    Ok(HitCounter::new(
        DynamoDbHitStore::new(Region::default(), config.hits_table_name),
        LambdaFunctionClient::new(Region::default(), config.downstream_function_name),
    ))
}
