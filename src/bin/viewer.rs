use hit_counter::config::hits_table_name_from_env;
use hit_counter::dynamo_db_hit_store::DynamoDbHitStore;
use hit_counter::hit_store::CountHits;
use hit_counter::logging::init_logging;
use hit_counter::response::ProxyResponse;
use hit_counter::viewer::hits_response;
use lambda_runtime::{handler_fn, Context, Error};
use once_cell::sync::OnceCell;
use rusoto_core::Region;
use serde_json::Value;
use tracing::info;

static HIT_STORE: OnceCell<DynamoDbHitStore> = OnceCell::new();

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();
    lambda_runtime::run(handler_fn(viewer_handler)).await?;
    Ok(())
}

async fn viewer_handler(_: Value, _: Context) -> Result<ProxyResponse, Error> {
    let store = HIT_STORE.get_or_try_init(|| {
        hits_table_name_from_env().map(|table_name| DynamoDbHitStore::new(Region::default(), table_name))
    })?;
    let records = store.list_hits().await?;
    info!(paths = records.len(), "listed hits");
    Ok(hits_response(&records)?)
}
