use crate::error::HitCounterError;
use crate::hit_store::{CountHits, HitRecord};
use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_dynamodb::{AttributeValue, DynamoDb, DynamoDbClient, ScanInput, UpdateItemInput};
use std::collections::HashMap;
use tracing::debug;

const PATH_ATTRIBUTE: &str = "path";
const HITS_ATTRIBUTE: &str = "hits";
const INCREMENT_EXPRESSION: &str = "ADD hits :incr";

pub struct DynamoDbHitStore {
    client: DynamoDbClient,
    table_name: String,
}

#[async_trait]
impl CountHits for DynamoDbHitStore {
    async fn record_hit(&self, path: &str) -> Result<u64, HitCounterError> {
        let mut key = HashMap::new();
        key.insert(PATH_ATTRIBUTE.to_string(), string_value(path));
        let mut values = HashMap::new();
        values.insert(":incr".to_string(), number_value(1));

        let output = self
            .client
            .update_item(UpdateItemInput {
                table_name: self.table_name.clone(),
                key,
                update_expression: Some(INCREMENT_EXPRESSION.to_string()),
                expression_attribute_values: Some(values),
                return_values: Some("UPDATED_NEW".to_string()),
                ..Default::default()
            })
            .await?;

        let attributes = output.attributes.ok_or(HitCounterError::NoneValue)?;
        parse_hits(&attributes)
    }

    async fn list_hits(&self) -> Result<Vec<HitRecord>, HitCounterError> {
        let mut records = Vec::<HitRecord>::new();
        let mut exclusive_start_key = None;
        loop {
            let output = self
                .client
                .scan(ScanInput {
                    table_name: self.table_name.clone(),
                    exclusive_start_key,
                    ..Default::default()
                })
                .await?;

            for item in output.items.unwrap_or_default() {
                records.push(parse_record(&item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => {
                    debug!(table = %self.table_name, "continuing hits scan");
                    exclusive_start_key = Some(key);
                }
                _ => break,
            }
        }
        records.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(records)
    }
}

impl DynamoDbHitStore {
    pub fn new(region: Region, table_name: String) -> Self {
        Self::new_with_client(DynamoDbClient::new(region), table_name)
    }

    fn new_with_client(client: DynamoDbClient, table_name: String) -> Self {
        DynamoDbHitStore { client, table_name }
    }
}

fn string_value(value: &str) -> AttributeValue {
    AttributeValue {
        s: Some(value.to_string()),
        ..Default::default()
    }
}

fn number_value(value: u64) -> AttributeValue {
    AttributeValue {
        n: Some(value.to_string()),
        ..Default::default()
    }
}

fn parse_hits(item: &HashMap<String, AttributeValue>) -> Result<u64, HitCounterError> {
    let count = item
        .get(HITS_ATTRIBUTE)
        .and_then(|value| value.n.as_ref())
        .ok_or(HitCounterError::NoneValue)?;
    count
        .parse::<u64>()
        .map_err(|_| HitCounterError::InvalidCount(count.clone()))
}

fn parse_record(item: &HashMap<String, AttributeValue>) -> Result<HitRecord, HitCounterError> {
    let path = item
        .get(PATH_ATTRIBUTE)
        .and_then(|value| value.s.clone())
        .ok_or(HitCounterError::NoneValue)?;
    Ok(HitRecord {
        path,
        hits: parse_hits(item)?,
    })
}
