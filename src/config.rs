use crate::error::HitCounterError;

pub const HITS_TABLE_NAME: &str = "HITS_TABLE_NAME";
pub const DOWNSTREAM_FUNCTION_NAME: &str = "DOWNSTREAM_FUNCTION_NAME";

/// Deployment-time settings of the hit counter, read from the function environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub hits_table_name: String,
    pub downstream_function_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, HitCounterError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, HitCounterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            hits_table_name: required(&lookup, HITS_TABLE_NAME)?,
            downstream_function_name: required(&lookup, DOWNSTREAM_FUNCTION_NAME)?,
        })
    }
}

/// The viewer only reads the table, so it does not need a downstream function.
pub fn hits_table_name_from_env() -> Result<String, HitCounterError> {
    required(&|key: &str| std::env::var(key).ok(), HITS_TABLE_NAME)
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, HitCounterError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(HitCounterError::MissingConfig(key))
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, DOWNSTREAM_FUNCTION_NAME, HITS_TABLE_NAME};
    use crate::error::HitCounterError;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| values.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            (HITS_TABLE_NAME, "HitCounterHits"),
            (DOWNSTREAM_FUNCTION_NAME, "HelloHandler"),
        ]));
        assert_eq!(
            config.unwrap(),
            Config {
                hits_table_name: "HitCounterHits".to_string(),
                downstream_function_name: "HelloHandler".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_downstream() {
        let config = Config::from_lookup(lookup_from(&[(HITS_TABLE_NAME, "HitCounterHits")]));
        assert_eq!(
            config.err().unwrap(),
            HitCounterError::MissingConfig(DOWNSTREAM_FUNCTION_NAME)
        );
    }

    #[test]
    fn test_blank_value_is_missing() {
        let config = Config::from_lookup(lookup_from(&[
            (HITS_TABLE_NAME, "  "),
            (DOWNSTREAM_FUNCTION_NAME, "HelloHandler"),
        ]));
        assert_eq!(
            config.err().unwrap(),
            HitCounterError::MissingConfig(HITS_TABLE_NAME)
        );
    }
}
