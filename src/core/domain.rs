use std::path::PathBuf;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts policy options for the circulation engine
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub institution_name: String,
    pub renewal_days: i64,
    pub page_size: usize,
    pub data_dir: PathBuf,
}

impl Configuration {
    pub fn new(institution_name: &str) -> Self {
        Configuration {
            institution_name: institution_name.to_string(),
            renewal_days: 7,
            page_size: 10,
            data_dir: PathBuf::from("data"),
        }
    }
}
