use serde::{Deserialize, Serialize};

/// 종목 레지스트리 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    pub code: String,
    pub name: String,
}

impl Stock {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Stock {
            code: code.into(),
            name: name.into(),
        }
    }
}
