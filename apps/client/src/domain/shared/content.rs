use serde::{Deserialize, Serialize};
use validator::Validate;

/// Text body of a post or comment, trimmed, 1 to 500 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Content {
    #[validate(length(min = 1, max = 500))]
    pub value: String,
}

impl Content {
    pub fn new(value: &str) -> Result<Self, validator::ValidationErrors> {
        let content = Self {
            value: value.trim().to_string(),
        };
        content.validate()?;
        Ok(content)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}
