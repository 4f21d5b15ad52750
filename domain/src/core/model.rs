//! Model value object identifying the remote text-generation model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Remote text-generation model (Value Object)
///
/// All three analysis tasks talk to the same completion endpoint; the model
/// identifier is sent verbatim in every request body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    LlamaScout,
    Llama33,
    Llama31,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::LlamaScout => "llama-4-scout-17b-16e-instruct",
            Model::Llama33 => "llama-3.3-70b",
            Model::Llama31 => "llama3.1-8b",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (Llama 4 Scout)
    fn default() -> Self {
        Model::LlamaScout
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "llama-4-scout-17b-16e-instruct" => Model::LlamaScout,
            "llama-3.3-70b" => Model::Llama33,
            "llama3.1-8b" => Model::Llama31,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse::<Model>() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
