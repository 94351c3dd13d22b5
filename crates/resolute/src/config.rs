//! Search configuration.

use crate::error::Result;
use crate::inference::LiteralSelection;
use crate::selection::HeuristicKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options for one proof search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub heuristics: HeuristicKind,
    pub delete_tautologies: bool,
    pub forward_subsumption: bool,
    pub backward_subsumption: bool,
    /// `None` leaves every literal eligible for inferences
    pub literal_selection: Option<LiteralSelection>,
    /// Bound on given-clause iterations (`None` means no limit)
    pub max_iterations: Option<usize>,
    /// Wall-clock bound, in seconds in JSON
    #[serde(with = "duration_secs")]
    pub timeout: Option<Duration>,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            heuristics: HeuristicKind::default(),
            delete_tautologies: false,
            forward_subsumption: false,
            backward_subsumption: false,
            literal_selection: None,
            max_iterations: None,
            timeout: None,
        }
    }
}

impl SearchParams {
    /// All redundancy elimination switched on
    pub fn with_redundancy_elimination(mut self) -> Self {
        self.delete_tautologies = true;
        self.forward_subsumption = true;
        self.backward_subsumption = true;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => serializer.serialize_some(&d.as_secs_f64()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        let secs = Option::<f64>::deserialize(deserializer)?;
        match secs {
            Some(s) if s.is_finite() && s >= 0.0 => Ok(Some(Duration::from_secs_f64(s))),
            Some(s) => Err(serde::de::Error::custom(format!("invalid timeout {}", s))),
            None => Ok(None),
        }
    }
}
