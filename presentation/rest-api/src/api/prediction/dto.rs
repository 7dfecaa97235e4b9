use poem_openapi::Object;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct PredictRequest {
    /// Item names already purchased. A missing field is treated as an empty
    /// history.
    #[oai(default)]
    #[serde(default)]
    pub history: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct PredictResponse {
    /// Suggested item names, at most 3, none of them in the request history
    pub predictions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_missing_history_to_empty() {
        let request: PredictRequest = serde_json::from_str("{}").unwrap();
        assert!(request.history.is_empty());
    }

    #[test]
    fn should_deserialize_history_field() {
        let request: PredictRequest =
            serde_json::from_str(r#"{"history": ["milk", "bread"]}"#).unwrap();
        assert_eq!(request.history, vec!["milk", "bread"]);
    }

    #[test]
    fn should_serialize_predictions_field() {
        let response = PredictResponse {
            predictions: vec!["apples".to_string()],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"predictions":["apples"]}"#);
    }
}
