use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::prediction::use_cases::predict::{
    PredictPurchasesParams, PredictPurchasesUseCase,
};

use crate::api::prediction::dto::{PredictRequest, PredictResponse};
use crate::api::tags::ApiTags;

pub struct PredictionApi {
    predict_use_case: Arc<dyn PredictPurchasesUseCase>,
}

impl PredictionApi {
    pub fn new(predict_use_case: Arc<dyn PredictPurchasesUseCase>) -> Self {
        Self { predict_use_case }
    }
}

/// Prediction API
///
/// Endpoint for predicting upcoming grocery purchases from a purchase history.
#[OpenApi]
impl PredictionApi {
    /// Predict upcoming purchases
    ///
    /// Returns up to 3 commonly purchased items not already present in the
    /// submitted history. The selection is random; repeated calls with the
    /// same history may return different items.
    #[oai(path = "/predict", method = "post", tag = "ApiTags::Predictions")]
    async fn predict(&self, body: Json<PredictRequest>) -> Json<PredictResponse> {
        let predictions = self
            .predict_use_case
            .execute(PredictPurchasesParams {
                history: body.0.history,
            })
            .await;

        Json(PredictResponse { predictions })
    }
}
