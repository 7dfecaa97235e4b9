use std::sync::Arc;

use logger::TracingLogger;

use business::application::prediction::predict::PredictPurchasesUseCaseImpl;
use business::domain::prediction::catalog::Catalog;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub prediction_api: crate::api::prediction::routes::PredictionApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Prediction use cases
        let predict_use_case = Arc::new(PredictPurchasesUseCaseImpl {
            catalog: Catalog::common_items(),
            logger,
        });

        let prediction_api = crate::api::prediction::routes::PredictionApi::new(predict_use_case);

        Self {
            health_api,
            prediction_api,
        }
    }
}
