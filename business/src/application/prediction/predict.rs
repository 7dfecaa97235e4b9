use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::prediction::catalog::Catalog;
use crate::domain::prediction::selector::{DEFAULT_PREDICTION_LIMIT, select_predictions};
use crate::domain::prediction::use_cases::predict::{
    PredictPurchasesParams, PredictPurchasesUseCase,
};

pub struct PredictPurchasesUseCaseImpl {
    pub catalog: Catalog,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PredictPurchasesUseCase for PredictPurchasesUseCaseImpl {
    async fn execute(&self, params: PredictPurchasesParams) -> Vec<String> {
        self.logger.info(&format!(
            "Predicting purchases for history of {} items",
            params.history.len()
        ));

        // Thread-local generator, fresh per call; concurrent requests share
        // no state.
        let mut rng = rand::rng();
        let predictions = select_predictions(
            &self.catalog,
            &params.history,
            DEFAULT_PREDICTION_LIMIT,
            &mut rng,
        );

        self.logger
            .info(&format!("Selected {} predictions", predictions.len()));

        predictions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case() -> PredictPurchasesUseCaseImpl {
        PredictPurchasesUseCaseImpl {
            catalog: Catalog::common_items(),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_three_predictions_for_empty_history() {
        let use_case = use_case();

        let predictions = use_case
            .execute(PredictPurchasesParams { history: vec![] })
            .await;

        assert_eq!(predictions.len(), 3);
        for item in &predictions {
            assert!(use_case.catalog.contains(item));
        }
    }

    #[tokio::test]
    async fn should_exclude_purchased_items() {
        let use_case = use_case();
        let history = vec!["milk".to_string(), "bread".to_string()];

        let predictions = use_case
            .execute(PredictPurchasesParams {
                history: history.clone(),
            })
            .await;

        assert_eq!(predictions.len(), 3);
        for item in &predictions {
            assert!(!history.contains(item));
        }
    }

    #[tokio::test]
    async fn should_return_empty_when_everything_already_purchased() {
        let use_case = use_case();
        let history = use_case.catalog.items().to_vec();

        let predictions = use_case
            .execute(PredictPurchasesParams { history })
            .await;

        assert!(predictions.is_empty());
    }
}
