use async_trait::async_trait;

pub struct PredictPurchasesParams {
    pub history: Vec<String>,
}

#[async_trait]
pub trait PredictPurchasesUseCase: Send + Sync {
    async fn execute(&self, params: PredictPurchasesParams) -> Vec<String>;
}
