use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use business::domain::errors::GatewayError;
use business::domain::rating::gateway::RatingGateway;
use business::domain::rating::model::NewRating;

use crate::client::MarketplaceClient;

#[derive(Debug, Serialize)]
struct RatingBody<'a> {
    order_id: u64,
    client_name: &'a str,
    client_phone: &'a str,
    score: u8,
    comment: &'a str,
}

pub struct RatingGatewayRest {
    client: Arc<MarketplaceClient>,
}

impl RatingGatewayRest {
    pub fn new(client: Arc<MarketplaceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RatingGateway for RatingGatewayRest {
    async fn submit(&self, rating: &NewRating) -> Result<(), GatewayError> {
        let body = RatingBody {
            order_id: rating.order_id.value(),
            client_name: &rating.client_name,
            client_phone: &rating.client_phone,
            score: rating.score.value(),
            comment: &rating.comment,
        };
        self.client
            .submit_json(Method::POST, "/api/ratings/", &body)
            .await
    }
}
