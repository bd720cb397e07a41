use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::catalog::use_cases::get_farm::{GetFarmParams, GetFarmUseCase};
use business::domain::catalog::use_cases::list_producers::ListProducersUseCase;
use business::domain::shared::value_objects::ProducerId;

use crate::api::catalog::dto::{FarmResponse, ProducerResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::setup::navigator::{HOME_ROUTE, SessionNavigator, farm_route};

pub struct CatalogApi {
    navigator: Arc<SessionNavigator>,
    list_producers_use_case: Arc<dyn ListProducersUseCase>,
    get_farm_use_case: Arc<dyn GetFarmUseCase>,
}

impl CatalogApi {
    pub fn new(
        navigator: Arc<SessionNavigator>,
        list_producers_use_case: Arc<dyn ListProducersUseCase>,
        get_farm_use_case: Arc<dyn GetFarmUseCase>,
    ) -> Self {
        Self {
            navigator,
            list_producers_use_case,
            get_farm_use_case,
        }
    }
}

/// Public catalog API
///
/// Producer listing and farm pages. No login required.
#[OpenApi]
impl CatalogApi {
    /// List producers
    #[oai(path = "/catalog/producers", method = "get", tag = "ApiTags::Catalog")]
    async fn list_producers(&self) -> ListProducersResponse {
        self.navigator.visit(HOME_ROUTE);

        match self.list_producers_use_case.execute().await {
            Ok(producers) => ListProducersResponse::Ok(Json(
                producers.into_iter().map(ProducerResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProducersResponse::BadGateway(json)
            }
        }
    }

    /// Farm page
    ///
    /// Returns the producer and its products.
    #[oai(path = "/catalog/producers/:id", method = "get", tag = "ApiTags::Catalog")]
    async fn get_farm(&self, id: Path<u64>) -> GetFarmResponse {
        self.navigator.visit(&farm_route(id.0));

        let params = GetFarmParams {
            producer_id: ProducerId::new(id.0),
        };

        match self.get_farm_use_case.execute(params).await {
            Ok(farm) => GetFarmResponse::Ok(Json(farm.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetFarmResponse::NotFound(json),
                    _ => GetFarmResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
enum ListProducersResponse {
    /// Producers of the marketplace
    #[oai(status = 200)]
    Ok(Json<Vec<ProducerResponse>>),
    /// Marketplace backend unavailable
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum GetFarmResponse {
    /// Producer and products
    #[oai(status = 200)]
    Ok(Json<FarmResponse>),
    /// Producer not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    /// Marketplace backend unavailable
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
