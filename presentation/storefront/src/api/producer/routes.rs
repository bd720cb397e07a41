use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::auth::navigator::PRODUCER_DASHBOARD_ROUTE;
use business::domain::producer::use_cases::delete_product::{
    DeleteProductParams, DeleteProductUseCase,
};
use business::domain::producer::use_cases::get_dashboard::GetDashboardUseCase;
use business::domain::producer::use_cases::get_profile::GetProfileUseCase;
use business::domain::producer::use_cases::list_products::ListProductsUseCase;
use business::domain::producer::use_cases::save_product::{
    SaveProductParams, SaveProductUseCase,
};
use business::domain::producer::use_cases::update_profile::UpdateProfileUseCase;
use business::domain::shared::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::producer::dto::{
    DashboardResponse, ProducerProductResponse, ProductRequest, ProfileResponse,
    ProfileUpdateRequest,
};
use crate::api::tags::ApiTags;
use crate::setup::navigator::{MY_PRODUCTS_ROUTE, STORE_PROFILE_ROUTE, SessionNavigator};

pub struct ProducerApi {
    navigator: Arc<SessionNavigator>,
    get_dashboard_use_case: Arc<dyn GetDashboardUseCase>,
    get_profile_use_case: Arc<dyn GetProfileUseCase>,
    update_profile_use_case: Arc<dyn UpdateProfileUseCase>,
    list_products_use_case: Arc<dyn ListProductsUseCase>,
    save_product_use_case: Arc<dyn SaveProductUseCase>,
    delete_product_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProducerApi {
    pub fn new(
        navigator: Arc<SessionNavigator>,
        get_dashboard_use_case: Arc<dyn GetDashboardUseCase>,
        get_profile_use_case: Arc<dyn GetProfileUseCase>,
        update_profile_use_case: Arc<dyn UpdateProfileUseCase>,
        list_products_use_case: Arc<dyn ListProductsUseCase>,
        save_product_use_case: Arc<dyn SaveProductUseCase>,
        delete_product_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            navigator,
            get_dashboard_use_case,
            get_profile_use_case,
            update_profile_use_case,
            list_products_use_case,
            save_product_use_case,
            delete_product_use_case,
        }
    }
}

fn invalid_price() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("ValidationError", "producer.invalid_price"))
}

/// Producer area API
///
/// Dashboard, store profile and product management. Requires a logged-in
/// producer; an expired session answers 401 and moves to the login page.
#[OpenApi]
impl ProducerApi {
    /// Producer dashboard
    ///
    /// Monthly revenue, new orders this week, active products, average rating,
    /// the last seven days of sales and the five most recent orders.
    #[oai(path = "/producer/dashboard", method = "get", tag = "ApiTags::Producer")]
    async fn dashboard(&self) -> GetDashboardResponse {
        self.navigator.visit(PRODUCER_DASHBOARD_ROUTE);

        match self.get_dashboard_use_case.execute().await {
            Ok(dashboard) => GetDashboardResponse::Ok(Json(dashboard.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetDashboardResponse::Unauthorized(json),
                    _ => GetDashboardResponse::BadGateway(json),
                }
            }
        }
    }

    /// Store profile
    #[oai(path = "/producer/profile", method = "get", tag = "ApiTags::Producer")]
    async fn profile(&self) -> ProfileResult {
        self.navigator.visit(STORE_PROFILE_ROUTE);

        match self.get_profile_use_case.execute().await {
            Ok(profile) => ProfileResult::Ok(Json(profile.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ProfileResult::BadRequest(json),
                    401 => ProfileResult::Unauthorized(json),
                    _ => ProfileResult::BadGateway(json),
                }
            }
        }
    }

    /// Update the store profile
    #[oai(path = "/producer/profile", method = "patch", tag = "ApiTags::Producer")]
    async fn update_profile(&self, body: Json<ProfileUpdateRequest>) -> ProfileResult {
        self.navigator.visit(STORE_PROFILE_ROUTE);

        match self.update_profile_use_case.execute(body.0.into()).await {
            Ok(profile) => ProfileResult::Ok(Json(profile.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ProfileResult::BadRequest(json),
                    401 => ProfileResult::Unauthorized(json),
                    _ => ProfileResult::BadGateway(json),
                }
            }
        }
    }

    /// List the producer's products
    #[oai(path = "/producer/products", method = "get", tag = "ApiTags::Producer")]
    async fn list_products(&self) -> ListProductsResponse {
        self.navigator.visit(MY_PRODUCTS_ROUTE);

        match self.list_products_use_case.execute().await {
            Ok(products) => ListProductsResponse::Ok(Json(
                products
                    .into_iter()
                    .map(ProducerProductResponse::from)
                    .collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => ListProductsResponse::Unauthorized(json),
                    _ => ListProductsResponse::BadGateway(json),
                }
            }
        }
    }

    /// Create a product
    #[oai(path = "/producer/products", method = "post", tag = "ApiTags::Producer")]
    async fn create_product(&self, body: Json<ProductRequest>) -> SaveProductResponse {
        self.navigator.visit(MY_PRODUCTS_ROUTE);

        let Some(draft) = body.0.into_draft() else {
            return SaveProductResponse::BadRequest(invalid_price());
        };

        self.save(SaveProductParams { id: None, draft }).await
    }

    /// Update a product
    #[oai(
        path = "/producer/products/:id",
        method = "put",
        tag = "ApiTags::Producer"
    )]
    async fn update_product(
        &self,
        id: Path<u64>,
        body: Json<ProductRequest>,
    ) -> SaveProductResponse {
        self.navigator.visit(MY_PRODUCTS_ROUTE);

        let Some(draft) = body.0.into_draft() else {
            return SaveProductResponse::BadRequest(invalid_price());
        };

        self.save(SaveProductParams {
            id: Some(ProductId::new(id.0)),
            draft,
        })
        .await
    }

    /// Delete a product
    #[oai(
        path = "/producer/products/:id",
        method = "delete",
        tag = "ApiTags::Producer"
    )]
    async fn delete_product(&self, id: Path<u64>) -> DeleteProductResponse {
        self.navigator.visit(MY_PRODUCTS_ROUTE);

        let params = DeleteProductParams {
            id: ProductId::new(id.0),
        };

        match self.delete_product_use_case.execute(params).await {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => DeleteProductResponse::Unauthorized(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::BadGateway(json),
                }
            }
        }
    }
}

impl ProducerApi {
    async fn save(&self, params: SaveProductParams) -> SaveProductResponse {
        let creating = params.id.is_none();

        match self.save_product_use_case.execute(params).await {
            Ok(product) if creating => SaveProductResponse::Created(Json(product.into())),
            Ok(product) => SaveProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SaveProductResponse::BadRequest(json),
                    401 => SaveProductResponse::Unauthorized(json),
                    404 => SaveProductResponse::NotFound(json),
                    _ => SaveProductResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
enum GetDashboardResponse {
    /// Dashboard figures
    #[oai(status = 200)]
    Ok(Json<DashboardResponse>),
    /// Session expired
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    /// Marketplace backend unavailable
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum ProfileResult {
    /// Store profile
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),
    /// Invalid profile fields
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    /// Session expired
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    /// Marketplace backend unavailable
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum ListProductsResponse {
    /// Products of the logged-in producer
    #[oai(status = 200)]
    Ok(Json<Vec<ProducerProductResponse>>),
    /// Session expired
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    /// Marketplace backend unavailable
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum SaveProductResponse {
    /// Product updated
    #[oai(status = 200)]
    Ok(Json<ProducerProductResponse>),
    /// Product created
    #[oai(status = 201)]
    Created(Json<ProducerProductResponse>),
    /// Invalid product fields
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    /// Session expired
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    /// Product not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    /// Marketplace backend unavailable
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum DeleteProductResponse {
    /// Product deleted
    #[oai(status = 204)]
    NoContent,
    /// Session expired
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    /// Product not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    /// Marketplace backend unavailable
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
