use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::auth::navigator::CLIENT_HOME_ROUTE;
use business::domain::order::use_cases::get_client_orders::GetClientOrdersUseCase;
use business::domain::order::use_cases::get_producer_orders::GetProducerOrdersUseCase;
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};
use business::domain::rating::use_cases::submit::{SubmitRatingParams, SubmitRatingUseCase};
use business::domain::shared::value_objects::OrderId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::orders::dto::{OrderResponse, RatingRequest, UpdateStatusRequest};
use crate::api::tags::ApiTags;
use crate::setup::navigator::{PRODUCER_ORDERS_ROUTE, SessionNavigator};

pub struct OrdersApi {
    navigator: Arc<SessionNavigator>,
    get_client_orders_use_case: Arc<dyn GetClientOrdersUseCase>,
    submit_rating_use_case: Arc<dyn SubmitRatingUseCase>,
    get_producer_orders_use_case: Arc<dyn GetProducerOrdersUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
}

impl OrdersApi {
    pub fn new(
        navigator: Arc<SessionNavigator>,
        get_client_orders_use_case: Arc<dyn GetClientOrdersUseCase>,
        submit_rating_use_case: Arc<dyn SubmitRatingUseCase>,
        get_producer_orders_use_case: Arc<dyn GetProducerOrdersUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    ) -> Self {
        Self {
            navigator,
            get_client_orders_use_case,
            submit_rating_use_case,
            get_producer_orders_use_case,
            update_status_use_case,
        }
    }
}

/// Orders API
///
/// The client's order history with ratings, and the producer's order desk.
#[OpenApi]
impl OrdersApi {
    /// Client order history
    ///
    /// Orders placed with the saved client phone. Empty until the first checkout.
    #[oai(path = "/client/orders", method = "get", tag = "ApiTags::Orders")]
    async fn client_orders(&self) -> ListOrdersResponse {
        self.navigator.visit(CLIENT_HOME_ROUTE);

        match self.get_client_orders_use_case.execute().await {
            Ok(orders) => ListOrdersResponse::Ok(Json(
                orders.into_iter().map(OrderResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => ListOrdersResponse::Unauthorized(json),
                    _ => ListOrdersResponse::BadGateway(json),
                }
            }
        }
    }

    /// Rate a delivered order
    #[oai(
        path = "/client/orders/:id/rating",
        method = "post",
        tag = "ApiTags::Orders"
    )]
    async fn rate(&self, id: Path<u64>, body: Json<RatingRequest>) -> RateOrderResponse {
        let params = SubmitRatingParams {
            order_id: OrderId::new(id.0),
            score: body.0.score,
            comment: body.0.comment,
        };

        match self.submit_rating_use_case.execute(params).await {
            Ok(()) => RateOrderResponse::Created,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RateOrderResponse::BadRequest(json),
                    401 => RateOrderResponse::Unauthorized(json),
                    404 => RateOrderResponse::NotFound(json),
                    _ => RateOrderResponse::BadGateway(json),
                }
            }
        }
    }

    /// Producer orders
    ///
    /// Orders received by the logged-in producer, newest first.
    #[oai(path = "/producer/orders", method = "get", tag = "ApiTags::Orders")]
    async fn producer_orders(&self) -> ListOrdersResponse {
        self.navigator.visit(PRODUCER_ORDERS_ROUTE);

        match self.get_producer_orders_use_case.execute().await {
            Ok(orders) => ListOrdersResponse::Ok(Json(
                orders.into_iter().map(OrderResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => ListOrdersResponse::Unauthorized(json),
                    _ => ListOrdersResponse::BadGateway(json),
                }
            }
        }
    }

    /// Move an order to a new status
    ///
    /// Pendente can become Aceito or Cancelado; Aceito can become Entregue or Cancelado.
    #[oai(
        path = "/producer/orders/:id/status",
        method = "patch",
        tag = "ApiTags::Orders"
    )]
    async fn update_status(
        &self,
        id: Path<u64>,
        body: Json<UpdateStatusRequest>,
    ) -> UpdateStatusResponse {
        self.navigator.visit(PRODUCER_ORDERS_ROUTE);

        let params = UpdateOrderStatusParams {
            id: OrderId::new(id.0),
            status: body.0.status.into(),
        };

        match self.update_status_use_case.execute(params).await {
            Ok(order) => UpdateStatusResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateStatusResponse::BadRequest(json),
                    401 => UpdateStatusResponse::Unauthorized(json),
                    404 => UpdateStatusResponse::NotFound(json),
                    409 => UpdateStatusResponse::Conflict(json),
                    _ => UpdateStatusResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
enum ListOrdersResponse {
    /// Orders
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    /// Session expired
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    /// Marketplace backend unavailable
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum RateOrderResponse {
    /// Rating sent
    #[oai(status = 201)]
    Created,
    /// Invalid score, missing client info or rejected by the backend
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    /// Order not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    /// Marketplace backend unavailable
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum UpdateStatusResponse {
    /// Updated order
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    /// Rejected by the backend
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    /// Session expired
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    /// Order not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    /// Transition not allowed from the current status
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    /// Marketplace backend unavailable
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
