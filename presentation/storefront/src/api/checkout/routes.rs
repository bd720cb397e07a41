use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::application::cart::session::CartSession;
use business::domain::checkout::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};
use business::domain::order::client_info_store::ClientInfoStore;
use business::domain::shared::value_objects::ProducerId;

use crate::api::checkout::dto::{ClientInfoRequest, ClientInfoResponse, OrderPlacedResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    client_info: Arc<dyn ClientInfoStore>,
    cart: Arc<CartSession>,
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
}

impl CheckoutApi {
    pub fn new(
        client_info: Arc<dyn ClientInfoStore>,
        cart: Arc<CartSession>,
        place_order_use_case: Arc<dyn PlaceOrderUseCase>,
    ) -> Self {
        Self {
            client_info,
            cart,
            place_order_use_case,
        }
    }
}

/// Checkout API
///
/// Each producer group of the cart is sent as a separate order.
#[OpenApi]
impl CheckoutApi {
    /// Saved client info
    ///
    /// Returns the details used on the last checkout, or blanks.
    #[oai(path = "/checkout/client-info", method = "get", tag = "ApiTags::Checkout")]
    async fn client_info(&self) -> Json<ClientInfoResponse> {
        Json(self.client_info.load().unwrap_or_default().into())
    }

    /// Place the order of one producer
    ///
    /// Sends that producer's cart lines, saves the client info and removes the
    /// lines from the cart.
    #[oai(path = "/checkout/:producer_id", method = "post", tag = "ApiTags::Checkout")]
    async fn place_order(
        &self,
        producer_id: Path<u64>,
        body: Json<ClientInfoRequest>,
    ) -> PlaceOrderResponse {
        let params = PlaceOrderParams {
            producer_id: ProducerId::new(producer_id.0),
            client: body.0.into(),
        };

        match self.place_order_use_case.execute(params).await {
            Ok(order) => PlaceOrderResponse::Created(Json(OrderPlacedResponse::new(
                order,
                self.cart.summary().into(),
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    401 => PlaceOrderResponse::Unauthorized(json),
                    _ => PlaceOrderResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
enum PlaceOrderResponse {
    /// Order sent to the producer
    #[oai(status = 201)]
    Created(Json<OrderPlacedResponse>),
    /// Missing client details, nothing in the cart for that producer, or rejected by the backend
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    /// Rejected by the backend as unauthenticated; the stored login was cleared
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    /// Marketplace backend unavailable
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
