use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::application::cart::session::CartSession;
use business::domain::cart::use_cases::add_to_cart::{AddToCartParams, AddToCartUseCase};
use business::domain::shared::value_objects::{ProducerId, ProductId};

use crate::api::cart::dto::{AddToCartRequest, CartResponse, UpdateQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    cart: Arc<CartSession>,
    add_to_cart_use_case: Arc<dyn AddToCartUseCase>,
}

impl CartApi {
    pub fn new(cart: Arc<CartSession>, add_to_cart_use_case: Arc<dyn AddToCartUseCase>) -> Self {
        Self {
            cart,
            add_to_cart_use_case,
        }
    }

    fn view(&self) -> Json<CartResponse> {
        Json(CartResponse::from(&self.cart.snapshot()))
    }
}

/// Shopping cart API
///
/// One cart per storefront session, grouped by producer.
#[OpenApi]
impl CartApi {
    /// Show the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self) -> Json<CartResponse> {
        self.view()
    }

    /// Add a product to the cart
    ///
    /// Looks the product up in the producer's catalog. Adding a product that is
    /// already in the cart increases its quantity. The cart opens afterwards.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, body: Json<AddToCartRequest>) -> AddToCartResponse {
        let params = AddToCartParams {
            producer_id: ProducerId::new(body.0.producer_id),
            product_id: ProductId::new(body.0.product_id),
            quantity: body.0.quantity,
        };

        match self.add_to_cart_use_case.execute(params).await {
            Ok(_) => AddToCartResponse::Ok(self.view()),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddToCartResponse::BadRequest(json),
                    401 => AddToCartResponse::Unauthorized(json),
                    404 => AddToCartResponse::NotFound(json),
                    _ => AddToCartResponse::BadGateway(json),
                }
            }
        }
    }

    /// Change the quantity of a cart line
    ///
    /// A quantity of zero or less removes the line. Unknown products are ignored.
    #[oai(path = "/cart/items/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        product_id: Path<u64>,
        body: Json<UpdateQuantityRequest>,
    ) -> Json<CartResponse> {
        self.cart
            .update_quantity(ProductId::new(product_id.0), body.0.quantity);
        self.view()
    }

    /// Remove a cart line
    #[oai(path = "/cart/items/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, product_id: Path<u64>) -> Json<CartResponse> {
        self.cart.remove_item(ProductId::new(product_id.0));
        self.view()
    }

    /// Remove every line of one producer
    #[oai(
        path = "/cart/producers/:producer_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_producer(&self, producer_id: Path<u64>) -> Json<CartResponse> {
        self.cart
            .remove_producer_items(ProducerId::new(producer_id.0));
        self.view()
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self) -> Json<CartResponse> {
        self.cart.clear();
        self.view()
    }

    /// Open the cart sidebar
    #[oai(path = "/cart/open", method = "post", tag = "ApiTags::Cart")]
    async fn open(&self) -> Json<CartResponse> {
        self.cart.open();
        self.view()
    }

    /// Close the cart sidebar
    #[oai(path = "/cart/close", method = "post", tag = "ApiTags::Cart")]
    async fn close(&self) -> Json<CartResponse> {
        self.cart.close();
        self.view()
    }
}

#[derive(ApiResponse)]
enum AddToCartResponse {
    /// Product added
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    /// Invalid quantity or price
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    /// Rejected by the backend as unauthenticated
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    /// Producer or product not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    /// Marketplace backend unavailable
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
