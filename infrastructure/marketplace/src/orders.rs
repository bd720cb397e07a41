use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use business::domain::errors::GatewayError;
use business::domain::order::gateway::OrderGateway;
use business::domain::order::model::{NewOrder, Order, OrderItem, OrderStatus};
use business::domain::shared::value_objects::{OrderId, ProductId};

use crate::client::MarketplaceClient;
use crate::wire::Listing;

#[derive(Debug, Deserialize)]
struct OrderItemDto {
    product: Option<u64>,
    #[serde(default)]
    product_name: String,
    quantity: u32,
    unit_price: BigDecimal,
    subtotal: BigDecimal,
}

#[derive(Debug, Deserialize)]
struct OrderDto {
    id: u64,
    producer_name: Option<String>,
    client_name: String,
    client_phone: String,
    client_email: Option<String>,
    status: OrderStatus,
    total_price: BigDecimal,
    #[serde(default)]
    items: Vec<OrderItemDto>,
    created_at: DateTime<Utc>,
    has_rating: Option<bool>,
    rating_score: Option<u8>,
}

impl OrderDto {
    fn into_domain(self) -> Order {
        Order {
            id: OrderId::new(self.id),
            producer_name: self.producer_name,
            client_name: self.client_name,
            client_phone: self.client_phone,
            client_email: self.client_email.filter(|email| !email.is_empty()),
            status: self.status,
            total_price: self.total_price,
            items: self
                .items
                .into_iter()
                .map(|item| OrderItem {
                    product: item.product.map(ProductId::new),
                    product_name: item.product_name,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    subtotal: item.subtotal,
                })
                .collect(),
            created_at: self.created_at,
            has_rating: self.has_rating.unwrap_or(false),
            rating_score: self.rating_score,
        }
    }
}

#[derive(Debug, Serialize)]
struct NewOrderItemBody<'a> {
    product: Option<u64>,
    product_name: &'a str,
    quantity: u32,
    unit_price: &'a BigDecimal,
    subtotal: &'a BigDecimal,
}

#[derive(Debug, Serialize)]
struct NewOrderBody<'a> {
    producer: u64,
    client_name: &'a str,
    client_phone: &'a str,
    client_email: &'a str,
    total_price: &'a BigDecimal,
    items: Vec<NewOrderItemBody<'a>>,
}

impl<'a> From<&'a NewOrder> for NewOrderBody<'a> {
    fn from(order: &'a NewOrder) -> Self {
        Self {
            producer: order.producer.value(),
            client_name: &order.client.name,
            client_phone: &order.client.phone,
            client_email: order.client.email().unwrap_or_default(),
            total_price: &order.total_price,
            items: order
                .items
                .iter()
                .map(|item| NewOrderItemBody {
                    product: item.product.map(|id| id.value()),
                    product_name: &item.product_name,
                    quantity: item.quantity,
                    unit_price: &item.unit_price,
                    subtotal: &item.subtotal,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct StatusBody {
    status: OrderStatus,
}

pub struct OrderGatewayRest {
    client: Arc<MarketplaceClient>,
}

impl OrderGatewayRest {
    pub fn new(client: Arc<MarketplaceClient>) -> Self {
        Self { client }
    }
}

fn into_orders(orders: Listing<OrderDto>) -> Vec<Order> {
    orders
        .into_vec()
        .into_iter()
        .map(OrderDto::into_domain)
        .collect()
}

#[async_trait]
impl OrderGateway for OrderGatewayRest {
    async fn create(&self, order: &NewOrder) -> Result<(), GatewayError> {
        self.client
            .submit_json(Method::POST, "/api/orders/", &NewOrderBody::from(order))
            .await
    }

    async fn list_by_client_phone(&self, phone: &str) -> Result<Vec<Order>, GatewayError> {
        let orders = self
            .client
            .get_with_query("/api/orders/", &[("client_phone", phone)])
            .await?;
        Ok(into_orders(orders))
    }

    async fn list_for_producer(&self) -> Result<Vec<Order>, GatewayError> {
        let orders = self.client.get("/api/orders/").await?;
        Ok(into_orders(orders))
    }

    async fn get_by_id(&self, id: OrderId) -> Result<Order, GatewayError> {
        let order: OrderDto = self.client.get(&format!("/api/orders/{id}/")).await?;
        Ok(order.into_domain())
    }

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, GatewayError> {
        let order: OrderDto = self
            .client
            .send_json(
                Method::PATCH,
                &format!("/api/orders/{id}/"),
                &StatusBody { status },
            )
            .await?;
        Ok(order.into_domain())
    }
}
