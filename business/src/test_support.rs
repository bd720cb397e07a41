use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use mockall::mock;

use crate::domain::auth::credential_store::CredentialStore;
use crate::domain::auth::gateway::AuthGateway;
use crate::domain::auth::model::{AuthTokens, IssuedTokens, LoginCredentials, ProducerRegistration};
use crate::domain::auth::navigator::Navigator;
use crate::domain::catalog::gateway::CatalogGateway;
use crate::domain::catalog::model::{CatalogProduct, ProducerSummary};
use crate::domain::errors::{GatewayError, StorageError};
use crate::domain::logger::Logger;
use crate::domain::order::client_info_store::ClientInfoStore;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::{ClientInfo, NewOrder, Order, OrderStatus};
use crate::domain::producer::gateway::ProducerGateway;
use crate::domain::producer::model::{
    ProducerProduct, ProducerProfile, ProductDraft, ProductStatus, ProfileUpdate,
};
use crate::domain::rating::gateway::RatingGateway;
use crate::domain::rating::model::NewRating;
use crate::domain::shared::value_objects::{OrderId, ProducerId, ProductId, UserId};

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub CatalogGw {}

    #[async_trait]
    impl CatalogGateway for CatalogGw {
        async fn list_producers(&self) -> Result<Vec<ProducerSummary>, GatewayError>;
        async fn get_producer(&self, id: ProducerId) -> Result<ProducerSummary, GatewayError>;
        async fn get_producer_products(&self, id: ProducerId) -> Result<Vec<CatalogProduct>, GatewayError>;
    }
}

mock! {
    pub OrderGw {}

    #[async_trait]
    impl OrderGateway for OrderGw {
        async fn create(&self, order: &NewOrder) -> Result<(), GatewayError>;
        async fn list_by_client_phone(&self, phone: &str) -> Result<Vec<Order>, GatewayError>;
        async fn list_for_producer(&self) -> Result<Vec<Order>, GatewayError>;
        async fn get_by_id(&self, id: OrderId) -> Result<Order, GatewayError>;
        async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, GatewayError>;
    }
}

mock! {
    pub RatingGw {}

    #[async_trait]
    impl RatingGateway for RatingGw {
        async fn submit(&self, rating: &NewRating) -> Result<(), GatewayError>;
    }
}

mock! {
    pub AuthGw {}

    #[async_trait]
    impl AuthGateway for AuthGw {
        async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedTokens, GatewayError>;
        async fn register(&self, registration: &ProducerRegistration) -> Result<(), GatewayError>;
    }
}

mock! {
    pub ProducerGw {}

    #[async_trait]
    impl ProducerGateway for ProducerGw {
        async fn get_profile(&self) -> Result<ProducerProfile, GatewayError>;
        async fn update_profile(&self, update: &ProfileUpdate) -> Result<ProducerProfile, GatewayError>;
        async fn list_products(&self) -> Result<Vec<ProducerProduct>, GatewayError>;
        async fn create_product(&self, draft: &ProductDraft) -> Result<ProducerProduct, GatewayError>;
        async fn update_product(&self, id: ProductId, draft: &ProductDraft) -> Result<ProducerProduct, GatewayError>;
        async fn delete_product(&self, id: ProductId) -> Result<(), GatewayError>;
    }
}

mock! {
    pub ClientInfoSt {}

    impl ClientInfoStore for ClientInfoSt {
        fn load(&self) -> Option<ClientInfo>;
        fn save(&self, info: &ClientInfo) -> Result<(), StorageError>;
    }
}

mock! {
    pub CredentialSt {}

    impl CredentialStore for CredentialSt {
        fn access_token(&self) -> Option<String>;
        fn store(&self, tokens: &AuthTokens) -> Result<(), StorageError>;
        fn clear(&self) -> Result<(), StorageError>;
    }
}

mock! {
    pub Nav {}

    impl Navigator for Nav {
        fn current_path(&self) -> String;
        fn navigate(&self, path: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

pub fn producer(id: u64, user_id: u64, name: &str) -> ProducerSummary {
    ProducerSummary {
        id: ProducerId::new(id),
        name: name.to_string(),
        user_id: UserId::new(user_id),
        city: Some("Ituiutaba".to_string()),
        average_rating: None,
    }
}

pub fn catalog_product(id: u64, name: &str, price: &str) -> CatalogProduct {
    CatalogProduct {
        id: ProductId::new(id),
        name: name.to_string(),
        description: None,
        price: dec(price),
        stock: 10,
        category: "Verduras".to_string(),
        unit: Some("kg".to_string()),
        image: None,
    }
}

pub fn order(id: u64, status: OrderStatus, created_at: DateTime<Utc>) -> Order {
    Order {
        id: OrderId::new(id),
        producer_name: Some("Sítio Boa Vista".to_string()),
        client_name: "Maria".to_string(),
        client_phone: "34999990000".to_string(),
        client_email: None,
        status,
        total_price: dec("12.50"),
        items: vec![],
        created_at,
        has_rating: false,
        rating_score: None,
    }
}

pub fn producer_product(id: u64, status: ProductStatus) -> ProducerProduct {
    ProducerProduct {
        id: ProductId::new(id),
        name: "Ovos Caipiras".to_string(),
        description: None,
        price: dec("15.00"),
        stock: 12,
        category: "Ovos e Laticínios".to_string(),
        status,
        unit: Some("dúzia".to_string()),
    }
}

pub fn producer_profile() -> ProducerProfile {
    ProducerProfile {
        id: ProducerId::new(1),
        name: "Sítio Boa Vista".to_string(),
        phone: Some("34999990000".to_string()),
        city: Some("Ituiutaba".to_string()),
        email: "sitio@mail.com".to_string(),
        cpf_cnpj: "12345678000199".to_string(),
        address: None,
        average_rating: 4.5,
        total_ratings: 2,
    }
}
