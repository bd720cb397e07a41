use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use business::domain::errors::GatewayError;
use business::domain::producer::gateway::ProducerGateway;
use business::domain::producer::model::{
    ProducerProduct, ProducerProfile, ProductDraft, ProductStatus, ProfileUpdate,
};
use business::domain::shared::value_objects::{ProducerId, ProductId};

use crate::client::MarketplaceClient;
use crate::wire::{Listing, lenient_f64};

const PROFILE_PATH: &str = "/api/my-profile/";
const PRODUCTS_PATH: &str = "/api/products/";

#[derive(Debug, Deserialize)]
struct ProfileDto {
    id: u64,
    name: String,
    phone: Option<String>,
    city: Option<String>,
    #[serde(default)]
    email: String,
    #[serde(default)]
    cpf_cnpj: String,
    address: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    average_rating: Option<f64>,
    #[serde(default)]
    total_ratings: u32,
}

impl ProfileDto {
    fn into_domain(self) -> ProducerProfile {
        ProducerProfile {
            id: ProducerId::new(self.id),
            name: self.name,
            phone: self.phone,
            city: self.city,
            email: self.email,
            cpf_cnpj: self.cpf_cnpj,
            address: self.address,
            average_rating: self.average_rating.unwrap_or(0.0),
            total_ratings: self.total_ratings,
        }
    }
}

#[derive(Debug, Serialize)]
struct ProfileUpdateBody<'a> {
    name: &'a str,
    phone: Option<&'a str>,
    city: Option<&'a str>,
    address: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ProductDto {
    id: u64,
    name: String,
    description: Option<String>,
    price: BigDecimal,
    #[serde(default)]
    stock: i64,
    #[serde(default)]
    category: String,
    status: ProductStatus,
    unit: Option<String>,
}

impl ProductDto {
    fn into_domain(self) -> ProducerProduct {
        ProducerProduct {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category: self.category,
            status: self.status,
            unit: self.unit,
        }
    }
}

#[derive(Debug, Serialize)]
struct ProductBody<'a> {
    name: &'a str,
    description: Option<&'a str>,
    price: &'a BigDecimal,
    stock: i64,
    category: &'a str,
    status: ProductStatus,
    unit: Option<&'a str>,
}

impl<'a> From<&'a ProductDraft> for ProductBody<'a> {
    fn from(draft: &'a ProductDraft) -> Self {
        Self {
            name: &draft.name,
            description: draft.description.as_deref(),
            price: &draft.price,
            stock: draft.stock,
            category: &draft.category,
            status: draft.status,
            unit: draft.unit.as_deref(),
        }
    }
}

/// Endpoints of the logged-in producer. All of them need the stored token.
pub struct ProducerGatewayRest {
    client: Arc<MarketplaceClient>,
}

impl ProducerGatewayRest {
    pub fn new(client: Arc<MarketplaceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProducerGateway for ProducerGatewayRest {
    async fn get_profile(&self) -> Result<ProducerProfile, GatewayError> {
        let profile: ProfileDto = self.client.get(PROFILE_PATH).await?;
        Ok(profile.into_domain())
    }

    async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<ProducerProfile, GatewayError> {
        let body = ProfileUpdateBody {
            name: &update.name,
            phone: update.phone.as_deref(),
            city: update.city.as_deref(),
            address: update.address.as_deref(),
        };
        let profile: ProfileDto = self
            .client
            .send_json(Method::PATCH, PROFILE_PATH, &body)
            .await?;
        Ok(profile.into_domain())
    }

    async fn list_products(&self) -> Result<Vec<ProducerProduct>, GatewayError> {
        let products: Listing<ProductDto> = self.client.get(PRODUCTS_PATH).await?;
        Ok(products
            .into_vec()
            .into_iter()
            .map(ProductDto::into_domain)
            .collect())
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<ProducerProduct, GatewayError> {
        let product: ProductDto = self
            .client
            .send_json(Method::POST, PRODUCTS_PATH, &ProductBody::from(draft))
            .await?;
        Ok(product.into_domain())
    }

    async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<ProducerProduct, GatewayError> {
        let product: ProductDto = self
            .client
            .send_json(
                Method::PUT,
                &format!("{PRODUCTS_PATH}{id}/"),
                &ProductBody::from(draft),
            )
            .await?;
        Ok(product.into_domain())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), GatewayError> {
        self.client.delete(&format!("{PRODUCTS_PATH}{id}/")).await
    }
}
