use std::sync::Arc;

use logger::TracingLogger;
use marketplace::auth::AuthGatewayRest;
use marketplace::catalog::CatalogGatewayRest;
use marketplace::client::MarketplaceClient;
use marketplace::orders::OrderGatewayRest;
use marketplace::producer::ProducerGatewayRest;
use marketplace::ratings::RatingGatewayRest;
use storage::local_storage::LocalStorage;

use business::application::auth::login::LoginUseCaseImpl;
use business::application::auth::logout::LogoutUseCaseImpl;
use business::application::auth::register::RegisterProducerUseCaseImpl;
use business::application::cart::add_to_cart::AddToCartUseCaseImpl;
use business::application::cart::session::CartSession;
use business::application::catalog::get_farm::GetFarmUseCaseImpl;
use business::application::catalog::list_producers::ListProducersUseCaseImpl;
use business::application::checkout::place_order::PlaceOrderUseCaseImpl;
use business::application::order::get_client_orders::GetClientOrdersUseCaseImpl;
use business::application::order::get_producer_orders::GetProducerOrdersUseCaseImpl;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;
use business::application::producer::delete_product::DeleteProductUseCaseImpl;
use business::application::producer::get_dashboard::GetDashboardUseCaseImpl;
use business::application::producer::get_profile::GetProfileUseCaseImpl;
use business::application::producer::list_products::ListProductsUseCaseImpl;
use business::application::producer::save_product::SaveProductUseCaseImpl;
use business::application::producer::update_profile::UpdateProfileUseCaseImpl;
use business::application::rating::submit::SubmitRatingUseCaseImpl;

use crate::config::app_config::AppConfig;
use crate::setup::{cart_watcher, navigator::SessionNavigator};

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub session_api: crate::api::session::routes::SessionApi,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub checkout_api: crate::api::checkout::routes::CheckoutApi,
    pub orders_api: crate::api::orders::routes::OrdersApi,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub producer_api: crate::api::producer::routes::ProducerApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger::new("storefront"));
        let health_api = crate::api::health::routes::Api::new();

        // Session state
        let storage = Arc::new(LocalStorage::open(
            config.storage.path.clone(),
            Arc::new(TracingLogger::new("storage")),
        ));
        let navigator = Arc::new(SessionNavigator::new(logger.clone()));
        let cart = Arc::new(CartSession::new());
        cart_watcher::spawn(&cart, Arc::new(TracingLogger::new("cart")));

        // Infrastructure adapters
        let client = Arc::new(MarketplaceClient::new(
            config.marketplace.base_url.clone(),
            config.marketplace.auth_scheme.clone(),
            storage.clone(),
            navigator.clone(),
            Arc::new(TracingLogger::new("marketplace")),
        ));
        let catalog_gateway = Arc::new(CatalogGatewayRest::new(client.clone()));
        let order_gateway = Arc::new(OrderGatewayRest::new(client.clone()));
        let rating_gateway = Arc::new(RatingGatewayRest::new(client.clone()));
        let auth_gateway = Arc::new(AuthGatewayRest::new(client.clone()));
        let producer_gateway = Arc::new(ProducerGatewayRest::new(client));

        // Catalog and cart use cases
        let list_producers_use_case = Arc::new(ListProducersUseCaseImpl {
            gateway: catalog_gateway.clone(),
            logger: logger.clone(),
        });
        let get_farm_use_case = Arc::new(GetFarmUseCaseImpl {
            gateway: catalog_gateway.clone(),
            logger: logger.clone(),
        });
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            catalog: catalog_gateway,
            cart: cart.clone(),
            logger: logger.clone(),
        });

        // Checkout, order and rating use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            gateway: order_gateway.clone(),
            client_info: storage.clone(),
            cart: cart.clone(),
            logger: logger.clone(),
        });
        let get_client_orders_use_case = Arc::new(GetClientOrdersUseCaseImpl {
            gateway: order_gateway.clone(),
            client_info: storage.clone(),
            logger: logger.clone(),
        });
        let submit_rating_use_case = Arc::new(SubmitRatingUseCaseImpl {
            gateway: rating_gateway,
            client_info: storage.clone(),
            logger: logger.clone(),
        });
        let get_producer_orders_use_case = Arc::new(GetProducerOrdersUseCaseImpl {
            gateway: order_gateway.clone(),
            logger: logger.clone(),
        });
        let update_status_use_case = Arc::new(UpdateOrderStatusUseCaseImpl {
            gateway: order_gateway.clone(),
            logger: logger.clone(),
        });

        // Auth use cases
        let login_use_case = Arc::new(LoginUseCaseImpl {
            gateway: auth_gateway.clone(),
            credentials: storage.clone(),
            navigator: navigator.clone(),
            logger: logger.clone(),
        });
        let register_use_case = Arc::new(RegisterProducerUseCaseImpl {
            gateway: auth_gateway,
            navigator: navigator.clone(),
            logger: logger.clone(),
        });
        let logout_use_case = Arc::new(LogoutUseCaseImpl {
            credentials: storage.clone(),
            navigator: navigator.clone(),
            logger: logger.clone(),
        });

        // Producer area use cases
        let get_dashboard_use_case = Arc::new(GetDashboardUseCaseImpl {
            orders: order_gateway,
            producer: producer_gateway.clone(),
            logger: logger.clone(),
        });
        let get_profile_use_case = Arc::new(GetProfileUseCaseImpl {
            gateway: producer_gateway.clone(),
            logger: logger.clone(),
        });
        let update_profile_use_case = Arc::new(UpdateProfileUseCaseImpl {
            gateway: producer_gateway.clone(),
            logger: logger.clone(),
        });
        let list_products_use_case = Arc::new(ListProductsUseCaseImpl {
            gateway: producer_gateway.clone(),
            logger: logger.clone(),
        });
        let save_product_use_case = Arc::new(SaveProductUseCaseImpl {
            gateway: producer_gateway.clone(),
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            gateway: producer_gateway,
            logger,
        });

        let session_api = crate::api::session::routes::SessionApi::new(
            navigator.clone(),
            storage.clone(),
            cart.clone(),
        );

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            navigator.clone(),
            list_producers_use_case,
            get_farm_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(cart.clone(), add_to_cart_use_case);

        let checkout_api =
            crate::api::checkout::routes::CheckoutApi::new(storage, cart, place_order_use_case);

        let orders_api = crate::api::orders::routes::OrdersApi::new(
            navigator.clone(),
            get_client_orders_use_case,
            submit_rating_use_case,
            get_producer_orders_use_case,
            update_status_use_case,
        );

        let auth_api = crate::api::auth::routes::AuthApi::new(
            navigator.clone(),
            login_use_case,
            register_use_case,
            logout_use_case,
        );

        let producer_api = crate::api::producer::routes::ProducerApi::new(
            navigator,
            get_dashboard_use_case,
            get_profile_use_case,
            update_profile_use_case,
            list_products_use_case,
            save_product_use_case,
            delete_product_use_case,
        );

        Ok(Self {
            health_api,
            session_api,
            catalog_api,
            cart_api,
            checkout_api,
            orders_api,
            auth_api,
            producer_api,
        })
    }
}
