use std::sync::{Arc, RwLock};

use business::domain::auth::navigator::Navigator;
use business::domain::logger::Logger;

pub const HOME_ROUTE: &str = "/";
pub const PRODUCER_REGISTER_ROUTE: &str = "/cadastro-produtor";
pub const STORE_PROFILE_ROUTE: &str = "/perfil-loja";
pub const MY_PRODUCTS_ROUTE: &str = "/meus-produtos";
pub const PRODUCER_ORDERS_ROUTE: &str = "/pedidos";

pub fn farm_route(producer_id: u64) -> String {
    format!("/fazenda/{producer_id}")
}

/// The page the storefront session is on.
///
/// Page endpoints record their route before calling the backend, so a redirect
/// raised while serving them replaces it and shows up in `GET /session`.
pub struct SessionNavigator {
    current: RwLock<String>,
    logger: Arc<dyn Logger>,
}

impl SessionNavigator {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            current: RwLock::new(HOME_ROUTE.to_string()),
            logger,
        }
    }

    pub fn visit(&self, path: &str) {
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = path.to_string();
    }
}

impl Navigator for SessionNavigator {
    fn current_path(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn navigate(&self, path: &str) {
        self.logger.info(&format!("Redirecting session to {path}"));
        self.visit(path);
    }
}
