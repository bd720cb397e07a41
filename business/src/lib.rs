pub mod application {
    pub mod auth {
        pub mod login;
        pub mod logout;
        pub mod register;
    }
    pub mod cart {
        pub mod add_to_cart;
        pub mod session;
    }
    pub mod catalog {
        pub mod get_farm;
        pub mod list_producers;
    }
    pub mod checkout {
        pub mod place_order;
    }
    pub mod order {
        pub mod get_client_orders;
        pub mod get_producer_orders;
        pub mod update_status;
    }
    pub mod producer {
        pub mod delete_product;
        pub mod get_dashboard;
        pub mod get_profile;
        pub mod list_products;
        pub mod save_product;
        pub mod update_profile;
    }
    pub mod rating {
        pub mod submit;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod credential_store;
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod navigator;
        pub mod password;
        pub mod use_cases {
            pub mod login;
            pub mod logout;
            pub mod register;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod store;
        pub mod use_cases {
            pub mod add_to_cart;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod get_farm;
            pub mod list_producers;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod use_cases {
            pub mod place_order;
        }
    }
    pub mod order {
        pub mod client_info_store;
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod get_client_orders;
            pub mod get_producer_orders;
            pub mod update_status;
        }
    }
    pub mod producer {
        pub mod dashboard;
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod delete_product;
            pub mod get_dashboard;
            pub mod get_profile;
            pub mod list_products;
            pub mod save_product;
            pub mod update_profile;
        }
    }
    pub mod rating {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod submit;
        }
    }
    pub mod shared {
        pub mod money;
        pub mod value_objects;
    }
}

#[cfg(test)]
pub(crate) mod test_support;
