pub mod shared {
    pub mod infrastructure {
        pub mod rate_limiter;
    }
}

pub mod modules {
    pub mod products {
        pub mod core {
            pub mod product;
            pub mod validation;
        }
        pub mod ports {
            pub mod catalog_store;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod create_product {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_product {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                    pub mod rate_limit;
                }
            }
            pub mod update_product {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_product {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_errors;
            }
            pub mod outbound {
                pub mod catalog_store_in_memory;
            }
        }
    }
}

pub mod shell;
