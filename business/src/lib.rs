pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
        pub mod set_quantity;
    }
    pub mod category {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod update;
    }
    pub mod checkout {
        pub mod submit;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_category;
        pub mod get_by_id;
        pub mod search;
        pub mod update;
    }
    pub mod settings {
        pub mod add_payment_method;
        pub mod add_social_link;
        pub mod get;
        pub mod remove_payment_method;
        pub mod remove_social_link;
        pub mod update_contact;
    }
    pub mod testimonial {
        pub mod delete;
        pub mod get_all;
        pub mod get_approved;
        pub mod set_approval;
        pub mod submit;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod admin {
        pub mod session;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
            pub mod set_quantity;
        }
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod update;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod message;
        pub mod model;
        pub mod use_cases {
            pub mod submit;
        }
    }
    pub mod product {
        pub mod catalog;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_category;
            pub mod get_by_id;
            pub mod search;
            pub mod update;
        }
    }
    pub mod settings {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_payment_method;
            pub mod add_social_link;
            pub mod get;
            pub mod remove_payment_method;
            pub mod remove_social_link;
            pub mod update_contact;
        }
    }
    pub mod shared {
        pub mod currency;
        pub mod value_objects;
    }
    pub mod testimonial {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
            pub mod get_approved;
            pub mod set_approval;
            pub mod submit;
        }
    }
}
