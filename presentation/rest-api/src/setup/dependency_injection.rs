use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::settings::repository::SettingsRepositoryPostgres;
use persistence::testimonial::repository::TestimonialRepositoryPostgres;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::set_quantity::SetCartItemQuantityUseCaseImpl;
use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::update::UpdateCategoryUseCaseImpl;
use business::application::checkout::submit::SubmitOrderUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::settings::add_payment_method::AddPaymentMethodUseCaseImpl;
use business::application::settings::add_social_link::AddSocialLinkUseCaseImpl;
use business::application::settings::get::GetSiteSettingsUseCaseImpl;
use business::application::settings::remove_payment_method::RemovePaymentMethodUseCaseImpl;
use business::application::settings::remove_social_link::RemoveSocialLinkUseCaseImpl;
use business::application::settings::update_contact::UpdateContactInfoUseCaseImpl;
use business::application::testimonial::delete::DeleteTestimonialUseCaseImpl;
use business::application::testimonial::get_all::GetAllTestimonialsUseCaseImpl;
use business::application::testimonial::get_approved::GetApprovedTestimonialsUseCaseImpl;
use business::application::testimonial::set_approval::SetTestimonialApprovalUseCaseImpl;
use business::application::testimonial::submit::SubmitTestimonialUseCaseImpl;
use business::domain::admin::session::{AdminCredentials, AdminSession};

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub category_api: crate::api::category::routes::CategoryApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub testimonial_api: crate::api::testimonial::routes::TestimonialApi,
    pub settings_api: crate::api::settings::routes::SettingsApi,
    pub checkout_api: crate::api::checkout::routes::CheckoutApi,
    pub admin_api: crate::api::admin::routes::AdminApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, admin_credentials: AdminCredentials) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let testimonial_repository = Arc::new(TestimonialRepositoryPostgres::new(pool.clone()));
        let settings_repository = Arc::new(SettingsRepositoryPostgres::new(pool));

        let admin_session = Arc::new(AdminSession::new(admin_credentials));

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let search_products_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_products_by_category_use_case = Arc::new(GetProductsByCategoryUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Category use cases
        let get_all_categories_use_case = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let create_category_use_case = Arc::new(CreateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let update_category_use_case = Arc::new(UpdateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let delete_category_use_case = Arc::new(DeleteCategoryUseCaseImpl {
            repository: category_repository,
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository,
            logger: logger.clone(),
        });
        let set_cart_item_quantity_use_case = Arc::new(SetCartItemQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });

        // Testimonial use cases
        let submit_testimonial_use_case = Arc::new(SubmitTestimonialUseCaseImpl {
            repository: testimonial_repository.clone(),
            logger: logger.clone(),
        });
        let get_approved_testimonials_use_case = Arc::new(GetApprovedTestimonialsUseCaseImpl {
            repository: testimonial_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_testimonials_use_case = Arc::new(GetAllTestimonialsUseCaseImpl {
            repository: testimonial_repository.clone(),
            logger: logger.clone(),
        });
        let set_testimonial_approval_use_case = Arc::new(SetTestimonialApprovalUseCaseImpl {
            repository: testimonial_repository.clone(),
            logger: logger.clone(),
        });
        let delete_testimonial_use_case = Arc::new(DeleteTestimonialUseCaseImpl {
            repository: testimonial_repository,
            logger: logger.clone(),
        });

        // Settings use cases
        let get_settings_use_case = Arc::new(GetSiteSettingsUseCaseImpl {
            repository: settings_repository.clone(),
            logger: logger.clone(),
        });
        let update_contact_use_case = Arc::new(UpdateContactInfoUseCaseImpl {
            repository: settings_repository.clone(),
            logger: logger.clone(),
        });
        let add_social_link_use_case = Arc::new(AddSocialLinkUseCaseImpl {
            repository: settings_repository.clone(),
            logger: logger.clone(),
        });
        let remove_social_link_use_case = Arc::new(RemoveSocialLinkUseCaseImpl {
            repository: settings_repository.clone(),
            logger: logger.clone(),
        });
        let add_payment_method_use_case = Arc::new(AddPaymentMethodUseCaseImpl {
            repository: settings_repository.clone(),
            logger: logger.clone(),
        });
        let remove_payment_method_use_case = Arc::new(RemovePaymentMethodUseCaseImpl {
            repository: settings_repository.clone(),
            logger: logger.clone(),
        });

        // Checkout use case
        let submit_order_use_case = Arc::new(SubmitOrderUseCaseImpl {
            cart_repository,
            settings_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_product_use_case,
            get_all_products_use_case,
            get_product_by_id_use_case,
            search_products_use_case,
            get_products_by_category_use_case,
            update_product_use_case,
            delete_product_use_case,
            admin_session.clone(),
        );

        let category_api = crate::api::category::routes::CategoryApi::new(
            get_all_categories_use_case,
            create_category_use_case,
            update_category_use_case,
            delete_category_use_case,
            admin_session.clone(),
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_cart_item_use_case,
            set_cart_item_quantity_use_case,
            remove_cart_item_use_case,
            clear_cart_use_case,
        );

        let testimonial_api = crate::api::testimonial::routes::TestimonialApi::new(
            submit_testimonial_use_case,
            get_approved_testimonials_use_case,
            get_all_testimonials_use_case,
            set_testimonial_approval_use_case,
            delete_testimonial_use_case,
            admin_session.clone(),
        );

        let settings_api = crate::api::settings::routes::SettingsApi::new(
            get_settings_use_case,
            update_contact_use_case,
            add_social_link_use_case,
            remove_social_link_use_case,
            add_payment_method_use_case,
            remove_payment_method_use_case,
            admin_session.clone(),
        );

        let checkout_api = crate::api::checkout::routes::CheckoutApi::new(submit_order_use_case);

        let admin_api = crate::api::admin::routes::AdminApi::new(admin_session);

        Ok(Self {
            health_api,
            product_api,
            category_api,
            cart_api,
            testimonial_api,
            settings_api,
            checkout_api,
            admin_api,
        })
    }
}
