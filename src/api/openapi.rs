use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::ad::domain::entities::{Ad, AdPlacement};
use crate::modules::blog::application::ports::outgoing::blog_query::BlogCard;
use crate::modules::blog::application::ports::outgoing::blog_repository::BlogResult;
use crate::modules::contact::adapter::incoming::web::routes::SubmitContactRequest;
use crate::modules::contact::domain::entities::Contact;
use crate::modules::personal_details::domain::entities::{PersonalDetails, SocialLink};
use crate::modules::portfolio::application::ports::outgoing::portfolio_query::PortfolioCard;
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::PortfolioResult;
use crate::modules::seo::domain::entities::SeoEntry;
use crate::modules::service::domain::entities::ServiceOffering;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Public read API of the portfolio CMS. Admin endpoints require a Bearer token.",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Portfolio
        crate::modules::portfolio::adapter::incoming::web::routes::get_public_portfolios_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_public_portfolio_handler,

        // Blog
        crate::modules::blog::adapter::incoming::web::routes::get_public_blogs_handler,
        crate::modules::blog::adapter::incoming::web::routes::get_public_blog_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,

        // Profile
        crate::modules::personal_details::adapter::incoming::web::routes::get_personal_details_handler,

        // Ads
        crate::modules::ad::adapter::incoming::web::routes::list_active_ads_handler,

        // SEO
        crate::modules::seo::adapter::incoming::web::routes::get_seo_handler,

        // Services
        crate::modules::service::adapter::incoming::web::routes::list_services_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            PortfolioCard,
            PortfolioResult,
            BlogCard,
            BlogResult,
            SubmitContactRequest,
            Contact,
            PersonalDetails,
            SocialLink,
            Ad,
            AdPlacement,
            SeoEntry,
            ServiceOffering,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "portfolio", description = "Published portfolio entries"),
        (name = "blog", description = "Published blog posts"),
        (name = "contact", description = "Visitor contact form"),
        (name = "personal-details", description = "Site owner profile"),
        (name = "ads", description = "Live advertisements"),
        (name = "seo", description = "Per-page SEO metadata"),
        (name = "services", description = "Offered services"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Identity provider access token"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_public_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/portfolio",
            "/api/portfolio/{slug}",
            "/api/blog",
            "/api/blog/{slug}",
            "/api/contact",
            "/api/personal-details",
            "/api/ads",
            "/api/seo/{page}",
            "/api/services",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
        assert!(!paths.iter().any(|p| p.starts_with("/api/admin")));
    }
}
