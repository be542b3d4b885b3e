pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::email;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::AdminPolicy;
use crate::auth::application::ports::outgoing::TokenVerifier;
use crate::email::adapter::outgoing::{SmtpConfig, SmtpEmailSender};
use crate::email::application::ports::outgoing::EmailSender;
use crate::modules::ad::adapter::outgoing::AdRepositoryPostgres;
use crate::modules::ad::application::ad_use_cases::AdUseCases;
use crate::modules::ad::application::use_cases::{
    create_ad::CreateAdService, delete_ad::DeleteAdService,
    list_active_ads::ListActiveAdsService, list_ads::ListAdsService, patch_ad::PatchAdService,
};
use crate::modules::ai::adapter::outgoing::{GeminiClient, TavilyClient};
use crate::modules::ai::application::ai_config::{GeminiConfig, TavilyConfig};
use crate::modules::ai::application::ai_use_cases::AiUseCases;
use crate::modules::ai::application::ports::outgoing::{ContentGenerator, WebSearch};
use crate::modules::ai::application::use_cases::{
    generate_blog_draft::GenerateBlogDraftService, search_web::SearchWebService,
};
use crate::modules::blog::adapter::outgoing::{BlogQueryPostgres, BlogRepositoryPostgres};
use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::service::{
    CreateBlogService, DeleteBlogService, GetBlogService, GetBlogsService, GetPublicBlogService,
    PatchBlogService,
};
use crate::modules::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::modules::contact::application::contact_config::ContactConfig;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::use_cases::{
    delete_contact::DeleteContactService, list_contacts::ListContactsService,
    mark_contact_read::MarkContactReadService, submit_contact::SubmitContactService,
};
use crate::modules::marketing_mail::adapter::outgoing::MarketingMailRepositoryPostgres;
use crate::modules::marketing_mail::application::marketing_config::MarketingConfig;
use crate::modules::marketing_mail::application::marketing_mail_use_cases::MarketingMailUseCases;
use crate::modules::marketing_mail::application::use_cases::{
    create_campaign::CreateCampaignService, delete_campaign::DeleteCampaignService,
    get_campaign::GetCampaignService, list_campaigns::ListCampaignsService,
    send_campaign::SendCampaignService,
};
use crate::modules::personal_details::adapter::outgoing::PersonalDetailsRepositoryPostgres;
use crate::modules::personal_details::application::personal_details_use_cases::PersonalDetailsUseCases;
use crate::modules::personal_details::application::use_cases::{
    get_personal_details::GetPersonalDetailsService,
    upsert_personal_details::UpsertPersonalDetailsService,
};
use crate::modules::portfolio::adapter::outgoing::{
    PortfolioQueryPostgres, PortfolioRepositoryPostgres,
};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::service::{
    CreatePortfolioService, DeletePortfolioService, GetPortfolioService, GetPortfoliosService,
    GetPublicPortfolioService, PatchPortfolioService,
};
use crate::modules::seo::adapter::outgoing::SeoRepositoryPostgres;
use crate::modules::seo::application::seo_use_cases::SeoUseCases;
use crate::modules::seo::application::use_cases::{
    delete_seo::DeleteSeoService, get_seo::GetSeoService, list_seo::ListSeoService,
    upsert_seo::UpsertSeoService,
};
use crate::modules::service::adapter::outgoing::OfferingRepositoryPostgres;
use crate::modules::service::application::service_use_cases::ServiceUseCases;
use crate::modules::service::application::use_cases::{
    create_offering::CreateOfferingService, delete_offering::DeleteOfferingService,
    list_offerings::ListOfferingsService, patch_offering::PatchOfferingService,
};
use crate::modules::upload::adapter::outgoing::GcsObjectStorage;
use crate::modules::upload::application::domain::policies::upload_policy::UploadPolicy;
use crate::modules::upload::application::ports::incoming::services::CreateUploadUrlService;
use crate::modules::upload::application::upload_use_cases::UploadUseCases;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub blog: BlogUseCases,
    pub contact: ContactUseCases,
    pub personal_details: PersonalDetailsUseCases,
    pub ad: AdUseCases,
    pub marketing_mail: MarketingMailUseCases,
    pub seo: SeoUseCases,
    pub service: ServiceUseCases,
    pub upload: UploadUseCases,
    pub ai: AiUseCases,
    pub admin_policy: AdminPolicy,
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    db: &Arc<DatabaseConnection>,
    email_sender: Arc<dyn EmailSender + Send + Sync>,
) -> anyhow::Result<AppState> {
    let portfolio_repo = PortfolioRepositoryPostgres::new(Arc::clone(db));
    let portfolio_query = PortfolioQueryPostgres::new(Arc::clone(db));
    let portfolio = PortfolioUseCases {
        create: Arc::new(CreatePortfolioService::new(portfolio_repo.clone())),
        get_list: Arc::new(GetPortfoliosService::new(portfolio_query.clone())),
        get_single: Arc::new(GetPortfolioService::new(portfolio_query.clone())),
        get_public_single: Arc::new(GetPublicPortfolioService::new(portfolio_query)),
        patch: Arc::new(PatchPortfolioService::new(portfolio_repo.clone())),
        delete: Arc::new(DeletePortfolioService::new(portfolio_repo)),
    };

    let blog_repo = BlogRepositoryPostgres::new(Arc::clone(db));
    let blog_query = BlogQueryPostgres::new(Arc::clone(db));
    let blog = BlogUseCases {
        create: Arc::new(CreateBlogService::new(blog_repo.clone())),
        get_list: Arc::new(GetBlogsService::new(blog_query.clone())),
        get_single: Arc::new(GetBlogService::new(blog_query.clone())),
        get_public_single: Arc::new(GetPublicBlogService::new(blog_query)),
        patch: Arc::new(PatchBlogService::new(blog_repo.clone())),
        delete: Arc::new(DeleteBlogService::new(blog_repo)),
    };

    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(db));
    let contact = ContactUseCases {
        submit: Arc::new(SubmitContactService::new(
            contact_repo.clone(),
            Arc::clone(&email_sender),
            ContactConfig::from_env().notify_email,
        )),
        list: Arc::new(ListContactsService::new(contact_repo.clone())),
        mark_read: Arc::new(MarkContactReadService::new(contact_repo.clone())),
        delete: Arc::new(DeleteContactService::new(contact_repo)),
    };

    let personal_repo = PersonalDetailsRepositoryPostgres::new(Arc::clone(db));
    let personal_details = PersonalDetailsUseCases {
        get: Arc::new(GetPersonalDetailsService::new(personal_repo.clone())),
        upsert: Arc::new(UpsertPersonalDetailsService::new(personal_repo)),
    };

    let ad_repo = AdRepositoryPostgres::new(Arc::clone(db));
    let ad = AdUseCases {
        create: Arc::new(CreateAdService::new(ad_repo.clone())),
        list: Arc::new(ListAdsService::new(ad_repo.clone())),
        list_active: Arc::new(ListActiveAdsService::new(ad_repo.clone())),
        patch: Arc::new(PatchAdService::new(ad_repo.clone())),
        delete: Arc::new(DeleteAdService::new(ad_repo)),
    };

    let mail_repo = MarketingMailRepositoryPostgres::new(Arc::clone(db));
    let marketing_config = MarketingConfig::from_env();
    let marketing_mail = MarketingMailUseCases {
        create: Arc::new(CreateCampaignService::new(mail_repo.clone())),
        list: Arc::new(ListCampaignsService::new(mail_repo.clone())),
        get: Arc::new(GetCampaignService::new(mail_repo.clone())),
        delete: Arc::new(DeleteCampaignService::new(mail_repo.clone())),
        send: Arc::new(
            SendCampaignService::new(mail_repo, email_sender, marketing_config.concurrency)
                .with_sending_timeout(marketing_config.sending_timeout),
        ),
    };

    let seo_repo = SeoRepositoryPostgres::new(Arc::clone(db));
    let seo = SeoUseCases {
        get: Arc::new(GetSeoService::new(seo_repo.clone())),
        list: Arc::new(ListSeoService::new(seo_repo.clone())),
        upsert: Arc::new(UpsertSeoService::new(seo_repo.clone())),
        delete: Arc::new(DeleteSeoService::new(seo_repo)),
    };

    let offering_repo = OfferingRepositoryPostgres::new(Arc::clone(db));
    let service = ServiceUseCases {
        create: Arc::new(CreateOfferingService::new(offering_repo.clone())),
        list_active: Arc::new(ListOfferingsService::public(offering_repo.clone())),
        list_all: Arc::new(ListOfferingsService::admin(offering_repo.clone())),
        patch: Arc::new(PatchOfferingService::new(offering_repo.clone())),
        delete: Arc::new(DeleteOfferingService::new(offering_repo)),
    };

    let upload_policy = UploadPolicy::from_env();
    let upload = UploadUseCases {
        create_upload_url: Arc::new(CreateUploadUrlService::new(
            GcsObjectStorage::new(),
            upload_policy.clone(),
        )),
        policy: upload_policy,
    };

    let generator: Arc<dyn ContentGenerator> = Arc::new(
        GeminiClient::new(GeminiConfig::from_env()).context("Failed to build Gemini client")?,
    );
    let search: Arc<dyn WebSearch> = Arc::new(
        TavilyClient::new(TavilyConfig::from_env()).context("Failed to build Tavily client")?,
    );
    let ai = AiUseCases {
        generate_blog: Arc::new(GenerateBlogDraftService::new(generator, Arc::clone(&search))),
        search: Arc::new(SearchWebService::new(search)),
    };

    Ok(AppState {
        portfolio,
        blog,
        contact,
        personal_details,
        ad,
        marketing_mail,
        seo,
        service,
        upload,
        ai,
        admin_policy: AdminPolicy::from_env(),
    })
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // 🚨 SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if env == "production" {
            anyhow::bail!("test-helpers feature enabled in production environment");
        }
        tracing::warn!("⚠️  Test helper routes are ENABLED for environment: {}", env);
    }

    // Try .env.{environment} first, then fall back to .env
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    let jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;
    let smtp_config = SmtpConfig::from_env().context("Invalid SMTP configuration")?;
    let smtp_sender =
        SmtpEmailSender::from_config(&smtp_config).context("Failed to build SMTP transport")?;

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if env::var("RUN_MIGRATIONS").as_deref() == Ok("true") {
        info!("Running pending migrations");
        migration::Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);
    let state = build_state(&db_arc, Arc::new(smtp_sender))?;

    let token_verifier: Arc<dyn TokenVerifier + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));

    info!("Server listening on {}", server_url);

    HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_verifier)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes);

        #[cfg(feature = "test-helpers")]
        let app = app.configure(test_helpers::configure_routes);

        app
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("HTTP server error")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{
        ad::adapter::incoming::web::routes as ads, ai::adapter::incoming::web::routes as ai,
        blog::adapter::incoming::web::routes as blog,
        contact::adapter::incoming::web::routes as contact,
        marketing_mail::adapter::incoming::web::routes as mail,
        personal_details::adapter::incoming::web::routes as personal,
        portfolio::adapter::incoming::web::routes as portfolio,
        seo::adapter::incoming::web::routes as seo,
        service::adapter::incoming::web::routes as services,
        upload::adapter::incoming::web::routes as upload,
    };

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(portfolio::get_public_portfolios_handler);
    cfg.service(portfolio::get_public_portfolio_handler);
    cfg.service(portfolio::get_admin_portfolios_handler);
    cfg.service(portfolio::get_portfolio_handler);
    cfg.service(portfolio::create_portfolio_handler);
    cfg.service(portfolio::patch_portfolio_handler);
    cfg.service(portfolio::delete_portfolio_handler);
    // Blog
    cfg.service(blog::get_public_blogs_handler);
    cfg.service(blog::get_public_blog_handler);
    cfg.service(blog::get_admin_blogs_handler);
    cfg.service(blog::get_blog_handler);
    cfg.service(blog::create_blog_handler);
    cfg.service(blog::patch_blog_handler);
    cfg.service(blog::delete_blog_handler);
    // Contact
    cfg.service(contact::submit_contact_handler);
    cfg.service(contact::list_contacts_handler);
    cfg.service(contact::mark_contact_read_handler);
    cfg.service(contact::delete_contact_handler);
    // Personal details
    cfg.service(personal::get_personal_details_handler);
    cfg.service(personal::upsert_personal_details_handler);
    // Ads
    cfg.service(ads::list_active_ads_handler);
    cfg.service(ads::list_ads_handler);
    cfg.service(ads::create_ad_handler);
    cfg.service(ads::patch_ad_handler);
    cfg.service(ads::delete_ad_handler);
    // Marketing mail
    cfg.service(mail::list_campaigns_handler);
    cfg.service(mail::create_campaign_handler);
    cfg.service(mail::get_campaign_handler);
    cfg.service(mail::delete_campaign_handler);
    cfg.service(mail::send_campaign_handler);
    // SEO
    cfg.service(seo::get_seo_handler);
    cfg.service(seo::list_seo_handler);
    cfg.service(seo::upsert_seo_handler);
    cfg.service(seo::delete_seo_handler);
    // Services
    cfg.service(services::list_services_handler);
    cfg.service(services::list_all_services_handler);
    cfg.service(services::create_service_handler);
    cfg.service(services::patch_service_handler);
    cfg.service(services::delete_service_handler);
    // Upload
    cfg.service(upload::create_upload_url_handler);
    // AI
    cfg.service(ai::generate_blog_handler);
    cfg.service(ai::search_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
