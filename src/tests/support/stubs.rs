//! Placeholder use cases for handler tests.
//!
//! `TestAppStateBuilder` fills every slot with `Unconfigured`; a test swaps in
//! its own implementation for the one use case the handler under test calls.
//! Reaching an `Unconfigured` slot means the test wired the wrong use case.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::ad::application::use_cases::{
    create_ad::{CreateAdCommand, CreateAdError, CreateAdUseCase},
    delete_ad::{DeleteAdError, DeleteAdUseCase},
    list_active_ads::{ListActiveAdsError, ListActiveAdsUseCase},
    list_ads::{ListAdsError, ListAdsUseCase},
    patch_ad::{PatchAdCommand, PatchAdError, PatchAdUseCase},
};
use crate::modules::ad::domain::entities::{Ad, AdPlacement};
use crate::modules::ai::application::use_cases::{
    generate_blog_draft::{GenerateBlogCommand, GenerateBlogDraftUseCase, GenerateBlogError},
    search_web::{SearchWebCommand, SearchWebError, SearchWebUseCase},
};
use crate::modules::ai::domain::entities::{BlogDraft, SearchResult};
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogCommand, CreateBlogError, CreateBlogUseCase, DeleteBlogError, DeleteBlogUseCase,
    GetBlogError, GetBlogUseCase, GetBlogsError, GetBlogsUseCase, GetPublicBlogUseCase,
    PatchBlogCommand, PatchBlogError, PatchBlogUseCase,
};
use crate::modules::blog::application::ports::outgoing::blog_query::{
    BlogCard, BlogListFilter, BlogView,
};
use crate::modules::blog::application::ports::outgoing::blog_repository::BlogResult;
use crate::modules::contact::application::use_cases::{
    delete_contact::{DeleteContactError, DeleteContactUseCase},
    list_contacts::{ListContactsError, ListContactsUseCase},
    mark_contact_read::{MarkContactReadError, MarkContactReadUseCase},
    submit_contact::{SubmitContactCommand, SubmitContactError, SubmitContactUseCase},
};
use crate::modules::contact::domain::entities::Contact;
use crate::modules::marketing_mail::application::use_cases::{
    create_campaign::{CreateCampaignCommand, CreateCampaignError, CreateCampaignUseCase},
    delete_campaign::{DeleteCampaignError, DeleteCampaignUseCase},
    get_campaign::{GetCampaignError, GetCampaignUseCase},
    list_campaigns::{ListCampaignsError, ListCampaignsUseCase},
    send_campaign::{SendCampaignError, SendCampaignUseCase},
};
use crate::modules::marketing_mail::domain::entities::{MarketingMail, SendReport};
use crate::modules::personal_details::application::use_cases::{
    get_personal_details::{GetPersonalDetailsError, GetPersonalDetailsUseCase},
    upsert_personal_details::{
        UpsertPersonalDetailsCommand, UpsertPersonalDetailsError, UpsertPersonalDetailsUseCase,
    },
};
use crate::modules::personal_details::domain::entities::PersonalDetails;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioCommand, CreatePortfolioError, CreatePortfolioUseCase, DeletePortfolioError,
    DeletePortfolioUseCase, GetPortfolioError, GetPortfolioUseCase, GetPortfoliosError,
    GetPortfoliosUseCase, GetPublicPortfolioUseCase, PatchPortfolioCommand, PatchPortfolioError,
    PatchPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_query::{
    PortfolioCard, PortfolioListFilter, PortfolioView,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::PortfolioResult;
use crate::modules::seo::application::use_cases::{
    delete_seo::{DeleteSeoError, DeleteSeoUseCase},
    get_seo::{GetSeoError, GetSeoUseCase},
    list_seo::{ListSeoError, ListSeoUseCase},
    upsert_seo::{UpsertSeoCommand, UpsertSeoError, UpsertSeoUseCase},
};
use crate::modules::seo::domain::entities::SeoEntry;
use crate::modules::service::application::use_cases::{
    create_offering::{CreateOfferingCommand, CreateOfferingError, CreateOfferingUseCase},
    delete_offering::{DeleteOfferingError, DeleteOfferingUseCase},
    list_offerings::{ListOfferingsError, ListOfferingsUseCase},
    patch_offering::{PatchOfferingCommand, PatchOfferingError, PatchOfferingUseCase},
};
use crate::modules::service::domain::entities::ServiceOffering;
use crate::modules::upload::application::domain::entities::UploadTicket;
use crate::modules::upload::application::ports::incoming::use_cases::{
    CreateUploadUrlCommand, CreateUploadUrlError, CreateUploadUrlUseCase,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone, Copy, Default)]
pub struct Unconfigured;

macro_rules! unconfigured {
    ($name:literal) => {
        unimplemented!(concat!($name, " is not configured for this test"))
    };
}

// Portfolio

#[async_trait]
impl CreatePortfolioUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: CreatePortfolioCommand,
    ) -> Result<PortfolioResult, CreatePortfolioError> {
        unconfigured!("create_portfolio")
    }
}

#[async_trait]
impl GetPortfoliosUseCase for Unconfigured {
    async fn execute(
        &self,
        _filter: PortfolioListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<PortfolioCard>, GetPortfoliosError> {
        unconfigured!("get_portfolios")
    }
}

#[async_trait]
impl GetPortfolioUseCase for Unconfigured {
    async fn execute(&self, _portfolio_id: Uuid) -> Result<PortfolioView, GetPortfolioError> {
        unconfigured!("get_portfolio")
    }
}

#[async_trait]
impl GetPublicPortfolioUseCase for Unconfigured {
    async fn execute(&self, _slug: &str) -> Result<PortfolioView, GetPortfolioError> {
        unconfigured!("get_public_portfolio")
    }
}

#[async_trait]
impl PatchPortfolioUseCase for Unconfigured {
    async fn execute(
        &self,
        _portfolio_id: Uuid,
        _command: PatchPortfolioCommand,
    ) -> Result<PortfolioResult, PatchPortfolioError> {
        unconfigured!("patch_portfolio")
    }
}

#[async_trait]
impl DeletePortfolioUseCase for Unconfigured {
    async fn execute(&self, _portfolio_id: Uuid) -> Result<(), DeletePortfolioError> {
        unconfigured!("delete_portfolio")
    }
}

// Blog

#[async_trait]
impl CreateBlogUseCase for Unconfigured {
    async fn execute(&self, _command: CreateBlogCommand) -> Result<BlogResult, CreateBlogError> {
        unconfigured!("create_blog")
    }
}

#[async_trait]
impl GetBlogsUseCase for Unconfigured {
    async fn execute(
        &self,
        _filter: BlogListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<BlogCard>, GetBlogsError> {
        unconfigured!("get_blogs")
    }
}

#[async_trait]
impl GetBlogUseCase for Unconfigured {
    async fn execute(&self, _blog_id: Uuid) -> Result<BlogView, GetBlogError> {
        unconfigured!("get_blog")
    }
}

#[async_trait]
impl GetPublicBlogUseCase for Unconfigured {
    async fn execute(&self, _slug: &str) -> Result<BlogView, GetBlogError> {
        unconfigured!("get_public_blog")
    }
}

#[async_trait]
impl PatchBlogUseCase for Unconfigured {
    async fn execute(
        &self,
        _blog_id: Uuid,
        _command: PatchBlogCommand,
    ) -> Result<BlogResult, PatchBlogError> {
        unconfigured!("patch_blog")
    }
}

#[async_trait]
impl DeleteBlogUseCase for Unconfigured {
    async fn execute(&self, _blog_id: Uuid) -> Result<(), DeleteBlogError> {
        unconfigured!("delete_blog")
    }
}

// Contact

#[async_trait]
impl SubmitContactUseCase for Unconfigured {
    async fn execute(&self, _command: SubmitContactCommand) -> Result<Contact, SubmitContactError> {
        unconfigured!("submit_contact")
    }
}

#[async_trait]
impl ListContactsUseCase for Unconfigured {
    async fn execute(
        &self,
        _unread_only: bool,
        _page: PageRequest,
    ) -> Result<PageResult<Contact>, ListContactsError> {
        unconfigured!("list_contacts")
    }
}

#[async_trait]
impl MarkContactReadUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid, _is_read: bool) -> Result<Contact, MarkContactReadError> {
        unconfigured!("mark_contact_read")
    }
}

#[async_trait]
impl DeleteContactUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteContactError> {
        unconfigured!("delete_contact")
    }
}

// Personal details

#[async_trait]
impl GetPersonalDetailsUseCase for Unconfigured {
    async fn execute(&self) -> Result<PersonalDetails, GetPersonalDetailsError> {
        unconfigured!("get_personal_details")
    }
}

#[async_trait]
impl UpsertPersonalDetailsUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: UpsertPersonalDetailsCommand,
    ) -> Result<PersonalDetails, UpsertPersonalDetailsError> {
        unconfigured!("upsert_personal_details")
    }
}

// Ads

#[async_trait]
impl CreateAdUseCase for Unconfigured {
    async fn execute(&self, _command: CreateAdCommand) -> Result<Ad, CreateAdError> {
        unconfigured!("create_ad")
    }
}

#[async_trait]
impl ListAdsUseCase for Unconfigured {
    async fn execute(
        &self,
        _placement: Option<AdPlacement>,
        _page: PageRequest,
    ) -> Result<PageResult<Ad>, ListAdsError> {
        unconfigured!("list_ads")
    }
}

#[async_trait]
impl ListActiveAdsUseCase for Unconfigured {
    async fn execute(&self, _placement: Option<AdPlacement>) -> Result<Vec<Ad>, ListActiveAdsError> {
        unconfigured!("list_active_ads")
    }
}

#[async_trait]
impl PatchAdUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid, _command: PatchAdCommand) -> Result<Ad, PatchAdError> {
        unconfigured!("patch_ad")
    }
}

#[async_trait]
impl DeleteAdUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteAdError> {
        unconfigured!("delete_ad")
    }
}

// Marketing mail

#[async_trait]
impl CreateCampaignUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: CreateCampaignCommand,
    ) -> Result<MarketingMail, CreateCampaignError> {
        unconfigured!("create_campaign")
    }
}

#[async_trait]
impl ListCampaignsUseCase for Unconfigured {
    async fn execute(
        &self,
        _page: PageRequest,
    ) -> Result<PageResult<MarketingMail>, ListCampaignsError> {
        unconfigured!("list_campaigns")
    }
}

#[async_trait]
impl GetCampaignUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<MarketingMail, GetCampaignError> {
        unconfigured!("get_campaign")
    }
}

#[async_trait]
impl DeleteCampaignUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteCampaignError> {
        unconfigured!("delete_campaign")
    }
}

#[async_trait]
impl SendCampaignUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<SendReport, SendCampaignError> {
        unconfigured!("send_campaign")
    }
}

// SEO

#[async_trait]
impl GetSeoUseCase for Unconfigured {
    async fn execute(&self, _page: &str) -> Result<SeoEntry, GetSeoError> {
        unconfigured!("get_seo")
    }
}

#[async_trait]
impl ListSeoUseCase for Unconfigured {
    async fn execute(&self) -> Result<Vec<SeoEntry>, ListSeoError> {
        unconfigured!("list_seo")
    }
}

#[async_trait]
impl UpsertSeoUseCase for Unconfigured {
    async fn execute(&self, _command: UpsertSeoCommand) -> Result<SeoEntry, UpsertSeoError> {
        unconfigured!("upsert_seo")
    }
}

#[async_trait]
impl DeleteSeoUseCase for Unconfigured {
    async fn execute(&self, _page: &str) -> Result<(), DeleteSeoError> {
        unconfigured!("delete_seo")
    }
}

// Services

#[async_trait]
impl CreateOfferingUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: CreateOfferingCommand,
    ) -> Result<ServiceOffering, CreateOfferingError> {
        unconfigured!("create_service")
    }
}

#[async_trait]
impl ListOfferingsUseCase for Unconfigured {
    async fn execute(&self) -> Result<Vec<ServiceOffering>, ListOfferingsError> {
        unconfigured!("list_services")
    }
}

#[async_trait]
impl PatchOfferingUseCase for Unconfigured {
    async fn execute(
        &self,
        _id: Uuid,
        _command: PatchOfferingCommand,
    ) -> Result<ServiceOffering, PatchOfferingError> {
        unconfigured!("patch_service")
    }
}

#[async_trait]
impl DeleteOfferingUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteOfferingError> {
        unconfigured!("delete_service")
    }
}

// Upload and AI

#[async_trait]
impl CreateUploadUrlUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: CreateUploadUrlCommand,
    ) -> Result<UploadTicket, CreateUploadUrlError> {
        unconfigured!("create_upload_url")
    }
}

#[async_trait]
impl GenerateBlogDraftUseCase for Unconfigured {
    async fn execute(&self, _command: GenerateBlogCommand) -> Result<BlogDraft, GenerateBlogError> {
        unconfigured!("generate_blog_draft")
    }
}

#[async_trait]
impl SearchWebUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: SearchWebCommand,
    ) -> Result<Vec<SearchResult>, SearchWebError> {
        unconfigured!("search_web")
    }
}
