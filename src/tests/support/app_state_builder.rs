use std::sync::Arc;

use actix_web::web;

use crate::modules::ad::application::ad_use_cases::AdUseCases;
use crate::modules::ad::application::use_cases::{
    create_ad::CreateAdUseCase, delete_ad::DeleteAdUseCase,
    list_active_ads::ListActiveAdsUseCase, list_ads::ListAdsUseCase, patch_ad::PatchAdUseCase,
};
use crate::modules::ai::application::ai_use_cases::AiUseCases;
use crate::modules::ai::application::use_cases::{
    generate_blog_draft::GenerateBlogDraftUseCase, search_web::SearchWebUseCase,
};
use crate::modules::auth::application::domain::entities::AdminPolicy;
use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogUseCase, DeleteBlogUseCase, GetBlogUseCase, GetBlogsUseCase, GetPublicBlogUseCase,
    PatchBlogUseCase,
};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::use_cases::{
    delete_contact::DeleteContactUseCase, list_contacts::ListContactsUseCase,
    mark_contact_read::MarkContactReadUseCase, submit_contact::SubmitContactUseCase,
};
use crate::modules::marketing_mail::application::marketing_mail_use_cases::MarketingMailUseCases;
use crate::modules::marketing_mail::application::use_cases::{
    create_campaign::CreateCampaignUseCase, delete_campaign::DeleteCampaignUseCase,
    get_campaign::GetCampaignUseCase, list_campaigns::ListCampaignsUseCase,
    send_campaign::SendCampaignUseCase,
};
use crate::modules::personal_details::application::personal_details_use_cases::PersonalDetailsUseCases;
use crate::modules::personal_details::application::use_cases::{
    get_personal_details::GetPersonalDetailsUseCase,
    upsert_personal_details::UpsertPersonalDetailsUseCase,
};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioUseCase, DeletePortfolioUseCase, GetPortfolioUseCase, GetPortfoliosUseCase,
    GetPublicPortfolioUseCase, PatchPortfolioUseCase,
};
use crate::modules::seo::application::seo_use_cases::SeoUseCases;
use crate::modules::seo::application::use_cases::{
    delete_seo::DeleteSeoUseCase, get_seo::GetSeoUseCase, list_seo::ListSeoUseCase,
    upsert_seo::UpsertSeoUseCase,
};
use crate::modules::service::application::service_use_cases::ServiceUseCases;
use crate::modules::service::application::use_cases::{
    create_offering::CreateOfferingUseCase, delete_offering::DeleteOfferingUseCase,
    list_offerings::ListOfferingsUseCase, patch_offering::PatchOfferingUseCase,
};
use crate::modules::upload::application::domain::policies::upload_policy::UploadPolicy;
use crate::modules::upload::application::ports::incoming::use_cases::CreateUploadUrlUseCase;
use crate::modules::upload::application::upload_use_cases::UploadUseCases;
use crate::tests::support::auth_helper::test_helpers::TEST_ADMIN_EMAIL;
use crate::tests::support::stubs::Unconfigured;
use crate::AppState;

/// Builds an `AppState` whose use cases all start as `Unconfigured`.
pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
    blog: BlogUseCases,
    contact: ContactUseCases,
    personal_details: PersonalDetailsUseCases,
    ad: AdUseCases,
    marketing_mail: MarketingMailUseCases,
    seo: SeoUseCases,
    service: ServiceUseCases,
    upload: UploadUseCases,
    ai: AiUseCases,
    admin_policy: AdminPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let stub = Arc::new(Unconfigured);
        Self {
            portfolio: PortfolioUseCases {
                create: stub.clone(),
                get_list: stub.clone(),
                get_single: stub.clone(),
                get_public_single: stub.clone(),
                patch: stub.clone(),
                delete: stub.clone(),
            },
            blog: BlogUseCases {
                create: stub.clone(),
                get_list: stub.clone(),
                get_single: stub.clone(),
                get_public_single: stub.clone(),
                patch: stub.clone(),
                delete: stub.clone(),
            },
            contact: ContactUseCases {
                submit: stub.clone(),
                list: stub.clone(),
                mark_read: stub.clone(),
                delete: stub.clone(),
            },
            personal_details: PersonalDetailsUseCases {
                get: stub.clone(),
                upsert: stub.clone(),
            },
            ad: AdUseCases {
                create: stub.clone(),
                list: stub.clone(),
                list_active: stub.clone(),
                patch: stub.clone(),
                delete: stub.clone(),
            },
            marketing_mail: MarketingMailUseCases {
                create: stub.clone(),
                list: stub.clone(),
                get: stub.clone(),
                delete: stub.clone(),
                send: stub.clone(),
            },
            seo: SeoUseCases {
                get: stub.clone(),
                list: stub.clone(),
                upsert: stub.clone(),
                delete: stub.clone(),
            },
            service: ServiceUseCases {
                create: stub.clone(),
                list_active: stub.clone(),
                list_all: stub.clone(),
                patch: stub.clone(),
                delete: stub.clone(),
            },
            upload: UploadUseCases {
                create_upload_url: stub.clone(),
                policy: UploadPolicy::new("test-bucket".to_string()),
            },
            ai: AiUseCases {
                generate_blog: stub.clone(),
                search: stub.clone(),
            },
            admin_policy: AdminPolicy::new([TEST_ADMIN_EMAIL]),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_portfolio(
        mut self,
        uc: impl CreatePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.create = Arc::new(uc);
        self
    }

    pub fn with_get_portfolios(
        mut self,
        uc: impl GetPortfoliosUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_portfolio(
        mut self,
        uc: impl GetPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_public_portfolio(
        mut self,
        uc: impl GetPublicPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get_public_single = Arc::new(uc);
        self
    }

    pub fn with_patch_portfolio(
        mut self,
        uc: impl PatchPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_portfolio(
        mut self,
        uc: impl DeletePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.delete = Arc::new(uc);
        self
    }

    pub fn with_create_blog(mut self, uc: impl CreateBlogUseCase + Send + Sync + 'static) -> Self {
        self.blog.create = Arc::new(uc);
        self
    }

    pub fn with_get_blogs(mut self, uc: impl GetBlogsUseCase + Send + Sync + 'static) -> Self {
        self.blog.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_blog(mut self, uc: impl GetBlogUseCase + Send + Sync + 'static) -> Self {
        self.blog.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_public_blog(
        mut self,
        uc: impl GetPublicBlogUseCase + Send + Sync + 'static,
    ) -> Self {
        self.blog.get_public_single = Arc::new(uc);
        self
    }

    pub fn with_patch_blog(mut self, uc: impl PatchBlogUseCase + Send + Sync + 'static) -> Self {
        self.blog.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_blog(mut self, uc: impl DeleteBlogUseCase + Send + Sync + 'static) -> Self {
        self.blog.delete = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_list_contacts(
        mut self,
        uc: impl ListContactsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.list = Arc::new(uc);
        self
    }

    pub fn with_mark_contact_read(
        mut self,
        uc: impl MarkContactReadUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.mark_read = Arc::new(uc);
        self
    }

    pub fn with_delete_contact(
        mut self,
        uc: impl DeleteContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.delete = Arc::new(uc);
        self
    }

    pub fn with_get_personal_details(
        mut self,
        uc: impl GetPersonalDetailsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.personal_details.get = Arc::new(uc);
        self
    }

    pub fn with_upsert_personal_details(
        mut self,
        uc: impl UpsertPersonalDetailsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.personal_details.upsert = Arc::new(uc);
        self
    }

    pub fn with_create_ad(mut self, uc: impl CreateAdUseCase + Send + Sync + 'static) -> Self {
        self.ad.create = Arc::new(uc);
        self
    }

    pub fn with_list_ads(mut self, uc: impl ListAdsUseCase + Send + Sync + 'static) -> Self {
        self.ad.list = Arc::new(uc);
        self
    }

    pub fn with_list_active_ads(
        mut self,
        uc: impl ListActiveAdsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.ad.list_active = Arc::new(uc);
        self
    }

    pub fn with_patch_ad(mut self, uc: impl PatchAdUseCase + Send + Sync + 'static) -> Self {
        self.ad.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_ad(mut self, uc: impl DeleteAdUseCase + Send + Sync + 'static) -> Self {
        self.ad.delete = Arc::new(uc);
        self
    }

    pub fn with_create_campaign(
        mut self,
        uc: impl CreateCampaignUseCase + Send + Sync + 'static,
    ) -> Self {
        self.marketing_mail.create = Arc::new(uc);
        self
    }

    pub fn with_list_campaigns(
        mut self,
        uc: impl ListCampaignsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.marketing_mail.list = Arc::new(uc);
        self
    }

    pub fn with_get_campaign(
        mut self,
        uc: impl GetCampaignUseCase + Send + Sync + 'static,
    ) -> Self {
        self.marketing_mail.get = Arc::new(uc);
        self
    }

    pub fn with_delete_campaign(
        mut self,
        uc: impl DeleteCampaignUseCase + Send + Sync + 'static,
    ) -> Self {
        self.marketing_mail.delete = Arc::new(uc);
        self
    }

    pub fn with_send_campaign(
        mut self,
        uc: impl SendCampaignUseCase + Send + Sync + 'static,
    ) -> Self {
        self.marketing_mail.send = Arc::new(uc);
        self
    }

    pub fn with_get_seo(mut self, uc: impl GetSeoUseCase + Send + Sync + 'static) -> Self {
        self.seo.get = Arc::new(uc);
        self
    }

    pub fn with_list_seo(mut self, uc: impl ListSeoUseCase + Send + Sync + 'static) -> Self {
        self.seo.list = Arc::new(uc);
        self
    }

    pub fn with_upsert_seo(mut self, uc: impl UpsertSeoUseCase + Send + Sync + 'static) -> Self {
        self.seo.upsert = Arc::new(uc);
        self
    }

    pub fn with_delete_seo(mut self, uc: impl DeleteSeoUseCase + Send + Sync + 'static) -> Self {
        self.seo.delete = Arc::new(uc);
        self
    }

    pub fn with_create_service(
        mut self,
        uc: impl CreateOfferingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.service.create = Arc::new(uc);
        self
    }

    pub fn with_list_active_services(
        mut self,
        uc: impl ListOfferingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.service.list_active = Arc::new(uc);
        self
    }

    pub fn with_list_all_services(
        mut self,
        uc: impl ListOfferingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.service.list_all = Arc::new(uc);
        self
    }

    pub fn with_patch_service(
        mut self,
        uc: impl PatchOfferingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.service.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_service(
        mut self,
        uc: impl DeleteOfferingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.service.delete = Arc::new(uc);
        self
    }

    pub fn with_create_upload_url(
        mut self,
        uc: impl CreateUploadUrlUseCase + Send + Sync + 'static,
    ) -> Self {
        self.upload.create_upload_url = Arc::new(uc);
        self
    }

    pub fn with_generate_blog_draft(
        mut self,
        uc: impl GenerateBlogDraftUseCase + Send + Sync + 'static,
    ) -> Self {
        self.ai.generate_blog = Arc::new(uc);
        self
    }

    pub fn with_search_web(mut self, uc: impl SearchWebUseCase + Send + Sync + 'static) -> Self {
        self.ai.search = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
            blog: self.blog,
            contact: self.contact,
            personal_details: self.personal_details,
            ad: self.ad,
            marketing_mail: self.marketing_mail,
            seo: self.seo,
            service: self.service,
            upload: self.upload,
            ai: self.ai,
            admin_policy: self.admin_policy,
        })
    }
}
