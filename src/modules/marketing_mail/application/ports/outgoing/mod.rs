pub mod marketing_mail_repository;

pub use marketing_mail_repository::{
    CampaignOutcome, MarketingMailRepository, MarketingMailRepositoryError,
};
