mod campaigns;
mod send_campaign;

pub use campaigns::{
    create_campaign_handler, delete_campaign_handler, get_campaign_handler,
    list_campaigns_handler, CreateCampaignRequest,
};
pub use send_campaign::send_campaign_handler;
