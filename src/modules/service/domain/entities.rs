use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 2000;
pub const MAX_ICON_LEN: usize = 100;
pub const MAX_FEATURES: usize = 20;
pub const MAX_FEATURE_LEN: usize = 200;

/// A service the site owner sells, shown on the public services page.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ServiceOffering {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Icon name or image URL, interpreted by the frontend.
    pub icon: Option<String>,
    pub features: Vec<String>,
    pub starting_price: Option<f64>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewServiceOffering {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub icon: Option<String>,
    pub features: Vec<String>,
    pub starting_price: Option<f64>,
    pub display_order: i32,
    pub is_active: bool,
}

/// Public ordering: `display_order` ascending, then title case-insensitively.
pub fn display_cmp(a: &ServiceOffering, b: &ServiceOffering) -> Ordering {
    a.display_order
        .cmp(&b.display_order)
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(title: &str, display_order: i32) -> ServiceOffering {
        ServiceOffering {
            id: Uuid::new_v4(),
            title: title.to_string(),
            slug: title.to_lowercase(),
            description: "d".to_string(),
            icon: None,
            features: vec![],
            starting_price: None,
            display_order,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn orders_by_position_then_title() {
        let mut list = vec![
            offering("consulting", 2),
            offering("Web apps", 1),
            offering("APIs", 1),
        ];
        list.sort_by(display_cmp);

        let titles: Vec<_> = list.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["APIs", "Web apps", "consulting"]);
    }
}
