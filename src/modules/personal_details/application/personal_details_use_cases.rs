use std::sync::Arc;

use crate::modules::personal_details::application::use_cases::{
    get_personal_details::GetPersonalDetailsUseCase,
    upsert_personal_details::UpsertPersonalDetailsUseCase,
};

#[derive(Clone)]
pub struct PersonalDetailsUseCases {
    pub get: Arc<dyn GetPersonalDetailsUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertPersonalDetailsUseCase + Send + Sync>,
}
