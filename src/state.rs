use crate::usecases::clan::ClanGateway;

#[derive(Clone)]
pub struct AppState {
    pub clans: ClanGateway,
}

impl AppState {
    pub fn new(clans: ClanGateway) -> Self {
        Self { clans }
    }
}
