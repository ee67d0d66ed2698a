use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::utils::game_handle::GameHandle;

/// Game handle taken from the `{handle}` path segment and decoded to an id.
///
/// Only the encoding is checked here; existence is up to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameKey(pub GameHandle);

impl GameKey {
    pub fn id(&self) -> i64 {
        self.0.id()
    }
}

impl FromRequest for GameKey {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("handle") {
            Some(raw) => GameHandle::decode(raw)
                .map(|id| GameKey(GameHandle(id)))
                .map_err(AppError::from),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidGameHandle,
                "Missing game handle",
            )),
        };
        ready(result)
    }
}
