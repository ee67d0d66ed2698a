//! Repository functions for the services layer (generic over ConnectionTrait).

pub mod games;
pub mod scores;
pub mod users;
