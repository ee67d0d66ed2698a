//! SeaORM adapters. Functions here return `DbErr`; the repos layer maps
//! them to `DomainError`.

pub mod games_sea;
pub mod scores_sea;
pub mod users_sea;
