pub mod games;
pub mod scores;
pub mod stats;
pub mod users;
