pub mod game_moves;
pub mod games;
pub mod scores;
pub mod users;

pub use game_moves::Entity as GameMoves;
pub use game_moves::Model as GameMove;
pub use games::Entity as Games;
pub use games::Model as Game;
pub use scores::Entity as Scores;
pub use scores::Model as Score;
pub use users::Entity as Users;
pub use users::Model as User;
