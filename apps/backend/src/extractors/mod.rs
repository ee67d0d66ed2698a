pub mod game_handle;
pub mod validated_json;

pub use game_handle::GameKey;
pub use validated_json::ValidatedJson;
