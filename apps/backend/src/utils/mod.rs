pub mod game_handle;
