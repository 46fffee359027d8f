//! Terminal scenes. Render-only: every function reads game state and draws
//! it, never mutating anything.

pub mod flappy_scene;
pub mod game_common;
pub mod menu_scene;
pub mod tictactoe_scene;
