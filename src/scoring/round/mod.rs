pub use best_game::BestGame;

mod best_game;
