pub mod pair_game;
