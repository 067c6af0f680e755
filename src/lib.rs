pub mod rps_game;
