use pool_core::*;
use wasm_bindgen::prelude::*;

mod game;

use game::PoolGame;

pool_web::export_game!(PoolGame, "pool-game");
