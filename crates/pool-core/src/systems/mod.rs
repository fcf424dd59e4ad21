pub mod outcome;
pub mod pockets;
pub mod rng;
pub mod score;
pub mod turn;
