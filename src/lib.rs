#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod mask;
mod player;
#[cfg(feature = "std")]
mod player_cli;
mod targeting;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use mask::*;
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use targeting::*;
