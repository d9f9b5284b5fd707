pub use self::{board::*, cell::*, window::*};

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod window;
