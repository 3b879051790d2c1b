mod flag;
mod stamp;
mod time;

pub use self::{flag::*, stamp::*, time::*};
