pub mod buy_ticket;
pub mod initialise;
pub mod pay_out_winner;
pub mod pick_winner;

pub use buy_ticket::*;
pub use initialise::*;
pub use pay_out_winner::*;
pub use pick_winner::*;
