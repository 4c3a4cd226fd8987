mod parse;
mod types;


pub use parse::{parse_message, parse_timestamp};
pub use types::{Acquisition, Endpoint, HexAddress, Message};
