extern crate failure;
#[macro_use]
extern crate failure_derive;
#[macro_use]
extern crate serde_derive;
extern crate serde;
extern crate serde_json;
extern crate reqwest;
extern crate url;
extern crate csv;
#[macro_use]
extern crate log;
#[cfg(test)] #[macro_use] extern crate matches;
#[cfg(test)] extern crate tempfile;

pub mod campfire;
pub mod roster;
