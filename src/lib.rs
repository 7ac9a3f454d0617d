mod macros;

pub mod assertions;
pub mod check;
pub mod config;
pub mod error;
pub mod inspect;
pub mod tester;

pub use assertions::error::Fallible;
pub use config::{ColorChoice, Config, OutputFormat};
pub use error::{Error, Result};
pub use inspect::{Inspect, Interface, Kind, Nil, TypeInfo};
pub use tester::{Aborted, Context, Failure, Recorder, Tester};
