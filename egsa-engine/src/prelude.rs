#![allow(unused_imports)]

pub use tracing::{debug, info, instrument, trace};

pub use crate::error::{Error, Result};
