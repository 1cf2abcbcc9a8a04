pub mod config;
pub mod consts;
pub mod error;
pub mod frame;
pub mod histogram;
pub mod io;
pub mod multithresh;
pub mod quantize;
pub mod search;
pub mod tables;

pub use config::{SearchMode, ThresholdConfig};
pub use error::{MultiThreshError, Result};
pub use frame::{ColorFrame, Frame, Image};
pub use multithresh::{multithresh, multithresh_default, ThresholdResult};
pub use quantize::{quantize, quantize_values};
