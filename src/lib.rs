pub mod config;
pub mod core;
pub mod error;
pub mod quiz;

pub use crate::core::converter::{NativeKorean, NumeralConverter, NumeralSystem, SinoKorean};
pub use crate::core::native::convert_native;
pub use crate::core::sino::convert_sino;
pub use error::ConvertError;
