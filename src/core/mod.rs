//! 숫자 -> 한국어 수사 변환 엔진

pub mod converter;
pub mod digits;
pub mod native;
pub mod sino;
pub mod tables;
