//! 수사 체계 선택 및 통합 변환 인터페이스

use serde::{Deserialize, Serialize};

use crate::core::native::convert_native;
use crate::core::sino::convert_sino;
use crate::error::ConvertError;

/// 숫자 문자열을 한국어 수사로 읽는 변환기
pub trait NumeralConverter: Send + Sync {
    /// 숫자 문자열 변환
    fn convert(&self, number: &str) -> Result<String, ConvertError>;

    /// 변환 가능한 최댓값
    fn max_value(&self) -> u64;
}

/// 한자어 수사 변환기
#[derive(Debug, Clone, Copy, Default)]
pub struct SinoKorean;

/// 고유어 수사 변환기
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeKorean;

impl NumeralConverter for SinoKorean {
    fn convert(&self, number: &str) -> Result<String, ConvertError> {
        convert_sino(number)
    }

    fn max_value(&self) -> u64 {
        9999_9999_9999_9999
    }
}

impl NumeralConverter for NativeKorean {
    fn convert(&self, number: &str) -> Result<String, ConvertError> {
        convert_native(number)
    }

    fn max_value(&self) -> u64 {
        99
    }
}

/// 수사 체계
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    /// 한자어 수 (일, 이, 삼)
    #[default]
    Sino,
    /// 고유어 수 (하나, 둘, 셋)
    Native,
}

impl NumeralSystem {
    /// 선택 가능한 모든 수사 체계
    pub const ALL: [NumeralSystem; 2] = [NumeralSystem::Sino, NumeralSystem::Native];

    /// 수사 체계에 해당하는 변환기
    pub fn converter(&self) -> &'static dyn NumeralConverter {
        match self {
            NumeralSystem::Sino => &SinoKorean,
            NumeralSystem::Native => &NativeKorean,
        }
    }

    /// 숫자 문자열 변환
    pub fn convert(&self, number: &str) -> Result<String, ConvertError> {
        self.converter().convert(number)
    }

    /// 정수 값 변환
    pub fn convert_value(&self, value: u64) -> Result<String, ConvertError> {
        self.convert(&value.to_string())
    }

    /// 변환 가능한 최댓값 (고유어 99, 한자어 10^16 - 1)
    pub fn max_value(&self) -> u64 {
        self.converter().max_value()
    }

    /// 설정/명령행에서 쓰는 이름
    pub fn name(&self) -> &'static str {
        match self {
            NumeralSystem::Sino => "sino",
            NumeralSystem::Native => "native",
        }
    }

    /// 다른 수사 체계
    pub fn other(&self) -> Self {
        match self {
            NumeralSystem::Sino => NumeralSystem::Native,
            NumeralSystem::Native => NumeralSystem::Sino,
        }
    }
}

impl std::fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumeralSystem::Sino => write!(f, "한자어"),
            NumeralSystem::Native => write!(f, "고유어"),
        }
    }
}

impl std::str::FromStr for NumeralSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sino" | "s" => Ok(NumeralSystem::Sino),
            "native" | "n" => Ok(NumeralSystem::Native),
            _ => match s.trim() {
                "한자어" => Ok(NumeralSystem::Sino),
                "고유어" => Ok(NumeralSystem::Native),
                other => Err(format!("알 수 없는 수사 체계: {}", other)),
            },
        }
    }
}
