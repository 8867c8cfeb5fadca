//! 퀴즈 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::converter::NumeralSystem;

/// 설정 파일 경로를 바꾸는 환경 변수
pub const CONFIG_PATH_ENV: &str = "KOREAN_NUMBERS_CONFIG";

/// 퀴즈 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QuizConfig {
    /// 수사 체계
    #[serde(default)]
    pub system: NumeralSystem,
    /// 출제 범위 최솟값
    #[serde(default = "default_min")]
    pub min: u64,
    /// 출제 범위 최댓값
    #[serde(default = "default_max")]
    pub max: u64,
    /// 범위 입력 시 허용하는 최대 자릿수
    #[serde(default = "default_digit_limit")]
    pub digit_limit: usize,
}

fn default_min() -> u64 {
    0
}

fn default_max() -> u64 {
    99
}

fn default_digit_limit() -> usize {
    9
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            system: NumeralSystem::default(),
            min: default_min(),
            max: default_max(),
            digit_limit: default_digit_limit(),
        }
    }
}

/// 설정 파일 경로
/// 1. KOREAN_NUMBERS_CONFIG
/// 2. $XDG_CONFIG_HOME/korean-numbers/config.json
/// 3. ~/.config/korean-numbers/config.json
pub fn config_path() -> PathBuf {
    resolve_config_path(
        std::env::var_os(CONFIG_PATH_ENV),
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
}

/// 환경 변수 값으로 설정 파일 경로 결정
fn resolve_config_path(
    override_path: Option<OsString>,
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> PathBuf {
    if let Some(path) = override_path.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let base = xdg_config_home
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| {
            home.map(PathBuf::from)
                .filter(|p| p.is_absolute() && p.is_dir())
                .map(|home| home.join(".config"))
        })
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("korean-numbers").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> QuizConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> QuizConfig {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            QuizConfig::default()
        }),
        Err(_) => QuizConfig::default(),
    }
}

/// JSON 문자열에서 설정 파싱
pub fn parse_config(content: &str) -> Result<QuizConfig, String> {
    serde_json::from_str(content).map_err(|e| format!("JSON 파싱 오류: {}", e))
}

/// 설정 파일 저장
pub fn save_config(config: &QuizConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &QuizConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

impl QuizConfig {
    /// `quiz [sino|native] [min max]` 인자를 반영한 설정
    /// 범위 검증은 `QuizRange::from_config`에서 수행
    pub fn with_args(&self, args: &[String]) -> Result<QuizConfig, String> {
        let mut config = self.clone();
        let mut rest = args;

        if let Some((first, tail)) = rest.split_first() {
            if let Ok(system) = first.parse::<NumeralSystem>() {
                config.system = system;
                rest = tail;
            }
        }

        match rest {
            [] => {}
            [min, max] => {
                config.min = parse_bound(min)?;
                config.max = parse_bound(max)?;
            }
            _ => return Err("범위는 최솟값과 최댓값을 함께 입력하세요".to_string()),
        }

        Ok(config)
    }
}

fn parse_bound(text: &str) -> Result<u64, String> {
    text.parse::<u64>()
        .map_err(|_| format!("0 이상의 정수가 아닙니다: {}", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.system, NumeralSystem::Sino);
        assert_eq!(config.min, 0);
        assert_eq!(config.max, 99);
        assert_eq!(config.digit_limit, 9);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = QuizConfig {
            system: NumeralSystem::Native,
            min: 10,
            max: 50,
            digit_limit: 2,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed = parse_config(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = parse_config(r#"{"system": "native"}"#).unwrap();
        assert_eq!(config.system, NumeralSystem::Native);
        assert_eq!(config.min, 0);
        assert_eq!(config.max, 99);
    }

    #[test]
    fn test_unknown_system_rejected() {
        assert!(parse_config(r#"{"system": "roman"}"#).is_err());
    }

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("korean-numbers-test-{}-{}", std::process::id(), name))
            .join("config.json")
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_path_override_wins() {
        let path = resolve_config_path(
            Some("/tmp/custom.json".into()),
            Some("/xdg".into()),
            Some("/home/user".into()),
        );
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_path_empty_override_ignored() {
        let path = resolve_config_path(Some("".into()), Some("/xdg".into()), None);
        assert_eq!(path, PathBuf::from("/xdg/korean-numbers/config.json"));
    }

    #[test]
    fn test_path_home_fallback() {
        let home = std::env::temp_dir();
        // 상대 경로 XDG_CONFIG_HOME은 무시
        let path = resolve_config_path(None, Some("relative".into()), Some(home.clone().into()));
        assert_eq!(path, home.join(".config").join("korean-numbers").join("config.json"));
    }

    #[test]
    fn test_path_var_tmp_fallback() {
        assert_eq!(
            resolve_config_path(None, None, None),
            PathBuf::from("/var/tmp/korean-numbers/config.json")
        );
        assert_eq!(
            resolve_config_path(None, None, Some("/no/such/home/dir".into())),
            PathBuf::from("/var/tmp/korean-numbers/config.json")
        );
    }

    #[test]
    fn test_save_load_roundtrip() {
        let path = temp_config_path("roundtrip");
        let config = QuizConfig {
            system: NumeralSystem::Native,
            min: 3,
            max: 42,
            digit_limit: 2,
        };
        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = temp_config_path("missing");
        assert_eq!(load_config_from(&path), QuizConfig::default());
    }

    #[test]
    fn test_load_malformed_file_uses_defaults() {
        let path = temp_config_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from(&path), QuizConfig::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_env_override_used_by_save_and_load() {
        // KOREAN_NUMBERS_CONFIG를 읽는 테스트는 이것 하나뿐
        let path = temp_config_path("env");
        std::env::set_var(CONFIG_PATH_ENV, &path);
        assert_eq!(config_path(), path);

        assert_eq!(load_config(), QuizConfig::default());

        let config = QuizConfig {
            system: NumeralSystem::Sino,
            min: 100,
            max: 9999,
            digit_limit: 4,
        };
        save_config(&config).unwrap();
        assert_eq!(load_config(), config);

        fs::write(&path, "[1, 2, 3]").unwrap();
        assert_eq!(load_config(), QuizConfig::default());

        std::env::remove_var(CONFIG_PATH_ENV);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_with_args_system_and_range() {
        let config = QuizConfig::default()
            .with_args(&args(&["native", "10", "20"]))
            .unwrap();
        assert_eq!(config.system, NumeralSystem::Native);
        assert_eq!((config.min, config.max), (10, 20));
    }

    #[test]
    fn test_with_args_partial() {
        let base = QuizConfig::default();
        assert_eq!(base.with_args(&[]).unwrap(), base);

        let config = base.with_args(&args(&["5", "500"])).unwrap();
        assert_eq!(config.system, base.system);
        assert_eq!((config.min, config.max), (5, 500));

        let config = base.with_args(&args(&["native"])).unwrap();
        assert_eq!(config.system, NumeralSystem::Native);
        assert_eq!((config.min, config.max), (base.min, base.max));
    }

    #[test]
    fn test_with_args_rejects_bad_bounds() {
        let base = QuizConfig::default();
        assert!(base.with_args(&args(&["-1", "10"])).is_err());
        assert!(base.with_args(&args(&["abc", "10"])).is_err());
        assert!(base.with_args(&args(&["10"])).is_err());
        assert!(base.with_args(&args(&["sino", "1", "2", "3"])).is_err());
    }
}
