//! korean-numbers - 숫자를 한자어/고유어 수사로 읽어주는 터미널 퀴즈

use korean_numbers::config::{load_config, save_config};
use korean_numbers::quiz::{Quiz, QuizRange};
use korean_numbers::NumeralSystem;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn usage() -> String {
    let mut text = String::from("사용법:\n");
    for system in NumeralSystem::ALL {
        text.push_str(&format!(
            "  korean-numbers {} <숫자>...   {} 수사로 읽기 (최대 {})\n",
            system.name(),
            system,
            system.max_value()
        ));
    }
    text.push_str("  korean-numbers quiz [sino|native] [최솟값 최댓값]\n");
    text.push_str("      퀴즈 (Enter: 정답 보기/숨기기, n: 다음, s: 수사 전환, q: 종료)\n");
    text.push_str("      인자로 준 수사 체계와 범위는 설정 파일에 저장됨");
    text
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{}", usage());
        return ExitCode::FAILURE;
    };

    match command.as_str() {
        "quiz" => run_quiz(&args[1..]),
        "-h" | "--help" | "help" => {
            println!("{}", usage());
            ExitCode::SUCCESS
        }
        other => match other.parse::<NumeralSystem>() {
            Ok(system) => convert_all(system, &args[1..]),
            Err(e) => {
                eprintln!("{}", e);
                eprintln!("{}", usage());
                ExitCode::FAILURE
            }
        },
    }
}

/// 인자로 받은 숫자를 모두 변환하여 출력
fn convert_all(system: NumeralSystem, numbers: &[String]) -> ExitCode {
    if numbers.is_empty() {
        eprintln!("변환할 숫자를 입력하세요");
        return ExitCode::FAILURE;
    }

    let mut failed = false;
    for number in numbers {
        match system.convert(number) {
            Ok(text) => println!("{} → {}", number, text),
            Err(e) => {
                eprintln!("{}", e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// 설정 파일(과 인자)의 범위로 대화형 퀴즈 실행
fn run_quiz(args: &[String]) -> ExitCode {
    let saved = load_config();
    let config = match saved.with_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", usage());
            return ExitCode::FAILURE;
        }
    };
    let range = match QuizRange::from_config(&config) {
        Ok(range) => range,
        Err(e) => {
            log::error!("잘못된 퀴즈 설정: {}", e);
            eprintln!("잘못된 퀴즈 설정: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // 검증을 통과한 새 설정만 저장
    if config != saved {
        if let Err(e) = save_config(&config) {
            log::warn!("설정 저장 실패: {}", e);
        }
    }

    let mut quiz = Quiz::new(range);
    let mut rng = rand::rng();
    quiz.next_question(&mut rng);
    if print_question(&quiz).is_err() {
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                return ExitCode::FAILURE;
            }
        };

        match line.trim() {
            "" => {
                quiz.toggle_answer();
            }
            "n" => {
                quiz.next_question(&mut rng);
            }
            "s" => {
                quiz.switch_system(quiz.system().other());
                if quiz.question().is_none() {
                    quiz.next_question(&mut rng);
                }
            }
            "q" => break,
            other => {
                eprintln!("알 수 없는 명령: {}", other);
                continue;
            }
        }
        if let Err(e) = print_question(&quiz) {
            log::error!("출력 실패: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn print_question(quiz: &Quiz) -> io::Result<()> {
    let question = quiz.question().unwrap_or_default();
    let answer = match quiz.visible_answer() {
        Some(text) => text,
        None => "?".to_string(),
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "[{}] {}  =>  {}", quiz.system(), question, answer)?;
    stdout.flush()
}
