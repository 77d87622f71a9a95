use std::path::Path;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

use crate::settings::{LogFormat, LogOutput, LogSettings};

/// 로깅 설정으로 전역 tracing subscriber를 설치합니다.
///
/// 파일 출력일 때 돌려주는 guard가 drop되면 남은 로그가 기록되고
/// 백그라운드 writer가 종료됩니다. 이미 subscriber가 설치되어 있으면
/// 아무 것도 하지 않습니다.
pub fn init_logging(settings: &LogSettings) -> Option<WorkerGuard> {
    let filter = EnvFilter::from_default_env()
        .add_directive(settings.level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let (result, guard) = match (&settings.format, &settings.output) {
        (LogFormat::Text, LogOutput::Stdout) => (builder.try_init(), None),
        (LogFormat::Json, LogOutput::Stdout) => (builder.json().try_init(), None),
        (format, LogOutput::File(path)) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(path));
            let builder = builder.with_ansi(false).with_writer(writer);
            let result = match format {
                LogFormat::Text => builder.try_init(),
                LogFormat::Json => builder.json().try_init(),
            };
            (result, Some(guard))
        }
    };

    match result {
        Ok(()) => {
            info!(level = %settings.level, format = ?settings.format, "로깅 초기화 완료");
            guard
        }
        Err(_) => None,
    }
}

fn file_appender(path: &str) -> tracing_appender::rolling::RollingFileAppender {
    let path = Path::new(path);
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ingress-resolver.log".to_string());
    tracing_appender::rolling::never(dir, file_name)
}
