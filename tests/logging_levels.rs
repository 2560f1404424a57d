use workflow_dag::cli::LogLevel;
use workflow_dag::logging::resolve_level;

#[test]
fn cli_flag_wins_over_env() {
    assert_eq!(
        resolve_level(Some(LogLevel::Debug), Some("error")),
        tracing::Level::DEBUG
    );
}

#[test]
fn env_value_is_parsed_leniently() {
    assert_eq!(resolve_level(None, Some(" WARNING ")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("trace")), tracing::Level::TRACE);
}

#[test]
fn unknown_or_missing_env_defaults_to_info() {
    assert_eq!(resolve_level(None, Some("loud")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, None), tracing::Level::INFO);
}
