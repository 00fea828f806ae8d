use tracing_subscriber::EnvFilter;

/// 로그 초기화. `RUST_LOG` 가 없으면 info 레벨.
///
/// 여러 번 불러도 된다 (테스트에서 중복 초기화는 무시).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
