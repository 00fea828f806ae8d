use anyhow::Result;
use bulk_import::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 로그 초기화
    logger::init();

    // 설정 읽기
    let config = Config::from_env();

    // 실행
    let _stats = App::initialize(config)?.run().await?;

    Ok(())
}
