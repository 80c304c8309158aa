//! 共享测试工具和辅助函数

#![allow(dead_code)]

use character_browser_client::{CharacterClient, ClientConfig};

/// 打开在线测试所需的环境变量
pub const LIVE_TESTS_ENV: &str = "CHARACTER_BROWSER_LIVE_TESTS";

/// 可选：覆盖在线测试使用的 endpoint
pub const LIVE_ENDPOINT_ENV: &str = "CHARACTER_BROWSER_ENDPOINT";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_unless_live {
    () => {
        if std::env::var($crate::common::LIVE_TESTS_ENV).is_err() {
            eprintln!(
                "跳过测试: 缺少环境变量 {}",
                $crate::common::LIVE_TESTS_ENV
            );
            return;
        }
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 按环境变量创建在线测试客户端
pub fn live_client() -> CharacterClient {
    let mut config = ClientConfig::default();
    if let Ok(endpoint) = std::env::var(LIVE_ENDPOINT_ENV) {
        config.endpoint = endpoint;
    }
    match CharacterClient::new(config) {
        Ok(client) => client,
        Err(e) => panic!("failed to build live client: {e}"),
    }
}
