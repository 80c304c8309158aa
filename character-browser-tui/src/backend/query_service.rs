//! 查询服务
//!
//! 把 Update 层返回的 [`Command`] 变成后台异步任务，
//! 结果通过 channel 发回主循环。

use std::sync::Arc;

use character_browser_client::CharacterApi;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::QueryMessage;
use crate::update::Command;

/// 查询服务
pub struct QueryService {
    api: Arc<dyn CharacterApi>,
    runtime: Handle,
    tx: UnboundedSender<QueryMessage>,
}

impl QueryService {
    pub fn new(api: Arc<dyn CharacterApi>, runtime: Handle, tx: UnboundedSender<QueryMessage>) -> Self {
        Self { api, runtime, tx }
    }

    /// 执行命令
    ///
    /// 每个查询独立运行，结果带上参数（页码或 ID），由 Update 层丢弃过期结果。
    pub fn execute(&self, command: Command) {
        match command {
            Command::None => {}
            Command::FetchList { page } => self.fetch_list(page),
            Command::FetchDetail { id } => self.fetch_detail(id),
        }
    }

    fn fetch_list(&self, page: u32) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        log::debug!("Spawning list query for page {page}");

        self.runtime.spawn(async move {
            let result = api.list_characters(page).await;
            if tx.send(QueryMessage::ListLoaded { page, result }).is_err() {
                log::debug!("UI closed before list page {page} arrived");
            }
        });
    }

    fn fetch_detail(&self, id: String) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        log::debug!("Spawning detail query for {id}");

        self.runtime.spawn(async move {
            let result = api.get_character(&id).await;
            if tx.send(QueryMessage::DetailLoaded { id, result }).is_err() {
                log::debug!("UI closed before detail arrived");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use async_trait::async_trait;
    use character_browser_client::{Character, CharacterPage, ClientError, PageInfo, Result};
    use tokio::runtime::Runtime;
    use tokio::sync::mpsc;

    use super::*;

    /// 内存中的假 API
    struct MockApi {
        characters: HashMap<String, Character>,
        fail: bool,
    }

    impl MockApi {
        fn new() -> Self {
            let characters = [("1", "Rick Sanchez"), ("2", "Morty Smith")]
                .into_iter()
                .map(|(id, name)| {
                    (
                        id.to_string(),
                        Character {
                            id: id.to_string(),
                            name: name.to_string(),
                            image: format!("https://example.com/{id}.jpeg"),
                        },
                    )
                })
                .collect();
            Self {
                characters,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                characters: HashMap::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl CharacterApi for MockApi {
        async fn list_characters(&self, page: u32) -> Result<CharacterPage> {
            if self.fail {
                return Err(ClientError::Timeout {
                    detail: "deadline".to_string(),
                });
            }
            let mut results: Vec<Character> = if page == 1 {
                self.characters.values().cloned().collect()
            } else {
                Vec::new()
            };
            results.sort_by(|a, b| a.id.cmp(&b.id));
            Ok(CharacterPage {
                page,
                results,
                info: Some(PageInfo {
                    count: Some(2),
                    pages: Some(1),
                    next: None,
                    prev: None,
                }),
            })
        }

        async fn get_character(&self, id: &str) -> Result<Option<Character>> {
            if self.fail {
                return Err(ClientError::NetworkError {
                    detail: "unreachable".to_string(),
                });
            }
            Ok(self.characters.get(id).cloned())
        }
    }

    fn service(api: MockApi, runtime: &Runtime) -> (QueryService, mpsc::UnboundedReceiver<QueryMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (QueryService::new(Arc::new(api), runtime.handle().clone(), tx), rx)
    }

    fn recv(rx: &mut mpsc::UnboundedReceiver<QueryMessage>) -> QueryMessage {
        tokio_test::block_on(async {
            tokio::time::timeout(Duration::from_secs(5), rx.recv())
                .await
                .expect("query did not finish")
                .expect("channel closed")
        })
    }

    #[test]
    fn list_result_carries_page() {
        let runtime = Runtime::new().unwrap();
        let (queries, mut rx) = service(MockApi::new(), &runtime);

        queries.execute(Command::FetchList { page: 1 });

        match recv(&mut rx) {
            QueryMessage::ListLoaded { page, result } => {
                assert_eq!(page, 1);
                let data = result.unwrap();
                assert_eq!(data.results.len(), 2);
                assert_eq!(data.results[0].name, "Rick Sanchez");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn detail_result_carries_id() {
        let runtime = Runtime::new().unwrap();
        let (queries, mut rx) = service(MockApi::new(), &runtime);

        queries.execute(Command::FetchDetail { id: "2".to_string() });

        match recv(&mut rx) {
            QueryMessage::DetailLoaded { id, result } => {
                assert_eq!(id, "2");
                assert_eq!(result.unwrap().map(|c| c.name), Some("Morty Smith".to_string()));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn unknown_id_is_none() {
        let runtime = Runtime::new().unwrap();
        let (queries, mut rx) = service(MockApi::new(), &runtime);

        queries.execute(Command::FetchDetail {
            id: "999999".to_string(),
        });

        assert!(matches!(
            recv(&mut rx),
            QueryMessage::DetailLoaded { result: Ok(None), .. }
        ));
    }

    #[test]
    fn failures_are_delivered() {
        let runtime = Runtime::new().unwrap();
        let (queries, mut rx) = service(MockApi::failing(), &runtime);

        queries.execute(Command::FetchList { page: 3 });

        assert!(matches!(
            recv(&mut rx),
            QueryMessage::ListLoaded { page: 3, result: Err(ClientError::Timeout { .. }) }
        ));
    }

    #[test]
    fn none_spawns_nothing() {
        let runtime = Runtime::new().unwrap();
        let (queries, mut rx) = service(MockApi::new(), &runtime);

        queries.execute(Command::None);
        drop(queries);

        assert!(tokio_test::block_on(rx.recv()).is_none());
    }
}
