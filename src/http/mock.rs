//! テスト用モックHTTP

use super::*;
use std::collections::HashMap;
use std::sync::Mutex;

/// URL ごとに固定レスポンスを返すモック
///
/// 未登録の URL は 404 を返す。呼び出された URL を記録する。
#[derive(Default)]
pub struct MockHttp {
    responses: Mutex<HashMap<String, std::result::Result<String, u16>>>,
    calls: Mutex<Vec<String>>,
}

impl MockHttp {
    pub fn new() -> Self {
        Self::default()
    }

    /// 200 で本文を返す
    pub fn respond(&self, url: &str, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), Ok(body.to_string()));
    }

    /// 指定ステータスで失敗させる
    pub fn fail(&self, url: &str, status: u16) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), Err(status));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl HttpGet for MockHttp {
    fn get_text<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(url.to_string());
            match self.responses.lock().unwrap().get(url) {
                Some(Ok(body)) => Ok(body.clone()),
                Some(Err(status)) => Err(KitError::fetch_status(url, *status)),
                None => Err(KitError::fetch_status(url, 404)),
            }
        })
    }
}
