/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// レジストリのベースURLを上書きする環境変数
    pub const REGISTRY_URL: &'static str = "KITCTL_REGISTRY_URL";

    /// ローカルレジストリのディレクトリを指定する環境変数
    pub const REGISTRY_DIR: &'static str = "KITCTL_REGISTRY_DIR";

    /// 環境変数を取得（空文字列・空白のみはNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
