//! ログ初期化
//!
//! 診断ログは stderr に出力し、コマンドの出力（stdout）とは混ぜない。
//! レベルは RUST_LOG で上書きできる:
//! - RUST_LOG=kitctl=debug kitctl add boolean
//! - RUST_LOG=kitctl=info,reqwest=debug kitctl list

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// tracing subscriber を初期化
///
/// 二重初期化（テストなど）は無視する。
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "kitctl=debug"
    } else {
        "kitctl=warn"
    }
}
