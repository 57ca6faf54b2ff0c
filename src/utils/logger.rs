use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// RUST_LOG 未設定時使用的過濾規則
fn fallback_directives(verbose: bool) -> &'static str {
    if verbose {
        "car_chatbot=debug,tower_http=debug,info"
    } else {
        "car_chatbot=info"
    }
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_directives(verbose)))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // 部署環境用 JSON，方便日誌平台收集
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_directives() {
        assert_eq!(fallback_directives(false), "car_chatbot=info");
        // verbose 也要看到每個 HTTP request 的 trace
        assert_eq!(
            fallback_directives(true),
            "car_chatbot=debug,tower_http=debug,info"
        );
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(fallback_directives(verbose)).is_ok());
        }
    }
}
