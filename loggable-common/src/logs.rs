use tracing_subscriber::EnvFilter;

pub fn init_log() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_line_number(true)
        .with_thread_ids(true)
        .try_init();
}

pub fn get_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}
