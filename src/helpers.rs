use rand::Rng;

/// Entity id in the `{prefix}-{millis}{rand}` shape the mock backend used.
pub fn generate_id(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix = rand::thread_rng().gen_range(1000..10000);
    format!("{}-{}{}", prefix, millis, suffix)
}
