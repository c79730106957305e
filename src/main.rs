#[tokio::main]
async fn main() {
    localspot_be::start_server().await;
}
