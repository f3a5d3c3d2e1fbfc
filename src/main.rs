#[tokio::main]
async fn main() -> std::io::Result<()> {
    arcade_crawler::run_with_config().await
}
