//! fibweb HTTP Server - Binary Entry Point
//!
//! The implementation lives in the library crate.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fibweb_server::run().await
}
