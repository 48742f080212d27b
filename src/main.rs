#[actix_web::main]
async fn main() -> std::io::Result<()> {
    ipen_docs_server::run().await
}
