#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    probate_forms_server::run().await
}
