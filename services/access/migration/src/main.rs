use sea_orm_migration::prelude::*;

use plantdesk_access_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
