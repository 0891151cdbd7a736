mod assess;
mod cli;
mod infra;
mod routes;
mod server;

use resilience_audit::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
