use lambda_runtime::{run, service_fn, tracing, Error};
mod body;
mod error;
mod event_handler;
mod model;
use event_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Level and format come from AWS_LAMBDA_LOG_LEVEL / AWS_LAMBDA_LOG_FORMAT.
    tracing::init_default_subscriber();
    run(service_fn(function_handler)).await
}
