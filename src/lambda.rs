use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use roster_balancer::adapters::request::{handle_request, ApiRequest, ApiResponse};
use roster_balancer::utils::logger;

async fn function_handler(event: LambdaEvent<ApiRequest>) -> Result<ApiResponse, Error> {
    tracing::info!(
        request_id = %event.context.request_id,
        "Handling team stats request"
    );

    // 每次請求都重新建立名單，不保留任何狀態
    let response = handle_request(&event.payload);

    tracing::info!("Team stats request completed");
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
