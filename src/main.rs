//! barhop-client - look up a bar from the command line.
//!
//! ```text
//! barhop-client <bar-id>
//! BARHOP__API__BASE_URL=https://bars.example.com/api barhop-client 42
//! ```

use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use barhop_client::adapters::{RecordingNavigator, ReqwestTransport};
use barhop_client::application::{ApiClient, Controllers, SessionGuard};
use barhop_client::config::AppConfig;
use barhop_client::domain::foundation::BarId;
use barhop_client::domain::ApiResult;
use barhop_client::telemetry;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config.logging);

    let Some(bar_id) = std::env::args().nth(1) else {
        eprintln!("usage: barhop-client <bar-id>");
        return Ok(ExitCode::from(2));
    };
    let bar_id: BarId = bar_id.parse()?;

    let transport = ReqwestTransport::new(config.api.to_transport_config())?;
    let client = Arc::new(ApiClient::new(Arc::new(transport)).with_policy(config.api.error_policy));
    let navigator = Arc::new(RecordingNavigator::at(format!("/bars/{bar_id}")));
    let guard = SessionGuard::new(navigator.clone()).with_login_path(config.api.login_path.clone());
    let api = Controllers::new(client, guard);

    tracing::info!(base_url = %config.api.base_url, %bar_id, "Looking up bar");

    let code = match api.bars.find_bar_by_id(bar_id).await {
        ApiResult::Success { status, data } => {
            println!("[{status}] {} - {}", data.name, data.address);
            println!("  {} / {}", data.base_category_name, data.open_information);
            if !data.menus.is_empty() {
                println!("  menu: {}", data.menus.join(", "));
            }
            ExitCode::SUCCESS
        }
        ApiResult::Failure(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    };

    for target in navigator.navigations() {
        println!("-> {target}");
    }

    Ok(code)
}
