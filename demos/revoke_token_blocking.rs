use line_sdk::LineSdkClientBuilder;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let channel_id = env::var("LINE_CHANNEL_ID")?;
    let access_token = env::var("LINE_ACCESS_TOKEN")?;

    let client = LineSdkClientBuilder::with_reqwest_blocking_transport()
        .with_channel_id(channel_id)
        .build()?;

    let verify_result = client.verify_access_token_blocking(access_token.as_str())?;
    println!(
        "Token issued for {} expires in {}s",
        verify_result.client_id, verify_result.expires_in
    );

    client.revoke_access_token_blocking(access_token)?;
    println!("Access token revoked");

    Ok(())
}
