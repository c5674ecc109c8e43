use line_sdk::LineSdkClientBuilder;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let channel_id = env::var("LINE_CHANNEL_ID")?;
    let access_token = env::var("LINE_ACCESS_TOKEN")?;

    let client = LineSdkClientBuilder::with_reqwest_transport()
        .with_channel_id(channel_id)
        .with_access_token(access_token.clone())
        .build()?;

    let verify_result = client.verify_access_token(access_token.as_str()).await?;
    println!(
        "Token issued for {} expires in {}s with scopes: {:?}",
        verify_result.client_id,
        verify_result.expires_in,
        verify_result.permissions()
    );

    let profile = client.profile().await?;
    println!("Logged in as {} ({})", profile.display_name, profile.user_id);

    client.revoke_access_token(access_token).await?;
    client.clear_token();
    println!("Access token revoked");

    Ok(())
}
