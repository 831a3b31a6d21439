use crate::cli::{actions::client, globals::GlobalArgs};
use anyhow::Result;
use secrecy::ExposeSecret;

/// Handle the token action
pub async fn handle(globals: &GlobalArgs) -> Result<()> {
    let token = client()?.get_token(globals).await?;

    println!("{}", token.expose_secret());

    Ok(())
}
