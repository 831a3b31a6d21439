use crate::cli::{actions::client, globals::GlobalArgs};
use anyhow::Result;

/// Handle the ping action
pub async fn handle(globals: &GlobalArgs) -> Result<()> {
    let response = client()?.ping(globals).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
