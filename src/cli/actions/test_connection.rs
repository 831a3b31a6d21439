use crate::cli::{actions::client, globals::GlobalArgs};
use anyhow::{bail, Result};

/// Handle the test-connection action
pub async fn handle(globals: &GlobalArgs) -> Result<()> {
    if !client()?.test_connection(globals).await {
        println!("Failed");
        bail!("test connection failed");
    }

    println!("Succeeded");

    Ok(())
}
