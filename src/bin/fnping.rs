use anyhow::Result;
use fnping::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = start()?;

    // Handle the action
    match action {
        Action::Token => actions::token::handle(&globals).await?,
        Action::Ping => actions::ping::handle(&globals).await?,
        Action::TestConnection => actions::test_connection::handle(&globals).await?,
    }

    Ok(())
}
