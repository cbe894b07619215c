use anyhow::{Context, Result};
use number_guessing::{driver, Session, Terminal};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let mut terminal = Terminal::new();
    driver::run_forever(&mut terminal, Session::new)
        .await
        .context("game loop failed")?;
    Ok(())
}
