use anyhow::Result;
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

mod app;

fn main() -> Result<()> {
    let cmd = app::Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level())
        .with_writer(std::io::stderr)
        .init();
    // Rendered in full before printing so a failure leaves stdout empty.
    let text = app::execute(&cmd)?;
    print!("{text}");
    Ok(())
}
