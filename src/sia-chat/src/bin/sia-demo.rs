//! Headless demo: runs a short canned conversation against the in-memory
//! transcript and prints the result.
//!
//! ```sh
//! RUST_LOG=sia_chat=debug cargo run --bin sia-demo
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

use sia_chat::{ChatWidget, Transcript, WidgetConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let transcript = Arc::new(Transcript::new());
    let widget = ChatWidget::new(transcript.clone(), WidgetConfig::default());

    println!("-- direct reply --");
    widget.submit("How many vacation days do I have left?");
    sleep(Duration::from_secs(5)).await;
    print!("{}", transcript.render_plain());

    println!("\n-- staged reply, cancelled mid-thought --");
    widget.submit("What are the best practices for performance reviews?");
    sleep(Duration::from_millis(1500)).await;
    print!("{}", transcript.render_plain());
    widget.cancel_thinking();
    sleep(Duration::from_secs(1)).await;
    print!("{}", transcript.render_plain());

    Ok(())
}
