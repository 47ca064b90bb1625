//! Switch facing direction and observe stream replacement.
//!
//! Run with: cargo run --example facing_switch

use camsnap::{Camsnap, FacingDirection, MockAcquisition};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    camsnap::init_logging();

    let camsnap = Camsnap::init(Arc::new(MockAcquisition::new()))?;
    let mut session = camsnap
        .session()
        .facing(FacingDirection::User)
        .open()
        .await?;

    println!("opened session facing {}", session.facing());

    let replaced = session.switch_facing(FacingDirection::Environment).await?;
    println!(
        "switched to {} (stream replaced: {})",
        session.facing(),
        replaced
    );

    session.close();
    println!("session closed");
    Ok(())
}
