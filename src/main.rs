use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let path = apathy_theme::run().context("failed to write default theme")?;
    tracing::debug!(path = %path.display(), "done");
    println!("Wrote default theme");
    Ok(())
}
