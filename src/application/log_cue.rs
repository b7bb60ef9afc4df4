// Audio cue collaborator fired when the console gains lines
use async_trait::async_trait;

#[async_trait]
pub trait LogCue: Send + Sync {
    /// Play the cue. Errors are reported but never propagated by the engine.
    async fn play(&self) -> anyhow::Result<()>;
}

/// Cue used when sound is disabled.
pub struct SilentCue;

#[async_trait]
impl LogCue for SilentCue {
    async fn play(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
