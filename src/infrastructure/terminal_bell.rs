// Terminal bell as the console log cue
use crate::application::log_cue::LogCue;
use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

const BEL: &[u8] = b"\x07";

/// Writes the ASCII bell to a sink, stderr by default.
pub struct TerminalBell<W = tokio::io::Stderr> {
    sink: Mutex<W>,
}

impl TerminalBell {
    pub fn stderr() -> Self {
        Self::new(tokio::io::stderr())
    }
}

impl<W> TerminalBell<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }
}

#[async_trait]
impl<W> LogCue for TerminalBell<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn play(&self) -> anyhow::Result<()> {
        let mut sink = self.sink.lock().await;
        sink.write_all(BEL).await?;
        sink.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rings_bel_byte() {
        let bell = TerminalBell::new(Vec::<u8>::new());
        bell.play().await.unwrap();
        bell.play().await.unwrap();

        assert_eq!(*bell.sink.lock().await, b"\x07\x07".to_vec());
    }
}
