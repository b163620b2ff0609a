use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
pub struct Args {
    /// How the triangle's GPU buffers live between frames
    #[arg(long, value_enum, default_value_t = BufferMode::PerFrame)]
    pub buffers: BufferMode,
    /// Log filter in env_logger syntax, takes precedence over RUST_LOG
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BufferMode {
    /// Allocate and destroy every buffer inside each render call
    PerFrame,
    /// Allocate once at load time and reuse every frame
    Persistent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reallocate_every_frame() {
        let args = Args::try_parse_from(["triangle-tutorial"]).unwrap();

        assert_eq!(args.buffers, BufferMode::PerFrame);
        assert!(args.log.is_none());
    }

    #[test]
    fn persistent_buffers() {
        let args =
            Args::try_parse_from(["triangle-tutorial", "--buffers", "persistent"]).unwrap();

        assert_eq!(args.buffers, BufferMode::Persistent);
    }

    #[test]
    fn log_filter() {
        let args = Args::try_parse_from(["triangle-tutorial", "--log", "debug"]).unwrap();

        assert_eq!(args.log.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["triangle-tutorial", "--buffers", "never"]).is_err());
    }
}
