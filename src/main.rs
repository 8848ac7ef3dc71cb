use std::io;

use anyhow::{Context, Result};
use log::info;

use gamma_conv::{transcode, Config, GammaParams};

fn main() -> Result<()> {
    // stdout is the data path, diagnostics go to stderr only
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::from_args_os(std::env::args_os().skip(1)).context("usage: gamma_conv <frame_size>")?;

    let params = GammaParams::default();
    info!(
        "frame size {}, gamma {}, cutoff {:#x}",
        config.frame_size, params.gamma, params.cutoff
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();

    transcode(&mut reader, &mut writer, config.frame_size).context("transcoding stopped")?;

    Ok(())
}
