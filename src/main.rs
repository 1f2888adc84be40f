mod cli;
mod workflow;

use clap::Parser;
use cli::Args;

fn main() {
    // 既定では警告以上のみ。RUST_LOG で上書きできる
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();

    let args = Args::parse();
    if let Err(e) = workflow::run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
