mod app;
mod cli;
mod config;
mod consts;
mod error;
mod notify;
mod output;
mod portal;
mod watch;

use clap::Parser;

use cli::Args;

fn main() {
    let args = Args::parse();

    if let Err(err) = app::run(&args) {
        output::error_line(&err.to_string(), args.use_color());
        std::process::exit(err.exit_code());
    }
}
