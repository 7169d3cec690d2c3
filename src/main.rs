use std::env;

mod cli;
mod error;
mod pass;
mod rng;
mod settings;
mod terminal;

fn main() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    env_logger::Builder::from_env(env_logger::Env::default().filter_or("PASSGEN_LOG", "warn"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}
