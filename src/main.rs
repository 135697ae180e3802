use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = safe_trash::cli::parse();
    let code = app::run(args)?;
    std::process::exit(code);
}
