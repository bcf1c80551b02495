use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    bangbox::cli::run()
}
