mod command;
mod config;
mod ui;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
