use anyhow::Result;

fn main() -> Result<()> {
    pseudopad::cli::run()
}
