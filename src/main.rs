//! The openfunctions-probe command-line executable.

fn main() -> anyhow::Result<()> {
    openfunctions_probe::run()
}
