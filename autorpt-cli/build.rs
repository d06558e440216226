use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Build scripts can't access src/ modules, so the command definition is
// included as source. It only depends on clap.
include!("src/cli.rs");

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "autorpt", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "autorpt", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "autorpt", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
