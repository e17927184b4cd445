use std::io::{self, Write};

use clap::Args;

use crate::error::Result;
use crate::session::Session;

/// Print a fresh random seed
#[derive(Args, Debug)]
pub struct SeedArgs {}

pub fn run(_args: SeedArgs, session: &mut Session) -> Result<()> {
    writeln!(io::stdout().lock(), "{}", session.new_seed())?;
    Ok(())
}
