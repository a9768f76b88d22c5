//! depsync: keep dpkg, RPM, pip and CI dependency lists in sync
//!
//! Regenerates every derived packaging file from a single dependency registry.

use anyhow::Result;

fn main() -> Result<()> {
    depsync::cli::run()
}
