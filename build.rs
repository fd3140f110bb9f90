// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Embedded into `cgate version` and the generated hook scripts
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .git_dirty(false)
        .emit()?;
    Ok(())
}
