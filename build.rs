use std::{path::Path, process::Command, str};

fn main() {
    let git_output = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .ok();
    let git_dir = git_output.as_ref().and_then(|output| {
        str::from_utf8(&output.stdout)
            .ok()
            .and_then(|s| s.strip_suffix('\n').or_else(|| s.strip_suffix("\r\n")))
    });

    // Rebuild when HEAD or any branch or tag moves
    if let Some(git_dir) = git_dir {
        let git_path = Path::new(git_dir);
        let refs_path = git_path.join("refs");
        for (path, watched) in [
            (git_path.join("HEAD"), "HEAD"),
            (git_path.join("packed-refs"), "packed-refs"),
            (refs_path.join("heads"), "refs/heads"),
            (refs_path.join("tags"), "refs/tags"),
        ] {
            if path.exists() {
                println!("cargo:rerun-if-changed={git_dir}/{watched}");
            }
        }
    }

    let git_output = Command::new("git")
        .args(["describe", "--always", "--tags", "--long", "--dirty"])
        .output()
        .ok();
    let git_info = git_output
        .as_ref()
        .and_then(|output| str::from_utf8(&output.stdout).ok().map(str::trim));

    if let Some(git_info) = git_info {
        println!("cargo:rustc-env=_GIT_INFO={git_info}");
    }
}
