//! Command strings handed to the shell

use crate::domain::{PublishTag, ReleaseMode};

/// `node <script> --to-version <version> --build-type <mode>`
pub fn set_version(script: &str, version: &str, mode: ReleaseMode) -> String {
    format!(
        "node {} --to-version {} --build-type {}",
        script,
        version,
        mode.as_str()
    )
}

/// `npm view <package> dist-tags.<tag>`
pub fn view_dist_tag(package: &str, tag: &PublishTag) -> String {
    format!("npm view {} dist-tags.{}", package, tag)
}

/// `npm publish --tag <tag>`, with `--otp <otp>` appended when given
pub fn npm_publish(tag: &PublishTag, otp: Option<&str>) -> String {
    match otp {
        Some(otp) => format!("npm publish --tag {} --otp {}", tag, otp),
        None => format!("npm publish --tag {}", tag),
    }
}
