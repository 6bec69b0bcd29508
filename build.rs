//! Embeds the application icon into the Windows executable when `icon.ico`
//! is present at the project root.

use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=icon.ico");

    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" || !Path::new("icon.ico").exists() {
        return;
    }

    let mut res = winres::WindowsResource::new();
    res.set_icon("icon.ico");
    if let Err(e) = res.compile() {
        println!("cargo:warning=failed to embed icon.ico: {}", e);
    }
}
