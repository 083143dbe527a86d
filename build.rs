use std::env;

/// Pick the digit width matching the target, unless a feature forces one.
fn main() {
    let forced = env::var_os("CARGO_FEATURE_U32").is_some() || env::var_os("CARGO_FEATURE_U64").is_some();
    if forced {
        return;
    }

    match env::var("CARGO_CFG_TARGET_POINTER_WIDTH").as_deref() {
        Ok("64") => println!("cargo:rustc-cfg=feature=\"u64\""),
        _ => println!("cargo:rustc-cfg=feature=\"u32\""),
    }
}
