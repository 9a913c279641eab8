use std::{env, fs, path::PathBuf};

fn main() {
    // Place the right memory.x for the target where cortex-m-rt's link.x can find it.
    let target = env::var("TARGET").unwrap_or_default();
    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return;
    };

    let memory_file = if target.starts_with("thumbv8m") {
        // Pico 2 ARM
        "memory-pico2.x"
    } else if target.starts_with("thumbv6m") {
        // Pico 1
        "memory-pico1.x"
    } else {
        // Host builds (tests) link no firmware.
        return;
    };

    let memory_x = fs::read_to_string(memory_file)
        .unwrap_or_else(|err| panic!("Failed to read {memory_file}: {err}"));
    fs::write(out_dir.join("memory.x"), memory_x).expect("Failed to write memory.x");
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed={memory_file}");
}
