use std::env;

fn main() {
    // Only the AVR build needs the MCU link argument; host builds compile
    // the unit tests and get none of the link plumbing.
    let target = env::var("TARGET").unwrap_or_default();
    if target.contains("avr") {
        println!("cargo:rustc-link-arg=-mmcu=atmega328p");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
