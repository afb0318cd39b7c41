//! Output helpers shared by the CLI commands.

pub fn print_success(msg: &str) {
    println!("\u{2713} {}", msg);
}

pub fn print_warning(msg: &str) {
    println!("\u{26A0}\u{FE0F} {}", msg);
}
