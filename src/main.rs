fn main() {
    if let Err(err) = silicon::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
