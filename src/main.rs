fn main() {
    if let Err(err) = restolens::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
